//! Caller-supplied pin activation state.
//!
//! A snapshot maps pin ids to "active" booleans. Ids not present in the
//! map default to inactive, so an empty snapshot is the all-off board.
//! Snapshots are created fresh per interaction and only ever *read* by
//! the engine; validation against the registry happens inside `analyze`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::registry::PinRegistry;
use crate::error::{InvalidSnapshotError, UnknownPinError};

/// Activation state for a set of pins.
///
/// Backed by a `BTreeMap` so iteration (and therefore validation error
/// selection) is deterministic regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinSnapshot {
    states: BTreeMap<String, bool>,
}

impl PinSnapshot {
    /// Empty snapshot: every pin inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot with the given pins active and all others inactive.
    pub fn from_active<I, S>(active: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut snapshot = Self::new();
        for id in active {
            snapshot.activate(id);
        }
        snapshot
    }

    /// Parse a snapshot from a JSON object of pin-id to boolean entries.
    pub fn from_json(json: &str) -> Result<Self, InvalidSnapshotError> {
        serde_json::from_str(json)
            .map_err(|err| InvalidSnapshotError::new(format!("not a pin-id to bool object: {err}")))
    }

    /// Set the activation state of one pin.
    pub fn set(&mut self, pin_id: impl Into<String>, active: bool) {
        self.states.insert(pin_id.into(), active);
    }

    /// Mark one pin active.
    pub fn activate(&mut self, pin_id: impl Into<String>) {
        self.set(pin_id, true);
    }

    /// Activation state of a pin; ids absent from the snapshot are inactive.
    pub fn is_active(&self, pin_id: &str) -> bool {
        self.states.get(pin_id).copied().unwrap_or(false)
    }

    /// Ids of all active pins, in lexicographic order.
    pub fn active_pins(&self) -> impl Iterator<Item = &str> {
        self.states
            .iter()
            .filter(|(_, active)| **active)
            .map(|(id, _)| id.as_str())
    }

    /// All pin ids the snapshot mentions (active or not).
    pub fn mentioned_pins(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// Verify that every mentioned pin id exists in the registry.
    ///
    /// Returns the first unknown id in lexicographic order.
    pub fn validate(&self, registry: &PinRegistry) -> Result<(), UnknownPinError> {
        for id in self.mentioned_pins() {
            if !registry.contains(id) {
                return Err(UnknownPinError(id.to_string()));
            }
        }
        Ok(())
    }
}
