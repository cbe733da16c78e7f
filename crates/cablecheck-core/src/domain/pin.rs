//! Pin vocabulary: roles, catalog entries, and coincidence groups.
//!
//! A `Pin` models one logical USB-C signal as exposed on the test board.
//! Signals that only function together (a differential pair, the CC pair,
//! the SBU pair) are additionally described by named groups so that the
//! inference rules never hard-code pin id literals.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Semantic role of a pin in the cable.
///
/// Roles drive capability derivation: each capability predicate selects
/// the pins (or groups) of one role and inspects their activation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum PinRole {
    /// Power supply conductor (VBUS).
    #[strum(serialize = "Power")]
    Power,
    /// Ground return conductor.
    #[strum(serialize = "Ground")]
    Ground,
    /// USB 2.0 data conductor (D+/D-).
    #[strum(serialize = "USB 2.0 Data")]
    Usb2Data,
    /// SuperSpeed TX/RX conductor (USB 3.x lane member).
    #[strum(serialize = "SuperSpeed Lane")]
    SuperSpeedLane,
    /// Configuration channel conductor (CC1/CC2).
    #[strum(serialize = "Config Channel")]
    ConfigChannel,
    /// Sideband use conductor (SBU1/SBU2).
    #[strum(serialize = "Sideband")]
    Sideband,
}

/// One entry in the pin registry.
///
/// Pins are defined once at process start as literal constants and never
/// mutated; all fields are `'static` borrows into the registry data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pin {
    /// Stable, unique identifier (the board's signal label, e.g. `"TX1+"`).
    pub id: &'static str,
    /// Semantic role of this pin.
    pub role: PinRole,
    /// Name of the coincidence group this pin belongs to, if any.
    pub group: Option<&'static str>,
    /// Human-readable description (the original board's tooltip text).
    pub description: &'static str,
}

/// A named set of pins that only carry their function together.
///
/// The corresponding capability flag is true only when *all* members are
/// active; partial activation is reported as a wiring fault instead.
/// (The CC group is the one exception: either conductor alone suffices
/// for orientation detection, which its predicate encodes.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinGroup {
    /// Group name used in explanation lines (e.g. `"Lane 1"`).
    pub name: &'static str,
    /// Role shared by every member pin.
    pub role: PinRole,
    /// Member pin ids, in registry order.
    pub members: &'static [&'static str],
}

impl PinGroup {
    /// Number of member pins.
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the group has no members (never the case for the
    /// built-in registry, present for completeness).
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A two-pin differential pair inside a SuperSpeed lane.
///
/// Used for broken-pair detection: exactly one active member means the
/// pair is physically miswired, which is reported as a fault even though
/// the lane-level predicate already scores the lane incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffPair {
    /// Pair name used in explanation lines (e.g. `"Lane 1 TX"`).
    pub name: &'static str,
    /// The two member pin ids (positive, negative).
    pub members: [&'static str; 2],
}
