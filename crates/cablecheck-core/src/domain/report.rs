//! Engine output types: capability flags, wiring faults, classification,
//! and the full capability report.
//!
//! # Invariant
//!
//! Capability flags are independent facts and may hold simultaneously; the
//! classification is a single label chosen by a fixed precedence order over
//! those flags. A flag backed by a multi-pin group is true only when the
//! whole group is active — partial activation lands in [`WiringFaults`]
//! instead of silently upgrading or disappearing.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// How many complete SuperSpeed lanes the snapshot carries.
///
/// A lane counts only when all four of its member pins are active; this is
/// an ordinal over complete lane groups, not a pin count.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    Display,
)]
pub enum SuperSpeedLanes {
    /// No complete lane.
    #[default]
    #[strum(serialize = "none")]
    None,
    /// Exactly one complete lane (works in one orientation only).
    #[strum(serialize = "single-lane")]
    SingleLane,
    /// Both lanes complete.
    #[strum(serialize = "dual-lane")]
    DualLane,
}

impl SuperSpeedLanes {
    /// Map a count of complete lanes to the ordinal.
    pub fn from_complete_lanes(count: usize) -> Self {
        match count {
            0 => Self::None,
            1 => Self::SingleLane,
            _ => Self::DualLane,
        }
    }

    /// Number of complete lanes this ordinal represents.
    pub const fn lane_count(self) -> u8 {
        match self {
            Self::None => 0,
            Self::SingleLane => 1,
            Self::DualLane => 2,
        }
    }
}

bitflags! {
    /// Degraded-wiring conditions observed during capability derivation.
    ///
    /// These never flip a capability flag on; they record why a flag
    /// stayed off (or why a lane did not count) so the report can name
    /// the miswired group explicitly.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct WiringFaults: u8 {
        /// VBUS without GND, or GND without VBUS.
        const INCOMPLETE_POWER = 0b0000_0001;

        /// Exactly one conductor of the D+/D- pair is active.
        const PARTIAL_USB2     = 0b0000_0010;

        /// A SuperSpeed lane has some but not all member pins active.
        const PARTIAL_LANE     = 0b0000_0100;

        /// A TX or RX differential pair has exactly one active member.
        const BROKEN_PAIR      = 0b0000_1000;

        /// Exactly one SBU conductor is active.
        const PARTIAL_SBU      = 0b0001_0000;
    }
}

impl Serialize for WiringFaults {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WiringFaults {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// Independent capability facts derived from a snapshot (Pass 1 output).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityFlags {
    /// Power path present: at least one VBUS *and* one GND active.
    pub power: bool,
    /// Full USB 2.0 data pair active.
    pub usb2_data: bool,
    /// Count of complete SuperSpeed lanes.
    pub super_speed: SuperSpeedLanes,
    /// At least one CC conductor active (one suffices for orientation
    /// detection).
    pub config_channel_present: bool,
    /// Both SBU conductors active.
    pub sideband_present: bool,
}

/// The single best-fit cable label (Pass 2 output).
///
/// Chosen by first-match-wins precedence; exactly one label per snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Classification {
    /// Both lanes, sideband, power, and USB 2.0 all wired.
    #[strum(serialize = "Premium USB-C Cable (Full-Featured)")]
    SuperSpeedFullFeatured,
    /// At least one complete lane, but no sideband pair.
    #[strum(serialize = "SuperSpeed Data Cable (No Sideband)")]
    SuperSpeedNoSideband,
    /// USB 2.0 pair plus a power path.
    #[strum(serialize = "USB 2.0 Data + Power Cable")]
    Usb2DataWithPower,
    /// USB 2.0 pair without a power path.
    #[strum(serialize = "USB 2.0 Data-Only Cable")]
    Usb2DataOnly,
    /// Power path only; no data of any kind.
    #[strum(serialize = "Charge-Only Cable")]
    ChargeOnly,
    /// Nothing wired at all.
    #[strum(serialize = "No Connection")]
    NoConnection,
    /// Flags combine in a way no rule anticipated; the engine names the
    /// ambiguity instead of guessing a closest match.
    #[strum(serialize = "Indeterminate")]
    Indeterminate,
}

/// The engine's complete output for one snapshot.
///
/// Immutable value; the engine keeps no reference to it after returning.
/// Explanation lines are plain display-ready text in the fixed Pass 1
/// evaluation order, with no rendering markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityReport {
    /// Derived capability facts.
    pub flags: CapabilityFlags,
    /// Degraded-wiring conditions observed along the way.
    pub faults: WiringFaults,
    /// The single best-fit label.
    pub classification: Classification,
    /// One line per fired or degraded predicate, in evaluation order.
    pub explanation: Vec<String>,
}

impl CapabilityReport {
    /// Flatten the report to a copyable text block: every explanation
    /// line followed by the final classification label.
    pub fn to_text(&self) -> String {
        let mut text = self.explanation.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&format!("Classification: {}", self.classification));
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_lane_ordinal_from_counts() {
        assert_eq!(SuperSpeedLanes::from_complete_lanes(0), SuperSpeedLanes::None);
        assert_eq!(
            SuperSpeedLanes::from_complete_lanes(1),
            SuperSpeedLanes::SingleLane
        );
        assert_eq!(
            SuperSpeedLanes::from_complete_lanes(2),
            SuperSpeedLanes::DualLane
        );
    }

    #[test]
    fn test_lane_ordinal_is_ordered() {
        assert!(SuperSpeedLanes::None < SuperSpeedLanes::SingleLane);
        assert!(SuperSpeedLanes::SingleLane < SuperSpeedLanes::DualLane);
    }

    #[test]
    fn test_classification_labels_are_distinct() {
        let labels: Vec<String> = Classification::iter().map(|c| c.to_string()).collect();
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }

    #[test]
    fn test_faults_roundtrip_as_bits() {
        let faults = WiringFaults::PARTIAL_USB2 | WiringFaults::BROKEN_PAIR;
        let json = serde_json::to_string(&faults).unwrap();
        assert_eq!(json, "10");
        let back: WiringFaults = serde_json::from_str(&json).unwrap();
        assert_eq!(back, faults);
    }

    #[test]
    fn test_report_text_ends_with_classification() {
        let report = CapabilityReport {
            flags: CapabilityFlags {
                power: true,
                ..CapabilityFlags::default()
            },
            faults: WiringFaults::empty(),
            classification: Classification::ChargeOnly,
            explanation: vec!["Power path present (VBUS, GND)".to_string()],
        };
        assert_eq!(
            report.to_text(),
            "Power path present (VBUS, GND)\nClassification: Charge-Only Cable"
        );
    }
}
