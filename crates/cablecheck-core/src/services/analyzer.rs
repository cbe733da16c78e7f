//! The capability inference engine.
//!
//! `analyze` runs two deterministic passes over a validated snapshot:
//!
//! **Pass 1 — capability derivation.** Independent predicates, evaluated
//! in fixed order (power, USB 2.0 pair, SuperSpeed lanes, differential
//! pairs, orientation, CC, SBU). Each predicate that fires or degrades
//! appends exactly one explanation line naming the pins involved, so the
//! explanation log is reproducible line for line.
//!
//! **Pass 2 — classification.** An ordered guard table evaluated top to
//! bottom; the first satisfied guard wins. More capable labels sit above
//! weaker ones so a snapshot satisfying several guards reports its most
//! capable truthful classification. The unguarded `Indeterminate`
//! fallback guarantees totality without fabricating certainty.
//!
//! Both validation errors are raised before Pass 1; no rule can fail.

use tracing::debug;

use crate::domain::pin::{PinGroup, PinRole};
use crate::domain::registry::{PinRegistry, usb_c_registry};
use crate::domain::report::{
    CapabilityFlags, CapabilityReport, Classification, SuperSpeedLanes, WiringFaults,
};
use crate::domain::snapshot::PinSnapshot;
use crate::error::AnalysisError;

/// Classification guard table, highest precedence first.
///
/// Append new rules at the correct priority position; evaluation is
/// strictly first-match-wins. Guards see the wiring faults as well as
/// the flags: NoConnection demands a genuinely untouched board, so a
/// snapshot whose only activity is partial wiring (a lone SBU pin, a
/// 3/4 lane) falls through every guard to `Indeterminate` instead of
/// being mistaken for an unconnected cable.
const CLASSIFICATION_RULES: [(fn(&CapabilityFlags, WiringFaults) -> bool, Classification); 6] = [
    (
        |f, _| {
            f.super_speed == SuperSpeedLanes::DualLane
                && f.sideband_present
                && f.power
                && f.usb2_data
        },
        Classification::SuperSpeedFullFeatured,
    ),
    (
        |f, _| f.super_speed != SuperSpeedLanes::None && !f.sideband_present,
        Classification::SuperSpeedNoSideband,
    ),
    (
        |f, _| f.usb2_data && f.power,
        Classification::Usb2DataWithPower,
    ),
    (
        |f, _| f.usb2_data && !f.power,
        Classification::Usb2DataOnly,
    ),
    (
        |f, _| f.power && !f.usb2_data && f.super_speed == SuperSpeedLanes::None,
        Classification::ChargeOnly,
    ),
    (
        |f, faults| {
            !f.power
                && !f.usb2_data
                && f.super_speed == SuperSpeedLanes::None
                && !f.config_channel_present
                && !f.sideband_present
                && faults.is_empty()
        },
        Classification::NoConnection,
    ),
];

/// The inference engine: pure, re-entrant, no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct CableAnalyzer<'r> {
    registry: &'r PinRegistry,
}

impl<'r> CableAnalyzer<'r> {
    /// Create an analyzer over the given registry.
    pub const fn new(registry: &'r PinRegistry) -> Self {
        Self { registry }
    }

    /// Analyze a snapshot into a capability report.
    ///
    /// Fails only at the validation boundary (unknown pin id); every
    /// validated snapshot, including all-false and all-true, yields a
    /// complete report with exactly one classification.
    pub fn analyze(&self, snapshot: &PinSnapshot) -> Result<CapabilityReport, AnalysisError> {
        snapshot.validate(self.registry)?;
        debug!(
            active = snapshot.active_pins().count(),
            "snapshot validated"
        );

        let mut flags = CapabilityFlags::default();
        let mut faults = WiringFaults::empty();
        let mut explanation = Vec::new();

        self.derive_power(snapshot, &mut flags, &mut faults, &mut explanation);
        self.derive_usb2(snapshot, &mut flags, &mut faults, &mut explanation);
        self.derive_super_speed(snapshot, &mut flags, &mut faults, &mut explanation);
        self.derive_config_channel(snapshot, &mut flags, &mut explanation);
        self.derive_sideband(snapshot, &mut flags, &mut faults, &mut explanation);

        let classification = classify(&flags, faults);
        debug!(%classification, ?faults, "snapshot classified");

        Ok(CapabilityReport {
            flags,
            faults,
            classification,
            explanation,
        })
    }

    /// Power requires a return path: at least one Power pin *and* at
    /// least one Ground pin. A lone side is reported as incomplete
    /// wiring, not as power.
    fn derive_power(
        &self,
        snapshot: &PinSnapshot,
        flags: &mut CapabilityFlags,
        faults: &mut WiringFaults,
        explanation: &mut Vec<String>,
    ) {
        let supply = self.active_of_role(snapshot, PinRole::Power);
        let ground = self.active_of_role(snapshot, PinRole::Ground);

        match (supply.is_empty(), ground.is_empty()) {
            (false, false) => {
                flags.power = true;
                explanation.push(format!(
                    "Power path present ({}, {})",
                    supply.join(", "),
                    ground.join(", ")
                ));
            }
            (false, true) => {
                *faults |= WiringFaults::INCOMPLETE_POWER;
                explanation.push(format!(
                    "Power wiring incomplete: {} active without a ground return",
                    supply.join(", ")
                ));
            }
            (true, false) => {
                *faults |= WiringFaults::INCOMPLETE_POWER;
                explanation.push(format!(
                    "Power wiring incomplete: {} active without a power supply",
                    ground.join(", ")
                ));
            }
            (true, true) => {}
        }
    }

    /// USB 2.0 data needs both conductors of the D+/D- pair.
    fn derive_usb2(
        &self,
        snapshot: &PinSnapshot,
        flags: &mut CapabilityFlags,
        faults: &mut WiringFaults,
        explanation: &mut Vec<String>,
    ) {
        for group in self.registry.groups_of(PinRole::Usb2Data) {
            let (active, missing) = split_group(group, snapshot);
            if missing.is_empty() && !active.is_empty() {
                flags.usb2_data = true;
                explanation.push(format!(
                    "USB 2.0 data pair complete ({})",
                    active.join(", ")
                ));
            } else if !active.is_empty() {
                *faults |= WiringFaults::PARTIAL_USB2;
                explanation.push(format!(
                    "Partial USB 2.0 wiring: {} active, {} missing",
                    active.join(", "),
                    missing.join(", ")
                ));
            }
        }
    }

    /// SuperSpeed is an ordinal over *complete* lane groups. Lane status
    /// lines come first, then broken differential pairs, then the
    /// one-orientation note for single-lane cables.
    fn derive_super_speed(
        &self,
        snapshot: &PinSnapshot,
        flags: &mut CapabilityFlags,
        faults: &mut WiringFaults,
        explanation: &mut Vec<String>,
    ) {
        let mut complete_lanes = 0;
        let mut partial_lanes = 0;
        let mut idle_lanes = 0;

        for group in self.registry.groups_of(PinRole::SuperSpeedLane) {
            let (active, _) = split_group(group, snapshot);
            if active.len() == group.len() {
                complete_lanes += 1;
                explanation.push(format!(
                    "SuperSpeed {} complete ({})",
                    group.name,
                    active.join(", ")
                ));
            } else if active.is_empty() {
                idle_lanes += 1;
            } else {
                partial_lanes += 1;
                *faults |= WiringFaults::PARTIAL_LANE;
                explanation.push(format!(
                    "SuperSpeed {} incomplete ({}/{} pins active)",
                    group.name,
                    active.len(),
                    group.len()
                ));
            }
        }

        for pair in self.registry.diff_pairs() {
            let [positive, negative] = pair.members;
            let (active, missing) = match (snapshot.is_active(positive), snapshot.is_active(negative))
            {
                (true, false) => (positive, negative),
                (false, true) => (negative, positive),
                _ => continue,
            };
            *faults |= WiringFaults::BROKEN_PAIR;
            explanation.push(format!(
                "{} differential pair broken: {} active, {} missing",
                pair.name, active, missing
            ));
        }

        if complete_lanes == 1 && partial_lanes == 0 && idle_lanes > 0 {
            explanation
                .push("Single SuperSpeed lane wired: cable works in one orientation only".into());
        }

        flags.super_speed = SuperSpeedLanes::from_complete_lanes(complete_lanes);
    }

    /// One live CC conductor suffices for orientation detection.
    fn derive_config_channel(
        &self,
        snapshot: &PinSnapshot,
        flags: &mut CapabilityFlags,
        explanation: &mut Vec<String>,
    ) {
        for group in self.registry.groups_of(PinRole::ConfigChannel) {
            let (active, _) = split_group(group, snapshot);
            if !active.is_empty() {
                flags.config_channel_present = true;
                explanation.push(format!(
                    "Configuration channel present ({})",
                    active.join(", ")
                ));
            }
        }
    }

    /// Sideband functions (alt modes) require the full SBU pair.
    fn derive_sideband(
        &self,
        snapshot: &PinSnapshot,
        flags: &mut CapabilityFlags,
        faults: &mut WiringFaults,
        explanation: &mut Vec<String>,
    ) {
        for group in self.registry.groups_of(PinRole::Sideband) {
            let (active, missing) = split_group(group, snapshot);
            if missing.is_empty() && !active.is_empty() {
                flags.sideband_present = true;
                explanation.push(format!("Sideband pair complete ({})", active.join(", ")));
            } else if !active.is_empty() {
                *faults |= WiringFaults::PARTIAL_SBU;
                explanation.push(format!(
                    "Partial sideband wiring: {} active, {} missing",
                    active.join(", "),
                    missing.join(", ")
                ));
            }
        }
    }

    /// Active pin ids of a role, in registry order.
    fn active_of_role(&self, snapshot: &PinSnapshot, role: PinRole) -> Vec<&'static str> {
        self.registry
            .pins_of(role)
            .filter(|pin| snapshot.is_active(pin.id))
            .map(|pin| pin.id)
            .collect()
    }
}

impl Default for CableAnalyzer<'static> {
    fn default() -> Self {
        Self::new(usb_c_registry())
    }
}

/// First-match-wins dispatch over the guard table.
fn classify(flags: &CapabilityFlags, faults: WiringFaults) -> Classification {
    for (guard, label) in CLASSIFICATION_RULES {
        if guard(flags, faults) {
            return label;
        }
    }
    Classification::Indeterminate
}

/// Partition a group's members into (active, missing), registry order.
fn split_group(
    group: &PinGroup,
    snapshot: &PinSnapshot,
) -> (Vec<&'static str>, Vec<&'static str>) {
    group
        .members
        .iter()
        .copied()
        .partition(|member| snapshot.is_active(member))
}

/// Analyze a snapshot against the built-in USB-C registry.
pub fn analyze(snapshot: &PinSnapshot) -> Result<CapabilityReport, AnalysisError> {
    CableAnalyzer::default().analyze(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AnalysisError, UnknownPinError};

    fn active(pins: &[&str]) -> PinSnapshot {
        PinSnapshot::from_active(pins.iter().copied())
    }

    const LANE_1: [&str; 4] = ["TX1+", "TX1-", "RX1+", "RX1-"];
    const LANE_2: [&str; 4] = ["TX2+", "TX2-", "RX2+", "RX2-"];

    fn full_featured() -> PinSnapshot {
        let mut pins = vec!["VBUS", "GND", "D+", "D-", "CC1", "SBU1", "SBU2"];
        pins.extend(LANE_1);
        pins.extend(LANE_2);
        active(&pins)
    }

    #[test]
    fn test_all_inactive_is_no_connection() {
        let report = analyze(&PinSnapshot::new()).unwrap();
        assert_eq!(report.classification, Classification::NoConnection);
        assert_eq!(report.flags, CapabilityFlags::default());
        assert!(report.faults.is_empty());
        assert!(report.explanation.len() <= 1);
    }

    #[test]
    fn test_power_and_ground_is_charge_only() {
        let report = analyze(&active(&["VBUS", "GND"])).unwrap();
        assert!(report.flags.power);
        assert!(!report.flags.usb2_data);
        assert_eq!(report.flags.super_speed, SuperSpeedLanes::None);
        assert_eq!(report.classification, Classification::ChargeOnly);
    }

    #[test]
    fn test_usb2_with_power() {
        let report = analyze(&active(&["VBUS", "GND", "D+", "D-"])).unwrap();
        assert!(report.flags.power);
        assert!(report.flags.usb2_data);
        assert_eq!(report.classification, Classification::Usb2DataWithPower);
    }

    #[test]
    fn test_usb2_without_power() {
        let report = analyze(&active(&["D+", "D-"])).unwrap();
        assert!(report.flags.usb2_data);
        assert!(!report.flags.power);
        assert_eq!(report.classification, Classification::Usb2DataOnly);
    }

    #[test]
    fn test_full_featured_cable() {
        let report = analyze(&full_featured()).unwrap();
        assert_eq!(report.flags.super_speed, SuperSpeedLanes::DualLane);
        assert!(report.flags.sideband_present);
        assert_eq!(
            report.classification,
            Classification::SuperSpeedFullFeatured
        );
    }

    #[test]
    fn test_lone_sbu_pin_is_indeterminate() {
        let report = analyze(&active(&["SBU1"])).unwrap();
        assert_eq!(report.classification, Classification::Indeterminate);
        assert!(report.faults.contains(WiringFaults::PARTIAL_SBU));
    }

    #[test]
    fn test_priority_full_featured_beats_usb2_with_power() {
        // Satisfies both rule 1 and rule 3; rule 1 must win.
        let report = analyze(&full_featured()).unwrap();
        assert!(report.flags.usb2_data && report.flags.power);
        assert_eq!(
            report.classification,
            Classification::SuperSpeedFullFeatured
        );
    }

    #[test]
    fn test_power_requires_ground_return() {
        let report = analyze(&active(&["VBUS"])).unwrap();
        assert!(!report.flags.power);
        assert!(report.faults.contains(WiringFaults::INCOMPLETE_POWER));
        assert_eq!(
            report.explanation,
            ["Power wiring incomplete: VBUS active without a ground return"]
        );
        assert_eq!(report.classification, Classification::Indeterminate);
    }

    #[test]
    fn test_ground_without_supply_is_incomplete() {
        let report = analyze(&active(&["GND"])).unwrap();
        assert!(!report.flags.power);
        assert!(report.faults.contains(WiringFaults::INCOMPLETE_POWER));
    }

    #[test]
    fn test_partial_usb2_pair_names_the_group() {
        let report = analyze(&active(&["D+"])).unwrap();
        assert!(!report.flags.usb2_data);
        assert!(report.faults.contains(WiringFaults::PARTIAL_USB2));
        assert_eq!(
            report.explanation,
            ["Partial USB 2.0 wiring: D+ active, D- missing"]
        );
    }

    #[test]
    fn test_single_complete_lane_is_single_lane() {
        let mut pins = vec!["D+", "D-"];
        pins.extend(LANE_1);
        let report = analyze(&active(&pins)).unwrap();
        assert_eq!(report.flags.super_speed, SuperSpeedLanes::SingleLane);
        assert_eq!(report.classification, Classification::SuperSpeedNoSideband);
        assert!(
            report
                .explanation
                .contains(&"Single SuperSpeed lane wired: cable works in one orientation only"
                    .to_string())
        );
    }

    #[test]
    fn test_incomplete_lane_does_not_count() {
        let report = analyze(&active(&["TX1+", "TX1-", "RX1+"])).unwrap();
        assert_eq!(report.flags.super_speed, SuperSpeedLanes::None);
        assert!(report.faults.contains(WiringFaults::PARTIAL_LANE));
        assert!(report.faults.contains(WiringFaults::BROKEN_PAIR));
        assert_eq!(
            report.explanation,
            [
                "SuperSpeed Lane 1 incomplete (3/4 pins active)",
                "Lane 1 RX differential pair broken: RX1+ active, RX1- missing",
            ]
        );
        // No flag fired, but the recorded faults keep this off the
        // NoConnection guard: a damaged board is ambiguous, not dead.
        assert_eq!(report.classification, Classification::Indeterminate);
    }

    #[test]
    fn test_either_cc_conductor_suffices() {
        for cc in ["CC1", "CC2"] {
            let report = analyze(&active(&[cc])).unwrap();
            assert!(report.flags.config_channel_present);
            assert_eq!(
                report.explanation,
                [format!("Configuration channel present ({cc})")]
            );
        }
    }

    #[test]
    fn test_explanation_order_is_fixed() {
        let report = analyze(&full_featured()).unwrap();
        assert_eq!(
            report.explanation,
            [
                "Power path present (VBUS, GND)",
                "USB 2.0 data pair complete (D+, D-)",
                "SuperSpeed Lane 1 complete (TX1+, TX1-, RX1+, RX1-)",
                "SuperSpeed Lane 2 complete (TX2+, TX2-, RX2+, RX2-)",
                "Configuration channel present (CC1)",
                "Sideband pair complete (SBU1, SBU2)",
            ]
        );
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let snapshot = full_featured();
        let first = analyze(&snapshot).unwrap();
        let second = analyze(&snapshot).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_text(), second.to_text());
    }

    #[test]
    fn test_all_pins_active_is_total() {
        let snapshot = PinSnapshot::from_active(usb_c_registry().all_pins().map(|p| p.id));
        let report = analyze(&snapshot).unwrap();
        assert_eq!(
            report.classification,
            Classification::SuperSpeedFullFeatured
        );
        assert!(report.faults.is_empty());
    }

    #[test]
    fn test_unknown_pin_is_rejected_before_rules() {
        let err = analyze(&active(&["VBUS", "GND", "VCONN"])).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnknownPin(UnknownPinError("VCONN".to_string()))
        );
    }

    #[test]
    fn test_fault_only_boards_are_never_no_connection() {
        // Each of these snapshots derives all-false flags but records a
        // wiring fault; only a genuinely untouched board is NoConnection.
        for pins in [
            &["SBU1"][..],
            &["VBUS"][..],
            &["D-"][..],
            &["TX2+"][..],
        ] {
            let report = analyze(&active(pins)).unwrap();
            assert_eq!(report.flags, CapabilityFlags::default());
            assert!(!report.faults.is_empty());
            assert_eq!(
                report.classification,
                Classification::Indeterminate,
                "pins {pins:?}"
            );
        }
    }

    #[test]
    fn test_engine_never_mutates_snapshot() {
        let snapshot = active(&["VBUS", "GND", "D+"]);
        let before = snapshot.clone();
        let _ = analyze(&snapshot).unwrap();
        assert_eq!(snapshot, before);
    }
}
