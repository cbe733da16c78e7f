//! Capability report rendering for CLI output.

use std::fmt::Write;

use cablecheck_core::{CapabilityReport, WiringFaults};

/// Human label for a single wiring fault flag.
pub fn fault_label(fault: WiringFaults) -> &'static str {
    if fault == WiringFaults::INCOMPLETE_POWER {
        "incomplete power wiring (VBUS/GND)"
    } else if fault == WiringFaults::PARTIAL_USB2 {
        "broken USB 2.0 D+/D- pair"
    } else if fault == WiringFaults::PARTIAL_LANE {
        "incomplete SuperSpeed lane"
    } else if fault == WiringFaults::BROKEN_PAIR {
        "broken differential pair"
    } else if fault == WiringFaults::PARTIAL_SBU {
        "broken sideband pair"
    } else {
        "unknown fault"
    }
}

/// Render a report as human-readable sections.
///
/// The classification headline comes first (mirroring the original
/// board tool), then derived capabilities, then the engine's explanation
/// lines verbatim, then any wiring faults.
pub fn format_report(report: &CapabilityReport) -> String {
    let mut out = String::new();
    let flags = &report.flags;

    let _ = writeln!(out, "{}", report.classification);

    let _ = writeln!(out, "\nCapabilities:");
    let _ = writeln!(out, "  Power delivery: {}", yes_no(flags.power));
    let _ = writeln!(out, "  USB 2.0 data: {}", yes_no(flags.usb2_data));
    let _ = writeln!(out, "  SuperSpeed (USB 3.x): {}", flags.super_speed);
    let _ = writeln!(
        out,
        "  Config channel: {}",
        yes_no(flags.config_channel_present)
    );
    let _ = writeln!(out, "  Sideband (SBU): {}", yes_no(flags.sideband_present));

    if !report.explanation.is_empty() {
        let _ = writeln!(out, "\nAnalysis:");
        for line in &report.explanation {
            let _ = writeln!(out, "  {line}");
        }
    }

    if !report.faults.is_empty() {
        let _ = writeln!(out, "\nWiring faults:");
        for fault in report.faults.iter() {
            let _ = writeln!(out, "  {}", fault_label(fault));
        }
    }

    out
}

const fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cablecheck_core::{PinSnapshot, analyze};

    #[test]
    fn test_headline_is_the_classification() {
        let report = analyze(&PinSnapshot::from_active(["VBUS", "GND"])).unwrap();
        let text = format_report(&report);
        assert!(text.starts_with("Charge-Only Cable\n"));
        assert!(text.contains("  Power delivery: Yes"));
        assert!(text.contains("  USB 2.0 data: No"));
    }

    #[test]
    fn test_faults_section_only_when_present() {
        let clean = analyze(&PinSnapshot::from_active(["VBUS", "GND"])).unwrap();
        assert!(!format_report(&clean).contains("Wiring faults:"));

        let broken = analyze(&PinSnapshot::from_active(["D+"])).unwrap();
        let text = format_report(&broken);
        assert!(text.contains("Wiring faults:"));
        assert!(text.contains("broken USB 2.0 D+/D- pair"));
    }

    #[test]
    fn test_explanation_lines_pass_through_verbatim() {
        let report = analyze(&PinSnapshot::from_active(["CC2"])).unwrap();
        let text = format_report(&report);
        assert!(text.contains("  Configuration channel present (CC2)"));
    }
}
