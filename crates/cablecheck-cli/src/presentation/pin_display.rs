//! Pin registry listing for CLI output.

use std::fmt::Write;

use cablecheck_core::{PinRegistry, PinRole};

/// Render the registry as an aligned table, optionally filtered by role.
///
/// Rows keep the registry's stable declared order.
pub fn format_pin_listing(registry: &PinRegistry, role: Option<PinRole>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:<16} {:<14} DESCRIPTION",
        "PIN", "ROLE", "GROUP"
    );

    for pin in registry.all_pins() {
        if role.is_some_and(|wanted| pin.role != wanted) {
            continue;
        }
        let _ = writeln!(
            out,
            "{:<6} {:<16} {:<14} {}",
            pin.id,
            pin.role.to_string(),
            pin.group.unwrap_or("-"),
            pin.description
        );
    }

    out
}
