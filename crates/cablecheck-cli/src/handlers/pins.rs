//! Handler for the `pins` command.

use crate::commands::RoleFilter;
use crate::error::CliError;
use crate::presentation::format_pin_listing;

use cablecheck_core::usb_c_registry;

/// Print the pin registry, optionally filtered by role.
pub fn execute(role: Option<RoleFilter>) -> Result<(), CliError> {
    let listing = format_pin_listing(usb_c_registry(), role.map(RoleFilter::role));
    print!("{listing}");
    Ok(())
}
