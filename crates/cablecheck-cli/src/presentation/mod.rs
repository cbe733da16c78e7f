//! Terminal rendering for reports and the pin registry.
//!
//! Pure formatting over core output types; the engine's explanation
//! lines are passed through verbatim, never rewritten here.

pub mod pin_display;
pub mod report_display;

pub use pin_display::format_pin_listing;
pub use report_display::{fault_label, format_report};
