//! Command handlers that delegate to the core engine.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input into a `PinSnapshot`
//!   2. Call the core engine
//!   3. Format output for the terminal
//!
//! Handlers should NOT contain inference logic of their own.

pub mod analyze;
pub mod pins;
