//! CLI adapter for the cablecheck inference engine.
//!
//! A thin I/O wrapper: builds a `PinSnapshot` from command-line input,
//! calls the core engine, and renders or exports the resulting
//! `CapabilityReport`. No decision logic lives here.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use tracing_subscriber as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use commands::{Commands, OutputFormat, RoleFilter};
pub use error::CliError;
pub use parser::Cli;
