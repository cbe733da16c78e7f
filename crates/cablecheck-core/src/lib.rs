//! Core inference logic for the USB cable checker.
//!
//! This crate contains the two components with real decision logic:
//!
//! - the **pin registry** ([`domain::registry`]) — the fixed catalog of
//!   recognized USB-C signals, their roles, and their coincidence groups;
//! - the **inference engine** ([`services::analyzer`]) — a pure function
//!   from a pin-activation snapshot to a capability report plus a single
//!   best-fit cable classification.
//!
//! Everything here is synchronous and side-effect free. Presentation
//! concerns (rendering, export targets, argument parsing) live in the
//! CLI adapter crate.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    CapabilityFlags, CapabilityReport, Classification, DiffPair, Pin, PinGroup, PinRegistry,
    PinRole, PinSnapshot, SuperSpeedLanes, WiringFaults, usb_c_registry,
};
pub use error::{AnalysisError, InvalidSnapshotError, UnknownPinError};
pub use services::{CableAnalyzer, analyze};
