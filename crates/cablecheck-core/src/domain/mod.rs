//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! presentation concerns (terminal rendering, export formatting, etc.).
//!
//! # Structure
//!
//! - `pin` - Pin vocabulary (`Pin`, `PinRole`, `PinGroup`, `DiffPair`)
//! - `registry` - The fixed USB-C pin catalog (`PinRegistry`)
//! - `snapshot` - Caller-supplied pin activation state (`PinSnapshot`)
//! - `report` - Engine output (`CapabilityFlags`, `Classification`,
//!   `CapabilityReport`)

pub mod pin;
pub mod registry;
pub mod report;
pub mod snapshot;

// Re-export pin types at the domain level for convenience
pub use pin::{DiffPair, Pin, PinGroup, PinRole};

// Re-export registry types at the domain level for convenience
pub use registry::{PinRegistry, usb_c_registry};

// Re-export snapshot types at the domain level for convenience
pub use snapshot::PinSnapshot;

// Re-export report types at the domain level for convenience
pub use report::{
    CapabilityFlags, CapabilityReport, Classification, SuperSpeedLanes, WiringFaults,
};
