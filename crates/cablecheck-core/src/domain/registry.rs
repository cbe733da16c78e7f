//! The fixed catalog of recognized pins and pin groups.
//!
//! The registry is process-wide read-only state: defined as a literal
//! constant, shared by reference into the engine, never mutated. Lookup
//! order is the declared order, which both rendering and explanation
//! text rely on for determinism.

use crate::domain::pin::{DiffPair, Pin, PinGroup, PinRole};
use crate::error::UnknownPinError;

// ─────────────────────────────────────────────────────────────────────────────
// USB-C Registry Data
// ─────────────────────────────────────────────────────────────────────────────

/// The 16 logical signals of a full-featured USB-C cable, in display order.
///
/// Descriptions are the checker board's tooltip texts.
const USB_C_PINS: &[Pin] = &[
    Pin {
        id: "VBUS",
        role: PinRole::Power,
        group: None,
        description: "Power supply pin (5V, 9V, 15V, 20V)",
    },
    Pin {
        id: "GND",
        role: PinRole::Ground,
        group: None,
        description: "Ground pin for power and signal return",
    },
    Pin {
        id: "D+",
        role: PinRole::Usb2Data,
        group: Some("USB 2.0 pair"),
        description: "USB 2.0 data positive",
    },
    Pin {
        id: "D-",
        role: PinRole::Usb2Data,
        group: Some("USB 2.0 pair"),
        description: "USB 2.0 data negative",
    },
    Pin {
        id: "CC1",
        role: PinRole::ConfigChannel,
        group: Some("CC"),
        description: "Configuration Channel 1 for cable detection and power negotiation",
    },
    Pin {
        id: "CC2",
        role: PinRole::ConfigChannel,
        group: Some("CC"),
        description: "Configuration Channel 2 for cable detection and power negotiation",
    },
    Pin {
        id: "SBU1",
        role: PinRole::Sideband,
        group: Some("SBU"),
        description: "Sideband Use 1 for alternate modes (e.g., DisplayPort)",
    },
    Pin {
        id: "SBU2",
        role: PinRole::Sideband,
        group: Some("SBU"),
        description: "Sideband Use 2 for alternate modes (e.g., DisplayPort)",
    },
    Pin {
        id: "TX1+",
        role: PinRole::SuperSpeedLane,
        group: Some("Lane 1"),
        description: "Transmit positive for USB 3.x SuperSpeed lane 1",
    },
    Pin {
        id: "TX1-",
        role: PinRole::SuperSpeedLane,
        group: Some("Lane 1"),
        description: "Transmit negative for USB 3.x SuperSpeed lane 1",
    },
    Pin {
        id: "RX1+",
        role: PinRole::SuperSpeedLane,
        group: Some("Lane 1"),
        description: "Receive positive for USB 3.x SuperSpeed lane 1",
    },
    Pin {
        id: "RX1-",
        role: PinRole::SuperSpeedLane,
        group: Some("Lane 1"),
        description: "Receive negative for USB 3.x SuperSpeed lane 1",
    },
    Pin {
        id: "TX2+",
        role: PinRole::SuperSpeedLane,
        group: Some("Lane 2"),
        description: "Transmit positive for USB 3.x SuperSpeed lane 2",
    },
    Pin {
        id: "TX2-",
        role: PinRole::SuperSpeedLane,
        group: Some("Lane 2"),
        description: "Transmit negative for USB 3.x SuperSpeed lane 2",
    },
    Pin {
        id: "RX2+",
        role: PinRole::SuperSpeedLane,
        group: Some("Lane 2"),
        description: "Receive positive for USB 3.x SuperSpeed lane 2",
    },
    Pin {
        id: "RX2-",
        role: PinRole::SuperSpeedLane,
        group: Some("Lane 2"),
        description: "Receive negative for USB 3.x SuperSpeed lane 2",
    },
];

/// Multi-pin coincidence groups, in evaluation order.
const USB_C_GROUPS: &[PinGroup] = &[
    PinGroup {
        name: "USB 2.0 pair",
        role: PinRole::Usb2Data,
        members: &["D+", "D-"],
    },
    PinGroup {
        name: "Lane 1",
        role: PinRole::SuperSpeedLane,
        members: &["TX1+", "TX1-", "RX1+", "RX1-"],
    },
    PinGroup {
        name: "Lane 2",
        role: PinRole::SuperSpeedLane,
        members: &["TX2+", "TX2-", "RX2+", "RX2-"],
    },
    PinGroup {
        name: "CC",
        role: PinRole::ConfigChannel,
        members: &["CC1", "CC2"],
    },
    PinGroup {
        name: "SBU",
        role: PinRole::Sideband,
        members: &["SBU1", "SBU2"],
    },
];

/// Differential pairs inside the SuperSpeed lanes, in evaluation order.
const USB_C_DIFF_PAIRS: &[DiffPair] = &[
    DiffPair {
        name: "Lane 1 TX",
        members: ["TX1+", "TX1-"],
    },
    DiffPair {
        name: "Lane 1 RX",
        members: ["RX1+", "RX1-"],
    },
    DiffPair {
        name: "Lane 2 TX",
        members: ["TX2+", "TX2-"],
    },
    DiffPair {
        name: "Lane 2 RX",
        members: ["RX2+", "RX2-"],
    },
];

static USB_C_REGISTRY: PinRegistry = PinRegistry {
    pins: USB_C_PINS,
    groups: USB_C_GROUPS,
    diff_pairs: USB_C_DIFF_PAIRS,
};

/// The built-in USB-C registry.
///
/// Constructed once as a static literal; callers hold it by shared
/// reference, so concurrent `analyze` calls need no locking.
pub fn usb_c_registry() -> &'static PinRegistry {
    &USB_C_REGISTRY
}

// ─────────────────────────────────────────────────────────────────────────────
// Registry Type
// ─────────────────────────────────────────────────────────────────────────────

/// A read-only catalog of pins and their coincidence groups.
///
/// No mutation API exists: a registry is built from literal data and
/// treated as immutable for the process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct PinRegistry {
    pins: &'static [Pin],
    groups: &'static [PinGroup],
    diff_pairs: &'static [DiffPair],
}

impl PinRegistry {
    /// All pins in stable declared order.
    pub fn all_pins(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter()
    }

    /// Look up a pin by id.
    pub fn describe(&self, pin_id: &str) -> Result<&Pin, UnknownPinError> {
        self.pins
            .iter()
            .find(|pin| pin.id == pin_id)
            .ok_or_else(|| UnknownPinError(pin_id.to_string()))
    }

    /// True when the registry defines the given pin id.
    pub fn contains(&self, pin_id: &str) -> bool {
        self.pins.iter().any(|pin| pin.id == pin_id)
    }

    /// Coincidence groups for a role, in declared order.
    pub fn groups_of(&self, role: PinRole) -> impl Iterator<Item = &PinGroup> {
        self.groups.iter().filter(move |group| group.role == role)
    }

    /// Differential pairs inside the SuperSpeed lanes, in declared order.
    pub fn diff_pairs(&self) -> impl Iterator<Item = &DiffPair> {
        self.diff_pairs.iter()
    }

    /// Pin ids of a role, in declared order.
    pub fn pins_of(&self, role: PinRole) -> impl Iterator<Item = &Pin> {
        self.pins.iter().filter(move |pin| pin.role == role)
    }
}
