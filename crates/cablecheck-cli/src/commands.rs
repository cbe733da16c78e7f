//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use cablecheck_core::PinRole;

/// Available commands for the USB cable checker.
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a pin-activation snapshot into a capability report
    Analyze {
        /// Active pin ids, as printed by `cablecheck pins` (e.g. VBUS GND D+ D-)
        #[arg(required_unless_present_any = ["json", "all"], conflicts_with_all = ["json", "all"])]
        pins: Vec<String>,

        /// Read the snapshot as a JSON object of pin-id to bool entries
        /// from a file, or from stdin with "-"
        #[arg(long, value_name = "FILE")]
        json: Option<String>,

        /// Activate every pin in the registry
        #[arg(long)]
        all: bool,

        /// Output format for the report
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write the flat-text report to a file (the "copy report" export)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the pin registry (ids, roles, groups, descriptions)
    Pins {
        /// Only show pins with the given role
        #[arg(long, value_enum)]
        role: Option<RoleFilter>,
    },
}

/// Rendering format for analysis output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report sections.
    #[default]
    Text,
    /// The full report as a JSON object.
    Json,
}

/// CLI-side spelling of pin roles for the `pins --role` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleFilter {
    Power,
    Ground,
    Usb2,
    Superspeed,
    Cc,
    Sbu,
}

impl RoleFilter {
    /// Map the CLI spelling to the domain role.
    pub const fn role(self) -> PinRole {
        match self {
            Self::Power => PinRole::Power,
            Self::Ground => PinRole::Ground,
            Self::Usb2 => PinRole::Usb2Data,
            Self::Superspeed => PinRole::SuperSpeedLane,
            Self::Cc => PinRole::ConfigChannel,
            Self::Sbu => PinRole::Sideband,
        }
    }
}
