//! Handler for the `analyze` command.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use cablecheck_core::{AnalysisError, PinSnapshot, analyze, usb_c_registry};

use crate::commands::OutputFormat;
use crate::error::CliError;
use crate::presentation::format_report;

/// Build the snapshot, run the engine, render and optionally export.
pub fn execute(
    pins: &[String],
    json: Option<&str>,
    all: bool,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> Result<(), CliError> {
    let snapshot = build_snapshot(pins, json, all)?;
    debug!(
        active = snapshot.active_pins().count(),
        "snapshot constructed"
    );

    let report = analyze(&snapshot)?;

    match format {
        OutputFormat::Text => println!("{}", format_report(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(path) = output {
        export_text(&report.to_text(), path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

/// Assemble a snapshot from whichever input source the user picked.
fn build_snapshot(
    pins: &[String],
    json: Option<&str>,
    all: bool,
) -> Result<PinSnapshot, CliError> {
    if all {
        return Ok(PinSnapshot::from_active(
            usb_c_registry().all_pins().map(|pin| pin.id),
        ));
    }

    if let Some(source) = json {
        let text = if source == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(source)?
        };
        return Ok(PinSnapshot::from_json(&text).map_err(AnalysisError::from)?);
    }

    Ok(PinSnapshot::from_active(pins.iter().cloned()))
}

/// The "copy report" export: the flat text block plus a trailing newline.
fn export_text(text: &str, path: &Path) -> Result<(), CliError> {
    fs::write(path, format!("{text}\n"))?;
    Ok(())
}
