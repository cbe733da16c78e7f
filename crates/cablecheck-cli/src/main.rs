//! CLI entry point.
//!
//! Parses arguments, installs the tracing subscriber, and dispatches to
//! handlers. All inference happens in `cablecheck-core`; failures map to
//! sysexits-style exit codes via `CliError`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cablecheck_cli::{Cli, CliError, Commands, handlers};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Analyze {
            pins,
            json,
            all,
            format,
            output,
        } => handlers::analyze::execute(&pins, json.as_deref(), all, format, output.as_ref()),
        Commands::Pins { role } => handlers::pins::execute(role),
    }
}

/// Log to stderr so report output on stdout stays clean for piping.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
