//! Command-line interface for the Loadsmith load optimizer.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod optimize;

pub use error::CliError;
pub use optimize::DEFAULT_MAX_ORDERS;

use optimize::{OptimizeArgs, run_optimize};

const ARG_OPTIMIZE_REQUEST: &str = "request";
const ARG_MAX_ORDERS: &str = "max-orders";
const ARG_COMPACT: &str = "compact";
const ENV_OPTIMIZE_REQUEST: &str = "LOADSMITH_CMDS_OPTIMIZE_REQUEST_PATH";

/// Run the Loadsmith CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration, request
/// loading, optimization or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging();
    match cli.command {
        Command::Optimize(args) => run_optimize(args),
    }
}

/// Install a stderr `tracing` subscriber that also receives `log` records.
///
/// The filter defaults to `info` and honours `RUST_LOG`. Calling this more
/// than once leaves the first subscriber in place.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    #[expect(
        clippy::let_underscore_must_use,
        reason = "a subscriber installed earlier is kept"
    )]
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Parser)]
#[command(
    name = "loadsmith",
    about = "Select the most valuable load of freight orders for a truck",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Choose the best set of orders for a truck from a JSON request.
    Optimize(OptimizeArgs),
}

#[cfg(test)]
mod tests;
