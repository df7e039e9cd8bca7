// CLI module
// Command-line and environment configuration of the service

mod args;

pub use args::{CliArgs, ServerConfig};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Values not given on the command line are read from `LEDGER_BIND`,
/// `LEDGER_WORKERS` and `LEDGER_LOG`. On invalid arguments or `--help`, clap
/// prints the message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
