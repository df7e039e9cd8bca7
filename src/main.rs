//! Ledger service binary
//!
//! Starts the HTTP ledger API backed by volatile in-memory storage.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --bind 127.0.0.1:3000 --workers 4
//! LEDGER_BIND=0.0.0.0:9000 RUST_LOG=ledger_service=debug cargo run
//! ```
//!
//! # Exit Codes
//!
//! - 0: Clean shutdown after Ctrl-C
//! - 1: Startup failure (address in use, runtime construction, etc.)

use env_logger::Env;
use ledger_service::{cli, server};
use std::process;

fn main() {
    let args = cli::parse_args();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str()))
        .init();

    let config = args.to_server_config();
    if let Err(e) = server::run(&config) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
