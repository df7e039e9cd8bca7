use clap::Parser;
use std::net::SocketAddr;

const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// In-memory ledger HTTP service
#[derive(Parser, Debug)]
#[command(name = "ledger-service")]
#[command(about = "In-memory ledger service for accounts and transactions", long_about = None)]
pub struct CliArgs {
    /// Socket address to listen on
    #[arg(
        long = "bind",
        value_name = "ADDR",
        env = "LEDGER_BIND",
        default_value = DEFAULT_BIND,
        help = "Address to listen on (default: 0.0.0.0:8080)"
    )]
    pub bind: SocketAddr,

    /// Number of runtime worker threads
    #[arg(
        long = "workers",
        value_name = "COUNT",
        env = "LEDGER_WORKERS",
        help = "Number of worker threads serving requests (default: CPU cores)"
    )]
    pub workers: Option<usize>,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        env = "LEDGER_LOG",
        default_value = "info",
        help = "Log level filter, e.g. 'info' or 'ledger_service=debug'"
    )]
    pub log_level: String,
}

/// Resolved server configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub bind: SocketAddr,
    /// Tokio worker thread count
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            workers: num_cpus::get(),
        }
    }
}

impl ServerConfig {
    /// Create a ServerConfig, replacing an invalid worker count with the default
    pub fn new(bind: SocketAddr, workers: usize) -> Self {
        let default = Self::default();

        let workers = if workers == 0 {
            log::warn!(
                "Invalid worker count ({}), using default ({})",
                workers,
                default.workers
            );
            default.workers
        } else {
            workers
        };

        Self { bind, workers }
    }
}

impl CliArgs {
    /// Create a ServerConfig from CLI arguments
    ///
    /// Falls back to the default worker count when none was given or when
    /// the given count is zero.
    pub fn to_server_config(&self) -> ServerConfig {
        match self.workers {
            Some(workers) => ServerConfig::new(self.bind, workers),
            None => ServerConfig {
                bind: self.bind,
                ..ServerConfig::default()
            },
        }
    }
}
