//! Listener lifecycle
//!
//! Binds the configured address, serves the router until a shutdown signal
//! arrives, then drains in-flight requests.

use std::sync::Arc;

use log::{info, warn};
use tokio::net::TcpListener;

use crate::cli::ServerConfig;
use crate::core::LedgerStore;
use crate::http::{self, AppState};
use crate::types::LedgerError;

/// Build a multi-threaded runtime per `config` and serve until shutdown
///
/// This is the blocking entry point used by the binary.
pub fn run(config: &ServerConfig) -> Result<(), LedgerError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .enable_all()
        .build()?;

    runtime.block_on(serve(config.bind, Arc::new(LedgerStore::new())))
}

/// Serve the ledger API for `store` on `bind`
///
/// # Errors
///
/// Returns `LedgerError::Io` if the address cannot be bound or the
/// listener fails while serving.
pub async fn serve(bind: std::net::SocketAddr, store: Arc<LedgerStore>) -> Result<(), LedgerError> {
    let listener = TcpListener::bind(bind).await?;
    info!("Ledger service listening on {}", listener.local_addr()?);

    axum::serve(listener, http::router(AppState::new(store)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Ledger service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(e) => {
            warn!("Unable to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
