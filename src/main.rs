//! Service entrypoint.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use wordtype_api::config::{load_config, ServiceConfig, StorageBackend};
use wordtype_api::http::HttpServer;
use wordtype_api::lifecycle::Shutdown;
use wordtype_api::observability::{logging, metrics};
use wordtype_api::store::{JsonFileStore, MemoryStore, RecordStore};

#[derive(Debug, Parser)]
#[command(
    name = "wordtype-api",
    version,
    about = "HTTP lookup/insert endpoint for word/type records"
)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!("wordtype-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        storage_backend = ?config.storage.backend,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let store: Arc<dyn RecordStore> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => {
            let path = config
                .storage
                .path
                .clone()
                .ok_or("storage.path is required when storage.backend is \"file\"")?;
            let store = JsonFileStore::open(path.as_str())?;
            tracing::info!(
                path = %path,
                records = store.snapshot().len(),
                "Record file loaded"
            );
            Arc::new(store)
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
