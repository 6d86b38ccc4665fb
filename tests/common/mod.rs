//! Shared utilities for integration testing.

use std::sync::Arc;

use tokio::net::TcpListener;

use wordtype_api::config::ServiceConfig;
use wordtype_api::http::HttpServer;
use wordtype_api::lifecycle::Shutdown;
use wordtype_api::record::Record;
use wordtype_api::store::{MemoryStore, RecordStore};

/// A running service instance bound to an ephemeral local port, backed by a
/// seeded in-memory store.
pub struct TestService {
    pub base_url: String,
    pub store: Arc<MemoryStore>,
    shutdown: Shutdown,
}

impl TestService {
    /// Start a service with the given records already in the store.
    pub async fn start(seed: Vec<Record>) -> Self {
        let store = Arc::new(MemoryStore::with_records(seed));
        let config = ServiceConfig::default();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = Shutdown::new();
        let rx = shutdown.subscribe();
        let dyn_store: Arc<dyn RecordStore> = store.clone();
        let server = HttpServer::new(config, dyn_store);
        tokio::spawn(async move {
            let _ = server.run(listener, rx).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            store,
            shutdown,
        }
    }

    /// Stop the service.
    #[allow(dead_code)]
    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

impl Drop for TestService {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}
