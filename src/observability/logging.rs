//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level at startup
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - RUST_LOG takes precedence; the configured level is the fallback

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `default_level` comes from configuration and is used only when `RUST_LOG`
/// is not set.
pub fn init_logging(default_level: &str) {
    let fallback = format!("wordtype_api={default_level},tower_http={default_level}");

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
