//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! request handling produces:
//!     → logging.rs (structured log events, request IDs in fields)
//!     → metrics.rs (request counter, latency histogram)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
