//! Word/Type Record Service
//!
//! A small HTTP service that looks up and inserts word/type record pairs
//! (e.g. "run" → "verb") against a pluggable record store.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │               WORDTYPE SERVICE               │
//!                     │                                              │
//!   GET ?word=…       │  ┌─────────┐   ┌──────────┐   ┌──────────┐  │
//!   ──────────────────┼─▶│  http   │──▶│ handler  │──▶│ snapshot │  │
//!                     │  │ server  │   │ (pure)   │   │   scan   │  │
//!   POST {record}     │  └─────────┘   └────┬─────┘   └──────────┘  │
//!   ──────────────────┼─▶                   │ persist slot          │
//!                     │                     ▼                       │
//!                     │               ┌──────────┐                  │
//!   Response          │               │  record  │                  │
//!   ◀─────────────────┼───────────────│  store   │                  │
//!                     │               └──────────┘                  │
//!                     │                                              │
//!                     │  ┌────────────────────────────────────────┐ │
//!                     │  │         Cross-Cutting Concerns         │ │
//!                     │  │  ┌────────┐ ┌───────────┐ ┌─────────┐  │ │
//!                     │  │  │ config │ │ observa-  │ │lifecycle│  │ │
//!                     │  │  │        │ │ bility    │ │shutdown │  │ │
//!                     │  │  └────────┘ └───────────┘ └─────────┘  │ │
//!                     │  └────────────────────────────────────────┘ │
//!                     └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod record;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use record::Record;
