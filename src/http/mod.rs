//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (inject request ID)
//!     → handler.rs (dispatch on method, validate, scan snapshot)
//!     → response.rs (shape status + JSON body)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use handler::{handle, AppState, Operation, Outcome};
pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use response::{Reply, StatusMessage};
pub use server::HttpServer;
