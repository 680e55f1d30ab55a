//! HTTP surface for the relay.
//!
//! # Data Flow
//! ```text
//! client request
//!     → server.rs (Axum router, request ID, tracing, hardening headers)
//!     → handlers.rs (validate version, relay the upstream call)
//!     → reply.rs (200 JSON verbatim | 500 normalized error body)
//! ```

pub mod handlers;
pub mod headers;
pub mod reply;
pub mod server;

pub use server::{AppState, RelayServer};
