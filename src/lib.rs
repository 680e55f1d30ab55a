//! Crunchyroll manga session relay.
//!
//! A thin HTTP relay in front of the Crunchyroll manga session-start API.
//! It accepts `GET /start_session`, validates the `version` query parameter
//! against a fixed whitelist, forwards exactly one GET to the upstream
//! endpoint with a freshly generated device id, and relays the parsed JSON
//! payload (or a normalized error body) back to the caller.
//!
//! # Architecture Overview
//!
//! ```text
//! client ──▶ http::server ──▶ http::handlers ──▶ relay::version
//!                                   │                (whitelist + parse)
//!                                   ▼
//!                            relay::upstream ─────▶ Crunchyroll API
//!                            (fixed credentials,
//!                             fresh device id,
//!                             single GET)
//!                                   │
//! client ◀── http::reply ◀──────────┘
//!            (200 JSON verbatim | 500 normalized error)
//! ```
//!
//! The crate exposes [`RelayServer`] so a host process can mount the relay
//! on its own listener; the bundled binary is a thin launcher around it.

pub mod config;
pub mod http;
pub mod relay;

pub use config::RelayConfig;
pub use http::RelayServer;
