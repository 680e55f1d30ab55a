//! Relay core: version validation, device ids, upstream dispatch.
//!
//! # Data Flow
//! ```text
//! inbound query params
//!     → version.rs (whitelist check, major/minor parse)
//!     → upstream.rs (options: fixed credentials + fresh device id)
//!     → upstream.rs (single GET, body parsed as JSON)
//!     → http::reply (200 verbatim | 500 normalized error)
//! ```
//!
//! # Design Decisions
//! - Exactly one upstream call per accepted request; no retries, no fan-out
//! - Every state here is per-request; nothing survives the reply
//! - No relay-level timeout: a hanging upstream hangs the request

pub mod device;
pub mod error;
pub mod upstream;
pub mod version;

pub use error::RelayError;
pub use upstream::UpstreamOptions;
pub use version::{ApiVersion, VersionFamily};
