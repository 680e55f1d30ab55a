//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → semantic validation
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc with all handlers
//!
//! Environment:
//!     RELAY_CONFIG names the config file (defaults apply without one)
//!     PORT overrides the listener port
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so the relay runs with zero configuration
//! - The upstream credentials are constants in practice; they live in the
//!   schema so tests can point the relay at a mock endpoint

pub mod loader;
pub mod schema;

pub use loader::{from_env, load_config, ConfigError};
pub use schema::{ListenerConfig, RelayConfig, UpstreamConfig};
