//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files and
//! carry defaults matching the shipped relay.

use serde::{Deserialize, Serialize};

/// Root configuration for the session relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind interface, port).
    pub listener: ListenerConfig,

    /// Fixed upstream endpoint and credentials.
    pub upstream: UpstreamConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g. "0.0.0.0").
    pub bind_address: String,

    /// TCP port. The `PORT` environment variable takes precedence.
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

/// Upstream session-start endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Session-start endpoint URL.
    pub base_url: String,

    /// Protocol version tag sent with every outbound call.
    pub api_ver: String,

    /// Access token expected by the upstream API.
    pub access_token: String,

    /// Device type identifier expected by the upstream API.
    pub device_type: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://api-manga.crunchyroll.com/cr_start_session".to_string(),
            api_ver: "1.0".to_string(),
            access_token: "FLpcfZH4CbW4muO".to_string(),
            device_type: "com.crunchyroll.manga.android".to_string(),
        }
    }
}
