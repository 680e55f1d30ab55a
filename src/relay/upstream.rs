//! Upstream request construction and dispatch.

use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::relay::device::generate_device_id;
use crate::relay::error::RelayError;

/// Outbound request specification.
///
/// Built once per inbound request and dropped after dispatch; never cached
/// across requests. Each build draws a fresh device id.
#[derive(Debug, Clone)]
pub struct UpstreamOptions {
    pub url: String,
    pub query: Vec<(&'static str, String)>,
}

impl UpstreamOptions {
    /// Assemble the fixed query set plus a fresh device id. An inbound
    /// `auth` value is copied through under the same key, unvalidated;
    /// without one the key is omitted entirely.
    pub fn build(config: &UpstreamConfig, auth: Option<&str>) -> Self {
        let mut query = vec![
            ("api_ver", config.api_ver.clone()),
            ("access_token", config.access_token.clone()),
            ("device_type", config.device_type.clone()),
            ("device_id", generate_device_id()),
        ];
        if let Some(auth) = auth {
            query.push(("auth", auth.to_string()));
        }

        Self {
            url: config.base_url.clone(),
            query,
        }
    }
}

/// Issue the single outbound GET and parse the body as JSON.
///
/// The upstream status code is not inspected: any body that deserializes as
/// JSON is relayed verbatim, whatever the status was. Transport failures and
/// unparseable bodies are logged here and surface as [`RelayError`].
pub async fn dispatch(
    client: &reqwest::Client,
    options: &UpstreamOptions,
) -> Result<Value, RelayError> {
    let response = client
        .get(&options.url)
        .query(&options.query)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(url = %options.url, error = %e, "Error fetching upstream");
            RelayError::Transport(e)
        })?;

    let body = response.bytes().await.map_err(|e| {
        tracing::error!(url = %options.url, error = %e, "Error fetching upstream");
        RelayError::Transport(e)
    })?;

    serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "Error parsing upstream response");
        RelayError::UpstreamBody(e)
    })
}
