//! Request handlers for the relay surface.

use axum::extract::{RawQuery, State};
use axum::response::{IntoResponse, Response};

use crate::http::reply;
use crate::http::server::AppState;
use crate::relay::error::RelayError;
use crate::relay::upstream::{self, UpstreamOptions};
use crate::relay::version::{ApiVersion, VersionFamily, DEFAULT_VERSION};

/// Query parameters accepted by `/start_session`. Unknown keys are ignored.
///
/// Decoded by hand from the raw query string so that no input can escape
/// the two reply shapes: a repeated `version` key keeps every value and
/// fails the whitelist check instead of tripping an extractor rejection.
#[derive(Debug, Default, PartialEq)]
pub struct SessionQuery {
    pub version: Vec<String>,
    pub auth: Option<String>,
}

impl SessionQuery {
    pub fn parse(raw: &str) -> Self {
        let mut query = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "version" => query.version.push(value.into_owned()),
                "auth" => {
                    if query.auth.is_none() {
                        query.auth = Some(value.into_owned());
                    }
                }
                _ => {}
            }
        }
        query
    }
}

/// `GET /start_session`: validate the version, then relay exactly one call
/// to the upstream session endpoint.
pub async fn start_session(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Response {
    let params = SessionQuery::parse(raw_query.as_deref().unwrap_or(""));

    let raw_version = match params.version.as_slice() {
        [] => DEFAULT_VERSION,
        [v] => v.as_str(),
        _ => {
            // A repeated key can never match a whitelist entry.
            tracing::debug!("Rejected repeated version parameter");
            return RelayError::InvalidVersion.into_response();
        }
    };

    let version = match ApiVersion::validate(raw_version) {
        Some(v) => v,
        None => {
            tracing::debug!(version = %raw_version, "Rejected unknown API version");
            return RelayError::InvalidVersion.into_response();
        }
    };

    // The families dispatch separately to keep the upstream protocol's
    // extension point visible; today they share one code path.
    match version.family() {
        VersionFamily::V1 => relay(&state, params.auth.as_deref()).await,
        VersionFamily::Other => relay(&state, params.auth.as_deref()).await,
    }
}

async fn relay(state: &AppState, auth: Option<&str>) -> Response {
    let options = UpstreamOptions::build(&state.config.upstream, auth);
    match upstream::dispatch(&state.client, &options).await {
        Ok(data) => reply::success(data),
        Err(e) => e.into_response(),
    }
}

/// Catch-all for any path outside the supported surface. Replies
/// immediately; no upstream interaction.
pub async fn unknown_endpoint() -> Response {
    reply::error("Invalid API endpoint.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_decodes_to_defaults() {
        assert_eq!(SessionQuery::parse(""), SessionQuery::default());
    }

    #[test]
    fn known_keys_are_extracted_and_decoded() {
        let query = SessionQuery::parse("version=1.0&auth=a%20token&extra=ignored");
        assert_eq!(query.version, ["1.0"]);
        assert_eq!(query.auth.as_deref(), Some("a token"));
    }

    #[test]
    fn repeated_version_keys_keep_every_value() {
        let query = SessionQuery::parse("version=1.0&version=1.0");
        assert_eq!(query.version, ["1.0", "1.0"]);
    }

    #[test]
    fn first_auth_value_wins() {
        let query = SessionQuery::parse("auth=first&auth=second");
        assert_eq!(query.auth.as_deref(), Some("first"));
    }
}
