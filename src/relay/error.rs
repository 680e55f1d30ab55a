//! Relay error taxonomy.
//!
//! Every variant is rendered to the caller as HTTP 500 with the flat
//! `{message, code: "error", error: true}` body. Client-caused failures
//! (bad version, bad path) and upstream-caused failures share the same
//! status; the relay contract does not differentiate them.

use thiserror::Error;

/// Everything that can go wrong while relaying one request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Inbound `version` was not in the accepted set. No upstream call is
    /// made for these.
    #[error("Invalid API version specified.")]
    InvalidVersion,

    /// The outbound call failed at the transport level. The error's display
    /// form becomes the reply message.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The upstream answered but its body was not JSON. The parse detail is
    /// logged, never returned to the caller.
    #[error("There was an error with the response from the crunchyroll server")]
    UpstreamBody(#[source] serde_json::Error),
}
