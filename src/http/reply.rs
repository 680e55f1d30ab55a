//! Wire reply shapes.
//!
//! The relay emits exactly two shapes: a 200 carrying the upstream JSON
//! payload verbatim, and a 500 carrying the normalized error body. Every
//! failure class uses the same status and body layout.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::relay::error::RelayError;

/// Normalized error body.
#[derive(Debug, Serialize)]
pub struct ErrorReply {
    pub message: String,
    pub code: &'static str,
    pub error: bool,
}

impl ErrorReply {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "error",
            error: true,
        }
    }
}

/// Emit a negative reply containing an error message.
pub fn error(message: impl Into<String>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorReply::new(message)),
    )
        .into_response()
}

/// Emit a positive reply containing the upstream payload.
pub fn success(data: Value) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        error(self.to_string())
    }
}
