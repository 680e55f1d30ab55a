//! Hardening response headers.
//!
//! Helmet-equivalent defaults plus no-cache directives, applied to every
//! reply the relay emits, errors and fallback included.

use axum::http::header::{
    HeaderName, HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA, X_CONTENT_TYPE_OPTIONS,
    X_FRAME_OPTIONS, X_XSS_PROTECTION,
};
use tower_http::set_header::SetResponseHeaderLayer;

/// The full hardening set, one layer per header.
pub fn hardening_layers() -> Vec<SetResponseHeaderLayer<HeaderValue>> {
    vec![
        SetResponseHeaderLayer::overriding(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        SetResponseHeaderLayer::overriding(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ),
        SetResponseHeaderLayer::overriding(X_XSS_PROTECTION, HeaderValue::from_static("0")),
        SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-dns-prefetch-control"),
            HeaderValue::from_static("off"),
        ),
        SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        ),
        SetResponseHeaderLayer::overriding(PRAGMA, HeaderValue::from_static("no-cache")),
        SetResponseHeaderLayer::overriding(EXPIRES, HeaderValue::from_static("0")),
        SetResponseHeaderLayer::overriding(
            HeaderName::from_static("surrogate-control"),
            HeaderValue::from_static("no-store"),
        ),
    ]
}
