//! Reply construction.
//!
//! `Access-Control-Allow-Origin` is not set here; the router layer adds it to
//! every reply.

use axum::{
    http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, CONTENT_TYPE},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::proxy::upstream::UpstreamResponse;
use crate::security::cors::{ALLOWED_HEADERS, ALLOWED_METHODS};

/// Content type forced onto every relayed page, whatever the upstream sent.
pub const PROXIED_CONTENT_TYPE: &str = "text/html; charset=UTF-8";

/// Empty 204 answering a CORS preflight.
pub fn preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
        ],
    )
        .into_response()
}

/// Relay the upstream status and body.
pub fn proxied(upstream: UpstreamResponse) -> Response {
    (
        upstream.status,
        [(CONTENT_TYPE, PROXIED_CONTENT_TYPE)],
        upstream.body,
    )
        .into_response()
}
