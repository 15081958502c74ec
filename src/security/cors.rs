//! CORS headers.

use axum::http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Methods announced in preflight replies.
pub const ALLOWED_METHODS: &str = "GET, POST";

/// Request headers announced in preflight replies.
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Layer stamping `Access-Control-Allow-Origin: *` on every reply.
///
/// Overrides any value set further in, so a relayed page cannot narrow it.
pub fn allow_any_origin() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"))
}
