//! The proxy handler.
//!
//! Every method except `OPTIONS` is treated as a fetch request. The handler
//! never fails: each error is turned into a reply at this boundary.

use std::time::Instant;

use axum::{
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
};
use url::form_urlencoded;

use crate::http::request::X_REQUEST_ID;
use crate::http::response;
use crate::observability::metrics;
use crate::proxy::error::ProxyError;
use crate::proxy::upstream::{Fetch, UpstreamResponse};

/// Query parameter carrying the target URL.
pub const TARGET_PARAM: &str = "url";

/// Application state injected into the handler.
#[derive(Debug, Clone)]
pub struct ProxyState<F> {
    pub fetcher: F,
}

impl<F: Fetch> ProxyState<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }
}

/// Extract the target URL from a raw query string.
///
/// The first non-empty `url` value wins. No further validation is done here.
pub fn target_url(query: Option<&str>) -> Result<String, ProxyError> {
    query
        .into_iter()
        .flat_map(|q| form_urlencoded::parse(q.as_bytes()))
        .find(|(key, value)| key == TARGET_PARAM && !value.is_empty())
        .map(|(_, value)| value.into_owned())
        .ok_or(ProxyError::MissingParameter(TARGET_PARAM))
}

/// Main proxy handler.
pub async fn fetch_html_proxy<F: Fetch>(
    State(state): State<ProxyState<F>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let start_time = Instant::now();
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    if method == Method::OPTIONS {
        tracing::debug!(request_id = %request_id, "Answering preflight");
        let reply = response::preflight();
        metrics::record_request(&method, reply.status().as_u16(), "preflight", start_time);
        return reply;
    }

    match relay(&state.fetcher, uri.query(), request_id).await {
        Ok(upstream) => {
            metrics::record_request(&method, upstream.status.as_u16(), "proxied", start_time);
            response::proxied(upstream)
        }
        Err(err) => {
            metrics::record_request(&method, err.status().as_u16(), err.outcome(), start_time);
            err.into_response()
        }
    }
}

async fn relay<F: Fetch>(
    fetcher: &F,
    query: Option<&str>,
    request_id: &str,
) -> Result<UpstreamResponse, ProxyError> {
    let target = match target_url(query) {
        Ok(target) => target,
        Err(err) => {
            tracing::warn!(request_id = %request_id, "Request without target URL");
            return Err(err);
        }
    };

    tracing::debug!(request_id = %request_id, target = %target, "Fetching upstream");

    match fetcher.fetch(&target).await {
        Ok(upstream) => {
            tracing::debug!(
                request_id = %request_id,
                target = %target,
                status = %upstream.status,
                bytes = upstream.body.len(),
                "Upstream responded"
            );
            Ok(upstream)
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, target = %target, error = %e, "Failed to download URL");
            Err(e.into())
        }
    }
}
