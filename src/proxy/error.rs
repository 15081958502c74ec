//! Errors surfaced at the handler boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::proxy::upstream::FetchError;

/// Body sent when the upstream fetch fails. The cause is only logged.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to download the content of the URL";

#[derive(Debug, Error)]
pub enum ProxyError {
    /// Required query parameter absent or empty.
    #[error("Missing required query parameter \"{0}\"")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Upstream(#[from] FetchError),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label used for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            ProxyError::MissingParameter(_) => "missing_parameter",
            ProxyError::Upstream(_) => "upstream_error",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ProxyError::MissingParameter(_) => (status, self.to_string()).into_response(),
            ProxyError::Upstream(_) => (status, UPSTREAM_FAILURE_MESSAGE).into_response(),
        }
    }
}
