//! Outbound fetch of the target URL.

use std::future::Future;

use axum::http::StatusCode;
use thiserror::Error;
use url::Url;

/// Failure to obtain the upstream page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid target URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read upstream body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Status and fully buffered body of an upstream reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: String,
}

/// HTTP client capability used by the handler.
///
/// Implementations issue a plain GET and return once the whole body has been
/// read.
pub trait Fetch: Clone + Send + Sync + 'static {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<UpstreamResponse, FetchError>> + Send;
}

/// [`Fetch`] backed by a default `reqwest` client.
///
/// Redirects are followed with reqwest's default policy. No timeout is set.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Fetch for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<UpstreamResponse, FetchError> {
        let target = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(FetchError::Body)?;

        Ok(UpstreamResponse { status, body })
    }
}
