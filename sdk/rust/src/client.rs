use reqwest::{Client, Method, StatusCode};
use thiserror::Error;

/// Errors returned by [`ProxyClient`].
#[derive(Debug, Error)]
pub enum SdkError {
    /// The proxy itself could not be reached or its reply could not be read.
    #[error("proxy request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The proxy answered with a status of its own (400 or 500).
    #[error("proxy returned {status}: {message}")]
    Proxy { status: StatusCode, message: String },
}

/// A page relayed by the proxy.
#[derive(Debug, Clone)]
pub struct ProxiedPage {
    /// Status the upstream answered with.
    pub status: StatusCode,
    /// Upstream body, decoded as text.
    pub body: String,
    /// Content type set by the proxy.
    pub content_type: Option<String>,
}

pub struct ProxyClient {
    client: Client,
    proxy_url: String,
}

impl ProxyClient {
    pub fn new(proxy_url: &str) -> Self {
        Self {
            client: Client::new(),
            proxy_url: proxy_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch `target` through the proxy.
    ///
    /// Upstream statuses are passed back in [`ProxiedPage::status`]. A 400 or
    /// 500 is only reported as [`SdkError::Proxy`] when it carries the proxy's
    /// own plain-text reply rather than a relayed page.
    pub async fn fetch_html(&self, target: &str) -> Result<ProxiedPage, SdkError> {
        let resp = self
            .client
            .get(&self.proxy_url)
            .query(&[("url", target)])
            .send()
            .await?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.text().await?;

        let relayed = content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("text/html"));
        if !relayed && matches!(status, StatusCode::BAD_REQUEST | StatusCode::INTERNAL_SERVER_ERROR) {
            return Err(SdkError::Proxy { status, message: body });
        }

        Ok(ProxiedPage { status, body, content_type })
    }

    /// Send a CORS preflight to the proxy and return its status.
    pub async fn preflight(&self) -> Result<StatusCode, SdkError> {
        let resp = self
            .client
            .request(Method::OPTIONS, &self.proxy_url)
            .send()
            .await?;
        Ok(resp.status())
    }
}
