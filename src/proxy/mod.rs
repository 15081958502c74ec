//! Fetch-and-relay proxy.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → handler.rs (preflight short-circuit, `url` extraction)
//!     → upstream.rs (GET target, read whole body as text)
//!     → http::response (status + body, forced text/html)
//!     → Send to client
//!
//! Any failure → error.rs (ProxyError → 400 / 500 reply)
//! ```

pub mod error;
pub mod handler;
pub mod upstream;

pub use error::ProxyError;
pub use handler::{fetch_html_proxy, target_url, ProxyState, TARGET_PARAM};
pub use upstream::{Fetch, FetchError, ReqwestFetcher, UpstreamResponse};
