//! CORS-bypassing fetch proxy.
//!
//! Browsers call `GET /?url=<target>`; the proxy fetches the target and
//! relays its status and body as `text/html`, with permissive CORS headers on
//! every reply.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;
pub mod security;

pub use config::schema::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
