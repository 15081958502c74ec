//! Async client for the fetch-html proxy.

mod client;

pub use client::{ProxiedPage, ProxyClient, SdkError};
