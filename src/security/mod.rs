//! Cross-origin policy.
//!
//! The proxy is open to every origin: no allowlist, no credentials.

pub mod cors;
