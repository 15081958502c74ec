//! Configuration validation.
//!
//! Validation is a pure function over [`ProxyConfig`] and reports every
//! problem found, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ProxyConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address {0:?} is not a socket address")]
    InvalidMetricsAddress(String),

    #[error("observability.metrics_address {0} collides with listener.bind_address")]
    MetricsAddressInUse(SocketAddr),
}

/// Two listeners clash when they share a fixed port and their IPs overlap.
/// An unspecified IP (`0.0.0.0`, `::`) overlaps every address.
fn collides(a: &SocketAddr, b: &SocketAddr) -> bool {
    a.port() != 0
        && a.port() == b.port()
        && (a.ip() == b.ip() || a.ip().is_unspecified() || b.ip().is_unspecified())
}

/// Check a parsed configuration before it is accepted.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let bind = config.listener.bind_address.parse::<SocketAddr>();
    if bind.is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(metrics) if bind.as_ref().is_ok_and(|b| collides(b, &metrics)) => {
                errors.push(ValidationError::MetricsAddressInUse(metrics));
            }
            Ok(_) => {}
            Err(_) => errors.push(ValidationError::InvalidMetricsAddress(
                config.observability.metrics_address.clone(),
            )),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&ProxyConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = "localhost".into();
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "nowhere".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidBindAddress("localhost".into()),
                ValidationError::InvalidMetricsAddress("nowhere".into()),
            ]
        );
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = ProxyConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_metrics_port_collision() {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = "0.0.0.0:8080".into();
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "127.0.0.1:8080".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[..], [ValidationError::MetricsAddressInUse(_)]));
    }

    fn with_metrics(bind: &str, metrics: &str) -> ProxyConfig {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = bind.into();
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = metrics.into();
        config
    }

    #[test]
    fn test_same_ip_same_port_collides() {
        let errors = validate_config(&with_metrics("127.0.0.1:8080", "127.0.0.1:8080")).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::MetricsAddressInUse("127.0.0.1:8080".parse().unwrap())]
        );
    }

    #[test]
    fn test_unspecified_ipv6_collides() {
        assert!(validate_config(&with_metrics("[::1]:9000", "[::]:9000")).is_err());
    }

    #[test]
    fn test_distinct_hosts_same_port_allowed() {
        assert!(validate_config(&with_metrics("10.0.0.1:8080", "10.0.0.2:8080")).is_ok());
    }

    #[test]
    fn test_ephemeral_ports_allowed() {
        assert!(validate_config(&with_metrics("127.0.0.1:0", "127.0.0.1:0")).is_ok());
        assert!(validate_config(&with_metrics("0.0.0.0:0", "0.0.0.0:0")).is_ok());
    }

    #[test]
    fn test_different_ports_allowed() {
        assert!(validate_config(&with_metrics("0.0.0.0:8080", "0.0.0.0:9090")).is_ok());
    }
}
