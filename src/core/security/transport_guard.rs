use axum::http::HeaderMap;
use axum::http::header::{HOST, ORIGIN};

use crate::core::config::SecurityConfig;

/// Errors that can occur during transport header validation
#[derive(Debug, thiserror::Error)]
pub enum TransportGuardError {
    #[error("Host header '{0}' is not in the allowed hosts list")]
    HostNotAllowed(String),

    #[error("Origin header '{0}' is not in the allowed origins list")]
    OriginNotAllowed(String),

    #[error("Host header is missing")]
    MissingHost,
}

/// Host/origin validator for the HTTP transport.
///
/// Protects against DNS-rebinding style attacks. Validation is active only
/// when at least one allow-list is non-empty; with both lists empty every
/// request passes, matching the platform's permissive default for local
/// deployments.
#[derive(Debug, Clone)]
pub struct TransportGuard {
    allowed_hosts: Vec<String>,
    allowed_origins: Vec<String>,
}

impl TransportGuard {
    /// Build a guard from the security configuration.
    pub fn new(config: &SecurityConfig) -> Self {
        Self {
            allowed_hosts: config
                .allowed_hosts
                .iter()
                .map(|h| h.to_ascii_lowercase())
                .collect(),
            allowed_origins: config
                .allowed_origins
                .iter()
                .map(|o| o.to_ascii_lowercase())
                .collect(),
        }
    }

    /// Whether any validation is active.
    pub fn is_enabled(&self) -> bool {
        !self.allowed_hosts.is_empty() || !self.allowed_origins.is_empty()
    }

    /// Validate the Host and Origin headers of an incoming request.
    ///
    /// The Host header is checked only when a host allow-list is configured
    /// and must then be present. The Origin header is checked only when an
    /// origin allow-list is configured; a missing Origin is accepted so that
    /// non-browser clients keep working. Matching is exact and
    /// case-insensitive.
    pub fn check(&self, headers: &HeaderMap) -> Result<(), TransportGuardError> {
        if !self.is_enabled() {
            return Ok(());
        }

        if !self.allowed_hosts.is_empty() {
            let host = headers
                .get(HOST)
                .and_then(|v| v.to_str().ok())
                .ok_or(TransportGuardError::MissingHost)?;
            let host = host.to_ascii_lowercase();
            if !self.allowed_hosts.contains(&host) {
                return Err(TransportGuardError::HostNotAllowed(host));
            }
        }

        if !self.allowed_origins.is_empty() {
            if let Some(origin) = headers.get(ORIGIN).and_then(|v| v.to_str().ok()) {
                let origin = origin.to_ascii_lowercase();
                if !self.allowed_origins.contains(&origin) {
                    return Err(TransportGuardError::OriginNotAllowed(origin));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(host: Option<&str>, origin: Option<&str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(host) = host {
            map.insert(HOST, host.parse().unwrap());
        }
        if let Some(origin) = origin {
            map.insert(ORIGIN, origin.parse().unwrap());
        }
        map
    }

    #[test]
    fn test_disabled_when_both_lists_empty() {
        let guard = TransportGuard::new(&SecurityConfig::default());
        assert!(!guard.is_enabled());
        assert!(guard.check(&headers(Some("evil.example.com"), None)).is_ok());
        assert!(guard.check(&headers(None, None)).is_ok());
    }

    #[test]
    fn test_host_allow_list() {
        let config = SecurityConfig {
            allowed_hosts: vec!["localhost:8080".to_string()],
            allowed_origins: vec![],
        };
        let guard = TransportGuard::new(&config);
        assert!(guard.is_enabled());
        assert!(guard.check(&headers(Some("localhost:8080"), None)).is_ok());
        assert!(guard.check(&headers(Some("LOCALHOST:8080"), None)).is_ok());

        let err = guard
            .check(&headers(Some("evil.example.com"), None))
            .unwrap_err();
        assert!(matches!(err, TransportGuardError::HostNotAllowed(_)));
    }

    #[test]
    fn test_missing_host_rejected_when_enforcing() {
        let config = SecurityConfig {
            allowed_hosts: vec!["localhost:8080".to_string()],
            allowed_origins: vec![],
        };
        let guard = TransportGuard::new(&config);
        let err = guard.check(&headers(None, None)).unwrap_err();
        assert!(matches!(err, TransportGuardError::MissingHost));
    }

    #[test]
    fn test_origin_allow_list() {
        let config = SecurityConfig {
            allowed_hosts: vec![],
            allowed_origins: vec!["https://admin.example.com".to_string()],
        };
        let guard = TransportGuard::new(&config);

        // Non-browser clients send no Origin at all.
        assert!(guard.check(&headers(Some("anything"), None)).is_ok());
        assert!(
            guard
                .check(&headers(None, Some("https://admin.example.com")))
                .is_ok()
        );

        let err = guard
            .check(&headers(None, Some("https://evil.example.com")))
            .unwrap_err();
        assert!(matches!(err, TransportGuardError::OriginNotAllowed(_)));
    }
}
