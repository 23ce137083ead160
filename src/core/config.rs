//! Configuration management for the MCP server.
//!
//! All configuration is read once from the environment at process start and
//! is immutable afterwards. The dSIPRouter connection settings are passed
//! into the API client at construction, never read ad hoc per call.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// dSIPRouter connection settings.
    pub dsiprouter: DsipConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// HTTP transport security (host/origin allow-lists).
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Connection settings for the dSIPRouter REST API.
#[derive(Clone, Serialize, Deserialize)]
pub struct DsipConfig {
    /// Base URL of the dSIPRouter instance, without the `/api/v1` suffix.
    pub base_url: String,

    /// Bearer token for the API. An empty token is allowed at startup;
    /// every tool invocation fails with a configuration error until one
    /// is set.
    pub token: String,

    /// Whether to verify the platform's TLS certificate. dSIPRouter often
    /// ships with a self-signed certificate, so turning this off is an
    /// explicit opt-in via `DSIP_VERIFY_SSL=false`.
    pub verify_ssl: bool,
}

impl DsipConfig {
    /// Whether a bearer token is configured.
    pub fn token_configured(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Custom Debug implementation to redact the bearer token from logs.
impl std::fmt::Debug for DsipConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DsipConfig")
            .field("base_url", &self.base_url)
            .field(
                "token",
                if self.token.is_empty() {
                    &"(unset)"
                } else {
                    &"[REDACTED]"
                },
            )
            .field("verify_ssl", &self.verify_ssl)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Security configuration for the HTTP transport.
///
/// When both lists are empty, host/origin validation is disabled entirely.
/// A non-empty list enables validation for the corresponding header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Host header values permitted on incoming HTTP requests.
    pub allowed_hosts: Vec<String>,

    /// Origin header values permitted on incoming HTTP requests.
    pub allowed_origins: Vec<String>,
}

impl Default for DsipConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:5000".to_string(),
            token: String::new(),
            verify_ssl: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "dsiprouter-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            dsiprouter: DsipConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

/// Split a comma-separated environment value into trimmed, non-empty items.
fn split_env_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// dSIPRouter settings use the `DSIP_` prefix; hosting-layer settings
    /// use the `MCP_` prefix (e.g. `MCP_LOG_LEVEL`, `MCP_TRANSPORT`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("DSIP_BASE_URL") {
            config.dsiprouter.base_url = base_url;
        }

        if let Ok(token) = std::env::var("DSIP_TOKEN") {
            config.dsiprouter.token = token;
        }
        if !config.dsiprouter.token_configured() {
            // Not fatal here: the error is raised on first tool use.
            warn!("DSIP_TOKEN is not set - tool calls will fail until it is configured");
        }

        if let Ok(verify) = std::env::var("DSIP_VERIFY_SSL") {
            config.dsiprouter.verify_ssl = verify.to_lowercase() == "true";
        }
        if !config.dsiprouter.verify_ssl {
            warn!("TLS certificate verification is disabled (DSIP_VERIFY_SSL=false)");
        }

        if let Ok(hosts) = std::env::var("MCP_ALLOWED_HOSTS") {
            config.security.allowed_hosts = split_env_list(&hosts);
        }
        if let Ok(origins) = std::env::var("MCP_ALLOWED_ORIGINS") {
            config.security.allowed_origins = split_env_list(&origins);
        }

        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dsiprouter.base_url, "https://localhost:5000");
        assert!(config.dsiprouter.verify_ssl);
        assert!(!config.dsiprouter.token_configured());
        assert!(config.security.allowed_hosts.is_empty());
        assert!(config.security.allowed_origins.is_empty());
    }

    #[test]
    fn test_from_env_connection_settings() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("DSIP_BASE_URL", "https://sip.example.com:5000");
            std::env::set_var("DSIP_TOKEN", "secret-token");
            std::env::set_var("DSIP_VERIFY_SSL", "False");
        }
        let config = Config::from_env();
        assert_eq!(config.dsiprouter.base_url, "https://sip.example.com:5000");
        assert!(config.dsiprouter.token_configured());
        assert!(!config.dsiprouter.verify_ssl);
        unsafe {
            std::env::remove_var("DSIP_BASE_URL");
            std::env::remove_var("DSIP_TOKEN");
            std::env::remove_var("DSIP_VERIFY_SSL");
        }
    }

    #[test]
    fn test_from_env_allow_lists() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_ALLOWED_HOSTS", "localhost, sip.example.com ,");
        }
        let config = Config::from_env();
        assert_eq!(
            config.security.allowed_hosts,
            vec!["localhost".to_string(), "sip.example.com".to_string()]
        );
        assert!(config.security.allowed_origins.is_empty());
        unsafe {
            std::env::remove_var("MCP_ALLOWED_HOSTS");
        }
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let config = DsipConfig {
            base_url: "https://localhost:5000".to_string(),
            token: "super_secret_token".to_string(),
            verify_ssl: true,
        };
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }

    #[test]
    fn test_split_env_list() {
        assert!(split_env_list("").is_empty());
        assert_eq!(split_env_list("a,b"), vec!["a", "b"]);
        assert_eq!(split_env_list(" a , ,b, "), vec!["a", "b"]);
    }
}
