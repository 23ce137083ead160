//! dSIPRouter client error types.

use thiserror::Error;

/// Result type for dSIPRouter API operations.
pub type DsipResult<T> = Result<T, DsipError>;

/// Errors that can occur when talking to dSIPRouter.
///
/// Three conditions exist: missing configuration (raised before any network
/// attempt), transport failures (connect/timeout), and non-2xx responses.
/// None of them are retried or suppressed.
#[derive(Debug, Error)]
pub enum DsipError {
    /// No bearer token is configured.
    #[error("DSIP_TOKEN is not configured - set the DSIP_TOKEN environment variable")]
    MissingToken,

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (connection refused, timeout).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// dSIPRouter answered with a non-2xx status.
    #[error("dSIPRouter returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("invalid JSON in dSIPRouter response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl DsipError {
    /// Create a transport error for the given URL.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }
}
