//! Common utilities shared across dSIPRouter tools.
//!
//! Every tool funnels through the same two steps: build a client from the
//! immutable process configuration, then render the platform's JSON answer
//! (or the failure) as a tool result.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::warn;

use crate::core::config::Config;
use crate::core::dsip::{DsipClient, DsipResult};

/// Build an API client from the process configuration.
///
/// Fails with the configuration error when no bearer token is set, before
/// any network call is attempted.
pub fn connect(config: &Config) -> DsipResult<DsipClient> {
    DsipClient::new(&config.dsiprouter)
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Render an API response as pretty-printed JSON text.
pub fn json_result(value: &Value) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&format!("Failed to render response: {e}")),
    }
}

/// Map a client call outcome onto a tool result.
pub fn dsip_result(result: DsipResult<Value>) -> CallToolResult {
    match result {
        Ok(value) => json_result(&value),
        Err(e) => error_result(&e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dsip::DsipError;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_json_result_pretty_prints() {
        let result = json_result(&json!({"a": 1}));
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_dsip_result_maps_errors() {
        let result = dsip_result(Err(DsipError::Status {
            status: 404,
            body: "no such rule".to_string(),
        }));
        assert!(result.is_error.unwrap_or(false));
        let text = result_text(&result);
        assert!(text.contains("404"));
        assert!(text.contains("no such rule"));
    }

    #[test]
    fn test_connect_requires_token() {
        let config = Config::default();
        assert!(connect(&config).is_err());

        let mut config = Config::default();
        config.dsiprouter.token = "token".to_string();
        assert!(connect(&config).is_ok());
    }
}
