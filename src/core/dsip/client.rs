//! dSIPRouter REST API client implementation.
//!
//! One method per remote operation; every method performs a single round
//! trip and returns the parsed JSON body on 2xx. The inbound-mapping delete
//! is keyed by DID via a query parameter rather than by rule id - an
//! asymmetry inherited from the platform's API.

use std::time::Duration;

use reqwest::{Method, header};
use serde_json::Value;
use tracing::debug;

use super::error::{DsipError, DsipResult};
use crate::core::config::DsipConfig;

/// Fixed per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the dSIPRouter REST API.
///
/// Construction fails when no bearer token is configured, before any
/// network activity. Each client owns its own connection pool; callers
/// build one per invocation, matching the platform's low-throughput use.
#[derive(Debug)]
pub struct DsipClient {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl DsipClient {
    /// Create a client from connection settings.
    pub fn new(config: &DsipConfig) -> DsipResult<Self> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    /// Create a client with an explicit request timeout. Crate-private so
    /// the 30-second production timeout stays fixed.
    pub(crate) fn with_timeout(config: &DsipConfig, timeout: Duration) -> DsipResult<Self> {
        if !config.token_configured() {
            return Err(DsipError::MissingToken);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(DsipError::Client)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            http,
        })
    }

    /// Perform one request against `/api/v1{endpoint}`.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&Value>,
    ) -> DsipResult<Value> {
        let url = format!("{}/api/v1{}", self.base_url, endpoint);
        debug!(%method, %url, "dSIPRouter request");

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(&self.token)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|source| DsipError::transport(&url, source))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DsipError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(DsipError::Decode)
    }

    // ------------------------------------------------------------------
    // Kamailio
    // ------------------------------------------------------------------

    pub async fn get_kamailio_stats(&self) -> DsipResult<Value> {
        self.request(Method::GET, "/kamailio/stats", None, None).await
    }

    pub async fn reload_kamailio(&self) -> DsipResult<Value> {
        self.request(Method::POST, "/reload/kamailio", None, None).await
    }

    // ------------------------------------------------------------------
    // Endpoint leases
    // ------------------------------------------------------------------

    pub async fn get_endpoint_lease(&self, ttl: i64, email: &str) -> DsipResult<Value> {
        let query = [("ttl", ttl.to_string()), ("email", email.to_string())];
        self.request(Method::GET, "/endpoint/lease", Some(&query), None)
            .await
    }

    pub async fn revoke_endpoint_lease(&self, lease_id: i64) -> DsipResult<Value> {
        self.request(
            Method::PUT,
            &format!("/endpoint/lease/{lease_id}/revoke"),
            None,
            None,
        )
        .await
    }

    // ------------------------------------------------------------------
    // Carrier groups
    // ------------------------------------------------------------------

    pub async fn list_carrier_groups(&self) -> DsipResult<Value> {
        self.request(Method::GET, "/carriergroups", None, None).await
    }

    pub async fn get_carrier_group(&self, gwgroupid: i64) -> DsipResult<Value> {
        self.request(Method::GET, &format!("/carriergroups/{gwgroupid}"), None, None)
            .await
    }

    pub async fn create_carrier_group(&self, data: &Value) -> DsipResult<Value> {
        self.request(Method::POST, "/carriergroups", None, Some(data))
            .await
    }

    pub async fn update_carrier_group(&self, gwgroupid: i64, data: &Value) -> DsipResult<Value> {
        self.request(
            Method::PUT,
            &format!("/carriergroups/{gwgroupid}"),
            None,
            Some(data),
        )
        .await
    }

    pub async fn delete_carrier_group(&self, gwgroupid: i64) -> DsipResult<Value> {
        self.request(
            Method::DELETE,
            &format!("/carriergroups/{gwgroupid}"),
            None,
            None,
        )
        .await
    }

    // ------------------------------------------------------------------
    // Endpoint groups
    // ------------------------------------------------------------------

    pub async fn list_endpoint_groups(&self) -> DsipResult<Value> {
        self.request(Method::GET, "/endpointgroups", None, None).await
    }

    pub async fn get_endpoint_group(&self, groupid: i64) -> DsipResult<Value> {
        self.request(Method::GET, &format!("/endpointgroups/{groupid}"), None, None)
            .await
    }

    pub async fn create_endpoint_group(&self, data: &Value) -> DsipResult<Value> {
        self.request(Method::POST, "/endpointgroups", None, Some(data))
            .await
    }

    pub async fn update_endpoint_group(&self, groupid: i64, data: &Value) -> DsipResult<Value> {
        self.request(
            Method::PUT,
            &format!("/endpointgroups/{groupid}"),
            None,
            Some(data),
        )
        .await
    }

    pub async fn delete_endpoint_group(&self, groupid: i64) -> DsipResult<Value> {
        self.request(
            Method::DELETE,
            &format!("/endpointgroups/{groupid}"),
            None,
            None,
        )
        .await
    }

    // ------------------------------------------------------------------
    // Inbound mappings
    // ------------------------------------------------------------------

    pub async fn list_inbound_mappings(&self) -> DsipResult<Value> {
        self.request(Method::GET, "/inboundmapping", None, None).await
    }

    pub async fn get_inbound_mapping(&self, ruleid: i64) -> DsipResult<Value> {
        self.request(Method::GET, &format!("/inboundmapping/{ruleid}"), None, None)
            .await
    }

    pub async fn create_inbound_mapping(&self, data: &Value) -> DsipResult<Value> {
        self.request(Method::POST, "/inboundmapping", None, Some(data))
            .await
    }

    pub async fn update_inbound_mapping(&self, ruleid: i64, data: &Value) -> DsipResult<Value> {
        self.request(
            Method::PUT,
            &format!("/inboundmapping/{ruleid}"),
            None,
            Some(data),
        )
        .await
    }

    /// Delete keyed by DID, not rule id.
    pub async fn delete_inbound_mapping(&self, did: &str) -> DsipResult<Value> {
        let query = [("did", did.to_string())];
        self.request(Method::DELETE, "/inboundmapping", Some(&query), None)
            .await
    }

    // ------------------------------------------------------------------
    // CDRs
    // ------------------------------------------------------------------

    pub async fn get_cdrs_by_endpoint_group(&self, endpointgroup: &str) -> DsipResult<Value> {
        self.request(
            Method::GET,
            &format!("/cdrs/endpointgroups/{endpointgroup}"),
            None,
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{delete, get};
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn test_config(base_url: String) -> DsipConfig {
        DsipConfig {
            base_url,
            token: "test-token".to_string(),
            verify_ssl: true,
        }
    }

    #[test]
    fn test_missing_token_fails_before_any_request() {
        let config = DsipConfig {
            base_url: "https://localhost:5000".to_string(),
            token: String::new(),
            verify_ssl: true,
        };
        let err = DsipClient::new(&config).unwrap_err();
        assert!(matches!(err, DsipError::MissingToken));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = test_config("https://localhost:5000/".to_string());
        let client = DsipClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://localhost:5000");
    }

    #[tokio::test]
    async fn test_get_stats_hits_versioned_path() {
        let app = Router::new().route(
            "/api/v1/kamailio/stats",
            get(|| async { Json(json!({"status": "ok"})) }),
        );
        let base = spawn_server(app).await;

        let client = DsipClient::new(&test_config(base)).unwrap();
        let value = client.get_kamailio_stats().await.unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[tokio::test]
    async fn test_bearer_token_attached() {
        let app = Router::new().route(
            "/api/v1/kamailio/stats",
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({ "auth": auth }))
            }),
        );
        let base = spawn_server(app).await;

        let client = DsipClient::new(&test_config(base)).unwrap();
        let value = client.get_kamailio_stats().await.unwrap();
        assert_eq!(value["auth"], "Bearer test-token");
    }

    #[tokio::test]
    async fn test_non_2xx_surfaces_status_error() {
        let app = Router::new()
            .fallback(|| async { (StatusCode::NOT_FOUND, "carrier group not found") });
        let base = spawn_server(app).await;

        let client = DsipClient::new(&test_config(base)).unwrap();
        let err = client.get_carrier_group(7).await.unwrap_err();
        match err {
            DsipError::Status { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("not found"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_stalled_endpoint_surfaces_transport_error() {
        let app = Router::new().route(
            "/api/v1/kamailio/stats",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({}))
            }),
        );
        let base = spawn_server(app).await;

        let config = test_config(base);
        let client = DsipClient::with_timeout(&config, Duration::from_millis(200)).unwrap();
        let err = client.get_kamailio_stats().await.unwrap_err();
        assert!(matches!(err, DsipError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_lease_query_parameters() {
        let app = Router::new().route(
            "/api/v1/endpoint/lease",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                Json(json!({
                    "ttl": q.get("ttl").cloned().unwrap_or_default(),
                    "email": q.get("email").cloned().unwrap_or_default(),
                }))
            }),
        );
        let base = spawn_server(app).await;

        let client = DsipClient::new(&test_config(base)).unwrap();
        let value = client.get_endpoint_lease(60, "ops@example.com").await.unwrap();
        assert_eq!(value["ttl"], "60");
        assert_eq!(value["email"], "ops@example.com");
    }

    #[tokio::test]
    async fn test_delete_inbound_mapping_keyed_by_did() {
        let app = Router::new().route(
            "/api/v1/inboundmapping",
            delete(|Query(q): Query<HashMap<String, String>>| async move {
                Json(json!({ "did": q.get("did").cloned().unwrap_or_default() }))
            }),
        );
        let base = spawn_server(app).await;

        let client = DsipClient::new(&test_config(base)).unwrap();
        let value = client.delete_inbound_mapping("5551234567").await.unwrap();
        assert_eq!(value["did"], "5551234567");
    }

    #[tokio::test]
    async fn test_create_carrier_group_sends_body() {
        let app = Router::new().route(
            "/api/v1/carriergroups",
            axum::routing::post(|Json(body): Json<Value>| async move { Json(body) }),
        );
        let base = spawn_server(app).await;

        let client = DsipClient::new(&test_config(base)).unwrap();
        let payload = json!({"name": "acme", "ip_addr": "203.0.113.10"});
        let value = client.create_carrier_group(&payload).await.unwrap();
        assert_eq!(value, payload);
    }
}
