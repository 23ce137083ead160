//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::Config;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Full server configuration; dynamic resources read from it.
    config: Arc<Config>,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// The active dSIPRouter connection settings (token never included).
    ConnectionInfo,
}

impl ResourceService {
    /// Create a new ResourceService with the given configuration.
    pub fn new(config: Arc<Config>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config,
            resources: HashMap::new(),
        };

        // Register all resources from registry
        service.register_from_registry();

        service
    }

    /// Register all resources from the registry.
    fn register_from_registry(&mut self) {
        info!("Registering resources from registry");
        for entry in get_all_resources() {
            self.register_resource(entry);
        }
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(uri, dynamic_type)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ConnectionInfo => {
                // Only a presence flag for the token, never its value.
                let dsip = &self.config.dsiprouter;
                let info = serde_json::json!({
                    "base_url": dsip.base_url,
                    "verify_ssl": dsip.verify_ssl,
                    "token_configured": dsip.token_configured(),
                });

                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&info)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> ResourceService {
        let mut config = Config::default();
        config.dsiprouter.token = "a-very-secret-token".to_string();
        ResourceService::new(Arc::new(config))
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = test_service();
        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].raw.uri, "config://dsiprouter");
    }

    #[tokio::test]
    async fn test_read_connection_config() {
        let service = test_service();
        let result = service.read_resource("config://dsiprouter").await.unwrap();

        let text = match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("expected text contents"),
        };
        let value: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(value["base_url"], "https://localhost:5000");
        assert_eq!(value["verify_ssl"], true);
        assert_eq!(value["token_configured"], true);
    }

    #[tokio::test]
    async fn test_token_value_never_leaks() {
        let service = test_service();
        let result = service.read_resource("config://dsiprouter").await.unwrap();

        let text = match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("expected text contents"),
        };
        assert!(!text.contains("a-very-secret-token"));
    }

    #[tokio::test]
    async fn test_token_flag_false_when_unset() {
        let service = ResourceService::new(Arc::new(Config::default()));
        let result = service.read_resource("config://dsiprouter").await.unwrap();

        let text = match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("expected text contents"),
        };
        let value: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(value["token_configured"], false);
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = test_service();
        let result = service.read_resource("config://nonexistent").await;
        assert!(result.is_err());
    }
}
