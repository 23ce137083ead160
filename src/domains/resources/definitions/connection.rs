//! Connection configuration resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// The active dSIPRouter connection configuration (dynamic).
///
/// Exposes the base URL, the TLS-verify flag, and whether a bearer token is
/// configured. The token value itself is never included.
pub struct ConnectionConfigResource;

impl ResourceDefinition for ConnectionConfigResource {
    const URI: &'static str = "config://dsiprouter";
    const NAME: &'static str = "dSIPRouter Connection Configuration";
    const DESCRIPTION: &'static str = "Current dSIPRouter connection configuration";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ConnectionInfo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_resource_metadata() {
        assert_eq!(ConnectionConfigResource::URI, "config://dsiprouter");
        assert_eq!(ConnectionConfigResource::MIME_TYPE, "application/json");
    }
}
