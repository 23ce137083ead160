//! Inbound DID mapping tools.
//!
//! Inbound mappings route incoming calls for a DID (phone number) to an
//! endpoint group. Deletion is keyed by DID, not rule id - an asymmetry of
//! the platform's API.

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::CreateInboundMappingTool;
pub use delete::DeleteInboundMappingTool;
pub use get::GetInboundMappingTool;
pub use list::ListInboundMappingsTool;
pub use update::UpdateInboundMappingTool;

/// Encode an endpoint group reference for a mapping's server list.
///
/// dSIPRouter distinguishes individual gateways from gateway groups in a
/// rule's server list by prefixing group ids with `#`. Multiple targets
/// would be comma-joined refs; this tool surface routes to a single group.
pub(crate) fn group_ref(groupid: i64) -> String {
    format!("#{groupid}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_ref_exact_form() {
        assert_eq!(group_ref(3), "#3");
        assert_eq!(group_ref(64), "#64");
    }
}
