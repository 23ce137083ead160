//! PBX setup prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Guides an agent through setting up a new endpoint group (PBX).
pub struct PbxSetupPrompt;

impl PromptDefinition for PbxSetupPrompt {
    const NAME: &'static str = "pbx_setup_prompt";
    const DESCRIPTION: &'static str = "Generate a prompt for setting up a new endpoint group (PBX)";

    fn template() -> &'static str {
        r#"Please set up a new endpoint group with the following details:
- PBX Name: {{pbx_name}}
- IP Address: {{ip_address}}

After creating the endpoint group, remember to reload Kamailio to apply the changes."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "pbx_name".to_string(),
                title: None,
                description: Some("Name for the new endpoint group".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "ip_address".to_string(),
                title: None,
                description: Some("IP address of the PBX".to_string()),
                required: Some(true),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pbx_setup_prompt_metadata() {
        assert_eq!(PbxSetupPrompt::NAME, "pbx_setup_prompt");
        assert!(PbxSetupPrompt::template().contains("{{pbx_name}}"));

        let args = PbxSetupPrompt::arguments();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "pbx_name");
        assert_eq!(args[1].name, "ip_address");
    }
}
