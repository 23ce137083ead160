//! Carrier setup prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Guides an agent through setting up a new carrier group.
pub struct CarrierSetupPrompt;

impl PromptDefinition for CarrierSetupPrompt {
    const NAME: &'static str = "carrier_setup_prompt";
    const DESCRIPTION: &'static str = "Generate a prompt for setting up a new carrier group";

    fn template() -> &'static str {
        r#"Please set up a new carrier group with the following details:
- Carrier Name: {{carrier_name}}
- IP Address: {{ip_address}}

After creating the carrier group, remember to reload Kamailio to apply the changes."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "carrier_name".to_string(),
                title: None,
                description: Some("Name for the new carrier group".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "ip_address".to_string(),
                title: None,
                description: Some("IP address of the carrier".to_string()),
                required: Some(true),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_setup_prompt_metadata() {
        assert_eq!(CarrierSetupPrompt::NAME, "carrier_setup_prompt");
        assert!(!CarrierSetupPrompt::DESCRIPTION.is_empty());
        assert!(CarrierSetupPrompt::template().contains("{{carrier_name}}"));
        assert!(CarrierSetupPrompt::template().contains("{{ip_address}}"));

        let args = CarrierSetupPrompt::arguments();
        assert_eq!(args.len(), 2);
        assert!(args.iter().all(|a| a.required == Some(true)));
    }
}
