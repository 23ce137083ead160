//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct used for defining and
//! rendering prompt templates. Rendering is plain `{{variable}}`
//! substitution; required arguments are validated by the service before a
//! template is rendered.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with `{{variable}}` placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given arguments.
    ///
    /// Each `{{variable}}` placeholder is replaced with the value of
    /// `variable`; placeholders without a matching argument are left as-is
    /// (the service rejects missing required arguments up front).
    pub fn render(&self, arguments: &HashMap<String, String>) -> String {
        let mut result = self.template.clone();
        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Hello, {{name}}!");

        let mut args = HashMap::new();
        args.insert("name".to_string(), "World".to_string());

        assert_eq!(template.render(&args), "Hello, World!");
    }

    #[test]
    fn test_multiple_placeholders() {
        let template = PromptTemplate::new(
            "test",
            None,
            vec![],
            "Name: {{name}}\nIP: {{ip_address}}",
        );

        let mut args = HashMap::new();
        args.insert("name".to_string(), "acme".to_string());
        args.insert("ip_address".to_string(), "203.0.113.10".to_string());

        assert_eq!(template.render(&args), "Name: acme\nIP: 203.0.113.10");
    }

    #[test]
    fn test_repeated_placeholder() {
        let template = PromptTemplate::new("test", None, vec![], "{{x}} and {{x}}");

        let mut args = HashMap::new();
        args.insert("x".to_string(), "again".to_string());

        assert_eq!(template.render(&args), "again and again");
    }
}
