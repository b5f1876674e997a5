//! Prompt templates module.
//!
//! A small template language:
//! - `{{variable}}` is replaced with the value of `variable` (or nothing)
//! - `{{#if variable}}content{{/if}}` keeps content only if variable is non-empty
//! - `{{#if variable}}content{{else}}alternative{{/if}}` with else support
//!
//! Conditionals do not nest. Substituted values are inserted verbatim and
//! never re-scanned, so argument text containing braces is left alone.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

const IF_OPEN: &str = "{{#if ";
const ELSE_TAG: &str = "{{else}}";
const ENDIF_TAG: &str = "{{/if}}";

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
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

    /// Names of the arguments marked as required.
    pub fn required_arguments(&self) -> impl Iterator<Item = &str> {
        self.arguments
            .iter()
            .filter(|a| a.required.unwrap_or(false))
            .map(|a| a.name.as_str())
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let expanded = expand_conditionals(&self.name, &self.template, arguments)?;
        Ok(substitute(&expanded, arguments))
    }
}

fn is_set(arguments: &HashMap<String, String>, name: &str) -> bool {
    arguments.get(name).is_some_and(|v| !v.is_empty())
}

/// Resolve every `{{#if}}` block to one of its branches.
fn expand_conditionals(
    prompt: &str,
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(IF_OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + IF_OPEN.len()..];

        let name_end = after_open
            .find("}}")
            .ok_or_else(|| PromptError::template(prompt, "Unclosed {{#if}} tag"))?;
        let name = after_open[..name_end].trim();
        let body_and_rest = &after_open[name_end + 2..];

        let body_end = body_and_rest
            .find(ENDIF_TAG)
            .ok_or_else(|| PromptError::template(prompt, format!("Missing {{{{/if}}}} for '{name}'")))?;
        let body = &body_and_rest[..body_end];
        if body.contains(IF_OPEN) {
            return Err(PromptError::template(prompt, "Nested {{#if}} blocks are not supported"));
        }

        let (then_branch, else_branch) = match body.find(ELSE_TAG) {
            Some(pos) => (&body[..pos], &body[pos + ELSE_TAG.len()..]),
            None => (body, ""),
        };
        out.push_str(if is_set(arguments, name) {
            then_branch
        } else {
            else_branch
        });

        rest = &body_and_rest[body_end + ENDIF_TAG.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Replace `{{name}}` placeholders in a single left-to-right pass.
fn substitute(template: &str, arguments: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                if let Some(value) = arguments.get(name) {
                    out.push_str(value);
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Explain {{topic}}.");
        let result = template.render(&args(&[("topic", "isospin")])).unwrap();
        assert_eq!(result, "Explain isospin.");
    }

    #[test]
    fn test_conditional_with_value() {
        let template =
            PromptTemplate::new("test", None, vec![], "Analyze{{#if p}} at p = {{p}} MeV{{/if}}.");
        let result = template.render(&args(&[("p", "500")])).unwrap();
        assert_eq!(result, "Analyze at p = 500 MeV.");
    }

    #[test]
    fn test_conditional_without_value() {
        let template =
            PromptTemplate::new("test", None, vec![], "Analyze{{#if p}} at p = {{p}} MeV{{/if}}.");
        assert_eq!(template.render(&HashMap::new()).unwrap(), "Analyze.");
        assert_eq!(template.render(&args(&[("p", "")])).unwrap(), "Analyze.");
    }

    #[test]
    fn test_conditional_with_else() {
        let template = PromptTemplate::new(
            "test",
            None,
            vec![],
            "Use {{#if seed}}seed {{seed}}{{else}}a fresh seed{{/if}}.",
        );
        assert_eq!(
            template.render(&HashMap::new()).unwrap(),
            "Use a fresh seed."
        );
        assert_eq!(
            template.render(&args(&[("seed", "42")])).unwrap(),
            "Use seed 42."
        );
    }

    #[test]
    fn test_unknown_placeholders_removed() {
        let template = PromptTemplate::new("test", None, vec![], "a{{missing}}b");
        assert_eq!(template.render(&HashMap::new()).unwrap(), "ab");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let template = PromptTemplate::new("test", None, vec![], "Topic: {{topic}}");
        let result = template.render(&args(&[("topic", "{{level}} braces")])).unwrap();
        assert_eq!(result, "Topic: {{level}} braces");
    }

    #[test]
    fn test_malformed_templates() {
        let unclosed = PromptTemplate::new("test", None, vec![], "{{#if a}}never closed");
        assert!(matches!(
            unclosed.render(&HashMap::new()),
            Err(PromptError::Template { .. })
        ));

        let nested =
            PromptTemplate::new("test", None, vec![], "{{#if a}}{{#if b}}x{{/if}}{{/if}}");
        assert!(nested.render(&HashMap::new()).is_err());
    }
}
