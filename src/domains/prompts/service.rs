//! Prompt service implementation.
//!
//! The PromptService lists the registered prompts and renders them.
//! Prompts are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::{RegisteredPrompt, get_all_prompts};
use crate::core::config::PromptsConfig;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    config: PromptsConfig,

    /// Registered prompts, in listing order.
    prompts: Vec<RegisteredPrompt>,
}

impl PromptService {
    /// Create a new PromptService with the given configuration.
    pub fn new(config: PromptsConfig) -> Self {
        let prompts = get_all_prompts();
        info!(count = prompts.len(), "Initializing PromptService");
        Self { config, prompts }
    }

    fn find(&self, name: &str) -> Option<&RegisteredPrompt> {
        self.prompts.iter().find(|p| p.template.name == name)
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        if !self.config.enabled {
            return Vec::new();
        }
        self.prompts
            .iter()
            .map(|p| Prompt {
                name: p.template.name.clone(),
                title: None,
                description: p.template.description.clone(),
                arguments: Some(p.template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        if !self.config.enabled {
            return Err(PromptError::Disabled(name.to_string()));
        }
        let prompt = self.find(name).ok_or_else(|| {
            PromptError::unknown_prompt(name, self.prompts.iter().map(|p| p.template.name.clone()))
        })?;

        let arguments = arguments.unwrap_or_default();

        for required in prompt.template.required_arguments() {
            if arguments.get(required).is_none_or(|v| v.trim().is_empty()) {
                return Err(PromptError::missing_argument(name, required));
            }
        }
        (prompt.validate)(&arguments)?;

        let content = prompt.template.render(&arguments)?;
        debug!(prompt = name, "Rendered prompt");

        Ok(GetPromptResult {
            description: prompt.template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}
