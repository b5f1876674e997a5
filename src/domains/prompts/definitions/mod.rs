//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with:
//! - Metadata (name, description, arguments)
//! - Template string
//! - Optional argument validation
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

pub mod event_study;
pub mod explain_concept;
pub mod particle_analysis;
pub mod physics_assistant;

pub use event_study::EventStudyPrompt;
pub use explain_concept::ExplainConceptPrompt;
pub use particle_analysis::ParticleAnalysisPrompt;
pub use physics_assistant::PhysicsAssistantPrompt;

use std::collections::HashMap;

use rmcp::model::PromptArgument;

use super::error::PromptError;

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and template.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;

    /// Check argument values before rendering.
    fn validate(_arguments: &HashMap<String, String>) -> Result<(), PromptError> {
        Ok(())
    }
}

pub(crate) fn required(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(true),
    }
}

pub(crate) fn optional(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(false),
    }
}

/// Parse an optional argument, treating an empty value as absent.
pub(crate) fn parse_optional<T>(
    arguments: &HashMap<String, String>,
    name: &str,
) -> Result<Option<T>, PromptError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match arguments.get(name).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e: T::Err| PromptError::invalid_argument(name, e.to_string())),
        None => Ok(None),
    }
}
