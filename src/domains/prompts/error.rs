//! Prompt-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors raised while rendering one of the physics prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    /// No prompt with that name is registered.
    #[error("Unknown prompt '{name}'. Available prompts: {}", .available.join(", "))]
    UnknownPrompt {
        name: String,
        available: Vec<String>,
    },

    /// `prompts.enabled` is false.
    #[error("Prompts are disabled on this server (requested '{0}')")]
    Disabled(String),

    /// A required argument is absent or blank.
    #[error("Prompt '{prompt}' requires the argument '{argument}'")]
    MissingArgument { prompt: String, argument: String },

    /// An argument failed its prompt's check, e.g. an unknown particle name.
    #[error("Invalid value for '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// The prompt's own template is malformed.
    #[error("Template for prompt '{prompt}' is malformed: {reason}")]
    Template { prompt: String, reason: String },
}

impl PromptError {
    /// Create an "unknown prompt" error listing the registered prompts.
    pub fn unknown_prompt<I, S>(name: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownPrompt {
            name: name.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a "missing argument" error.
    pub fn missing_argument(prompt: impl Into<String>, argument: impl Into<String>) -> Self {
        Self::MissingArgument {
            prompt: prompt.into(),
            argument: argument.into(),
        }
    }

    /// Create an "invalid argument" error.
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Create a "template" error for `prompt`.
    pub fn template(prompt: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Template {
            prompt: prompt.into(),
            reason: reason.into(),
        }
    }
}

impl From<PromptError> for McpError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Template { .. } => McpError::internal_error(err.to_string(), None),
            _ => McpError::invalid_params(err.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_prompt_lists_available() {
        let err = PromptError::unknown_prompt("fusion_study", ["physics_assistant", "event_study"]);
        assert_eq!(
            err.to_string(),
            "Unknown prompt 'fusion_study'. Available prompts: physics_assistant, event_study"
        );
    }

    #[test]
    fn test_missing_argument_names_prompt() {
        let err = PromptError::missing_argument("explain_concept", "topic");
        assert_eq!(
            err.to_string(),
            "Prompt 'explain_concept' requires the argument 'topic'"
        );
    }

    #[test]
    fn test_mcp_error_codes() {
        let bad: McpError = PromptError::invalid_argument("num_events", "must be positive").into();
        assert_eq!(bad.code.0, -32602);

        let broken: McpError = PromptError::template("event_study", "Unclosed {{#if}} tag").into();
        assert_eq!(broken.code.0, -32603);
    }
}
