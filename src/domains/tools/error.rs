//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur while dispatching a tool call.
///
/// Domain failures (a bad velocity, an unknown particle) are not errors at
/// this level: tools report them as `is_error` results so the caller sees the
/// message. These variants cover calls that never reached a tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {name}. Available tools: {}", .available.join(", "))]
    NotFound {
        name: String,
        available: Vec<String>,
    },

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error listing the tools that do exist.
    pub fn not_found<I, S>(name: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NotFound {
            name: name.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound { .. } | ToolError::InvalidArguments(_) => {
                McpError::invalid_params(err.to_string(), None)
            }
            ToolError::Internal(_) => {
                McpError::internal_error(err.to_string(), None)
            }
        }
    }
}
