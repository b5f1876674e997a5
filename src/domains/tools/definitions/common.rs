//! Shared plumbing for tool definitions.
//!
//! A tool is a type implementing [`ToolDefinition`]: a name, a description,
//! a parameter struct whose JSON schema is derived with schemars, and an
//! `execute` function. Parsing, schema generation and error reporting are
//! provided here so each definition only states its own logic.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domains::tools::{ToolContext, ToolError};
use crate::physics::PhysicsError;

/// A statically declared tool.
pub trait ToolDefinition {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Run the tool. Domain failures become `is_error` results.
    fn execute(params: &Self::Params, ctx: &ToolContext) -> CallToolResult;

    /// Tool metadata with the parameter schema.
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Deserialize raw JSON arguments. `null` is treated as `{}`.
    fn parse(arguments: serde_json::Value) -> Result<Self::Params, ToolError> {
        let arguments = match arguments {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            other => other,
        };
        serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", Self::NAME, e)))
    }

    /// Parse then execute.
    fn call(arguments: serde_json::Value, ctx: &ToolContext) -> Result<CallToolResult, ToolError> {
        let params = Self::parse(arguments)?;
        Ok(Self::execute(&params, ctx))
    }
}

/// Success result carrying a text summary and the same data as JSON.
pub fn success_result(text: impl Into<String>, data: impl Serialize) -> CallToolResult {
    let mut result = CallToolResult::success(vec![Content::text(text.into())]);
    match serde_json::to_value(data) {
        Ok(value) => result.structured_content = Some(value),
        Err(e) => warn!("Failed to serialize structured content: {}", e),
    }
    result
}

/// Create an error result with a formatted message.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    let message = message.into();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Error result for a failed physics calculation.
///
/// The structured content names the error kind and, for unknown particles,
/// the names that are known.
pub fn physics_error_result(err: &PhysicsError) -> CallToolResult {
    let mut result = error_result(err.to_string());
    let mut data = serde_json::json!({
        "error": err.kind(),
        "message": err.to_string(),
    });
    if let PhysicsError::NotFound { known, .. } = err {
        data["known"] = serde_json::json!(known);
    }
    result.structured_content = Some(data);
    result
}

/// Text of the first content item, if it is text.
pub fn result_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|c| match &c.raw {
        rmcp::model::RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physics_error_result_lists_known_particles() {
        let err = PhysicsError::not_found("graviton", ["electron", "muon"]);
        let result = physics_error_result(&err);
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).unwrap().contains("electron, muon"));

        let data = result.structured_content.unwrap();
        assert_eq!(data["error"], "not_found");
        assert_eq!(data["known"], serde_json::json!(["electron", "muon"]));
    }

    #[test]
    fn test_success_result_has_structured_content() {
        let result = success_result("E = 5 MeV", serde_json::json!({ "energy_mev": 5.0 }));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result), Some("E = 5 MeV"));
        assert_eq!(result.structured_content.unwrap()["energy_mev"], 5.0);
    }
}
