//! Tool Registry - the single list of tools and their dispatch.
//!
//! Every transport derives its tools from [`ToolRegistry::entries`]: the
//! rmcp router for STDIO/TCP, the HTTP dispatcher and the CLI.

use rmcp::model::{CallToolResult, Tool};
use tracing::{instrument, warn};

use super::ToolContext;
use super::ToolError;
use super::definitions::{
    BindingEnergyTool, DecayProbabilityTool, GenerateEventsTool, ListParticlesTool,
    LoadDocumentsTool, LorentzFactorTool, ParticlePropertiesTool, RelativisticEnergyTool,
    SearchKnowledgeTool, ToolDefinition, VisualizeDistributionsTool,
};

/// Signature shared by every tool's `call`.
pub type ToolCallFn = fn(serde_json::Value, &ToolContext) -> Result<CallToolResult, ToolError>;

/// A registered tool: its name, metadata and entry point.
#[derive(Clone, Copy)]
pub struct ToolEntry {
    pub name: &'static str,
    pub tool: fn() -> Tool,
    pub call: ToolCallFn,
}

impl ToolEntry {
    /// Entry for a [`ToolDefinition`].
    pub const fn of<T: ToolDefinition>() -> Self {
        Self {
            name: T::NAME,
            tool: T::to_tool,
            call: T::call,
        }
    }
}

impl std::fmt::Debug for ToolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolEntry").field("name", &self.name).finish()
    }
}

static TOOLS: [ToolEntry; 10] = [
    ToolEntry::of::<RelativisticEnergyTool>(),
    ToolEntry::of::<LorentzFactorTool>(),
    ToolEntry::of::<DecayProbabilityTool>(),
    ToolEntry::of::<BindingEnergyTool>(),
    ToolEntry::of::<ParticlePropertiesTool>(),
    ToolEntry::of::<ListParticlesTool>(),
    ToolEntry::of::<GenerateEventsTool>(),
    ToolEntry::of::<VisualizeDistributionsTool>(),
    ToolEntry::of::<SearchKnowledgeTool>(),
    ToolEntry::of::<LoadDocumentsTool>(),
];

/// Tool registry - dispatches calls with a shared [`ToolContext`].
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    context: ToolContext,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(context: ToolContext) -> Self {
        Self { context }
    }

    /// Every registered tool, in registration order.
    pub fn entries() -> &'static [ToolEntry] {
        &TOOLS
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        TOOLS.iter().map(|e| e.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        TOOLS.iter().map(|e| (e.tool)()).collect()
    }

    /// Look up a tool by exact name.
    pub fn find(name: &str) -> Option<&'static ToolEntry> {
        TOOLS.iter().find(|e| e.name == name)
    }

    /// The context passed to every call.
    pub fn context(&self) -> &ToolContext {
        &self.context
    }

    /// Dispatch a tool call by name.
    ///
    /// # Errors
    ///
    /// [`ToolError::NotFound`] (listing the available tools) for an unknown
    /// name, [`ToolError::InvalidArguments`] when the arguments do not match
    /// the tool's schema.
    #[instrument(skip(self, arguments))]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let Some(entry) = Self::find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name, Self::tool_names()));
        };
        (entry.call)(arguments, &self.context)
    }

    /// [`call_tool`](Self::call_tool) on tokio's blocking pool.
    ///
    /// Tools do synchronous work (PDF extraction in `load_documents`, event
    /// loops in `generate_physics_events`) that must not stall the runtime.
    pub async fn call_tool_blocking(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let registry = self.clone();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || registry.call_tool(&name, arguments))
            .await
            .map_err(|e| ToolError::internal(format!("tool task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 10);
        for expected in [
            "calculate_relativistic_energy",
            "calculate_lorentz_factor",
            "calculate_decay_probability",
            "calculate_binding_energy",
            "get_particle_properties",
            "list_particles",
            "generate_physics_events",
            "visualize_quark_distributions",
            "search_knowledge_base",
            "load_documents",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_names_are_unique_and_match_metadata() {
        let names: HashSet<_> = ToolRegistry::tool_names().into_iter().collect();
        assert_eq!(names.len(), TOOLS.len());
        for entry in ToolRegistry::entries() {
            let tool = (entry.tool)();
            assert_eq!(tool.name, entry.name);
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_registry_call() {
        let registry = ToolRegistry::new(ToolContext::default());
        let result = registry
            .call_tool(
                "calculate_lorentz_factor",
                serde_json::json!({ "velocity_fraction": 0.0 }),
            )
            .unwrap();
        assert_eq!(result.structured_content.unwrap()["lorentz_factor"], 1.0);
    }

    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(ToolContext::default());
        let err = registry.call_tool("unknown", serde_json::json!({})).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown"));
        assert!(message.contains("list_particles"));
    }

    #[tokio::test]
    async fn test_blocking_call_matches_direct_call() {
        let registry = ToolRegistry::new(ToolContext::default());
        let args = serde_json::json!({ "num_events": 500, "seed": 3 });
        let direct = registry.call_tool("generate_physics_events", args.clone()).unwrap();
        let pooled = registry
            .call_tool_blocking("generate_physics_events", args)
            .await
            .unwrap();
        assert_eq!(direct.structured_content, pooled.structured_content);

        let err = registry
            .call_tool_blocking("warp_drive", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound { .. }));
    }

    #[test]
    fn test_registry_call_bad_arguments() {
        let registry = ToolRegistry::new(ToolContext::default());
        let err = registry
            .call_tool("calculate_lorentz_factor", serde_json::json!({ "velocity_fraction": "fast" }))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
