//! Tool Router - builds the rmcp ToolRouter from the registry.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::{ToolContext, ToolError};
use super::registry::{ToolEntry, ToolRegistry};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(context: ToolContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRegistry::entries()
        .iter()
        .fold(ToolRouter::new(), |router, entry| {
            router.with_route(create_route(entry, context.clone()))
        })
}

/// Create a ToolRoute for STDIO/TCP transport.
///
/// The call runs on the blocking pool, like HTTP dispatch.
fn create_route<S>(entry: &ToolEntry, context: ToolContext) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let call = entry.call;
    ToolRoute::new_dyn((entry.tool)(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let context = context.clone();
        async move {
            tokio::task::spawn_blocking(move || call(serde_json::Value::Object(args), &context))
                .await
                .map_err(|e| ToolError::internal(format!("tool task failed: {e}")))?
                .map_err(McpError::from)
        }
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(ToolContext::default());
        let tools = router.list_all();
        assert_eq!(tools.len(), 10);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"calculate_relativistic_energy"));
        assert!(names.contains(&"get_particle_properties"));
        assert!(names.contains(&"generate_physics_events"));
        assert!(names.contains(&"search_knowledge_base"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(ToolContext::default());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
