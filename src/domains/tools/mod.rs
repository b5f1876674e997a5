//! Tools domain module.
//!
//! Tools are the physics calculations and knowledge-base operations that
//! MCP clients (and the CLI) can call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - The static tool list and name-based dispatch
//! - `router.rs` - Builds the rmcp ToolRouter from the registry
//! - `context.rs` - Shared state passed to each call
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a file in `definitions/` implementing `ToolDefinition`
//! 2. Export it from `definitions/mod.rs`
//! 3. Add `ToolEntry::of::<MyTool>()` to the list in `registry.rs`
//!
//! The router, the HTTP transport and the CLI pick it up from the registry.

mod context;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use context::ToolContext;
pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::{ToolCallFn, ToolEntry, ToolRegistry};
pub use router::build_tool_router;
