//! Physics MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing particle and nuclear
//! physics calculations, a quark-model event generator and a searchable
//! document knowledge base.
//!
//! # Architecture
//!
//! - **physics**: Pure calculations (kinematics, particle table, quark model, event generation)
//! - **knowledge**: Document loading and keyword search
//! - **core**: Configuration, error handling, the main server and transports
//! - **domains**: MCP surface organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: Data resources that can be read by clients
//!   - **prompts**: Prompt templates for consistent interactions
//!
//! # Example
//!
//! ```rust,no_run
//! use physics_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod knowledge;
pub mod physics;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
