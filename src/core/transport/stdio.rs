//! stdio transport: one MCP session over stdin/stdout.
//!
//! Logs go to stderr (see `main.rs`), so stdout carries only JSON-RPC.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single client until it closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let name = server.name().to_string();

        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(TransportError::init)?;
        info!(server = %name, "Client connected over stdio");

        let reason = session.waiting().await.map_err(TransportError::session)?;
        info!(server = %name, ?reason, "stdio session closed");
        Ok(())
    }
}
