//! Starts the configured transport around an `McpServer`.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;
use crate::domains::tools::ToolRegistry;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "tcp")]
use super::tcp::TcpTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Runs the physics server on the transport chosen by `MCP_TRANSPORT`.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// The startup line: server, transport and what is being served.
    pub fn banner(&self, server: &McpServer) -> String {
        format!(
            "{} v{} on {} ({} tools, {} documents loaded)",
            server.name(),
            server.version(),
            self.config.description(),
            ToolRegistry::tool_names().len(),
            server.knowledge().len()
        )
    }

    /// Serve until the transport shuts down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("{}", self.banner(&server));

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(cfg) => TcpTransport::new(cfg).run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    #[test]
    fn test_banner_names_server_and_transport() {
        let server = McpServer::new(Config::default());
        server.knowledge().add_document("notes.txt", "muon decay").unwrap();

        let service = TransportService::new(TransportConfig::default());
        let banner = service.banner(&server);
        assert!(banner.starts_with("physics-mcp-server v"));
        assert!(banner.contains(&service.config().description()));
        assert!(banner.contains("10 tools, 1 documents loaded"));
    }
}
