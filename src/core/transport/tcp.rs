//! TCP transport: line-delimited JSON-RPC, one rmcp session per connection.
//!
//! Every connection gets a clone of the server, so all clients share the
//! knowledge base and see documents loaded by the others.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{Duration, sleep};
use tracing::{Instrument, info, info_span, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed `accept` so a persistent error does not spin.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

pub struct TcpTransport {
    config: TcpConfig,
    connections: AtomicU64,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self {
            config,
            connections: AtomicU64::new(0),
        }
    }

    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Accept clients until the process is stopped.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;
        info!("Listening for MCP clients on tcp://{addr}");

        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Failed to accept a TCP client: {e}");
                    sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };

            let id = self.connections.fetch_add(1, Ordering::Relaxed) + 1;
            if let Err(e) = stream.set_nodelay(true) {
                warn!(%peer, "Could not set TCP_NODELAY: {e}");
            }

            let span = info_span!("tcp_client", id, %peer);
            tokio::spawn(serve_client(server.clone(), stream, peer).instrument(span));
        }
    }
}

async fn serve_client(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    let session = match server.serve(stream).await {
        Ok(session) => session,
        Err(e) => {
            warn!("MCP handshake with {peer} failed: {e}");
            return;
        }
    };
    info!("Client connected");

    match session.waiting().await {
        Ok(reason) => info!(?reason, "Client disconnected"),
        Err(e) => warn!("Session ended with an error: {e:?}"),
    }
}
