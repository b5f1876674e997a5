//! Transports for the physics MCP server.
//!
//! - `stdio` (default feature): the mode MCP clients launch the server in.
//! - `tcp`: line-delimited JSON-RPC, one rmcp session per connection.
//! - `http`: plain JSON-RPC over POST plus `/health`, for curl and browsers.
//!
//! stdio and TCP hand the connection to rmcp and the `McpServer` handler;
//! HTTP dispatches JSON-RPC methods itself through the same server. All three
//! share one knowledge base, so documents loaded over one connection are
//! searchable from every other.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(any(feature = "tcp", feature = "http"))]
pub use config::DEFAULT_HOST;

#[cfg(feature = "tcp")]
pub use config::{DEFAULT_TCP_PORT, TcpConfig};

#[cfg(feature = "http")]
pub use config::{DEFAULT_HTTP_PORT, DEFAULT_RPC_PATH, HttpConfig};
