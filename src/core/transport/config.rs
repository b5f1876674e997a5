//! Transport selection for the physics server.
//!
//! `MCP_TRANSPORT` picks the transport (`stdio`, `tcp` or `http`); each
//! network transport reads its own `MCP_TCP_*` or `MCP_HTTP_*` variables.
//! Values that do not parse are logged and replaced by the defaults below.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Port for `MCP_TRANSPORT=tcp` when `MCP_TCP_PORT` is unset.
#[cfg(feature = "tcp")]
pub const DEFAULT_TCP_PORT: u16 = 3000;

/// Port for `MCP_TRANSPORT=http` when `MCP_HTTP_PORT` is unset.
#[cfg(feature = "http")]
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Bind address for both network transports. Loopback only, since tool calls
/// can read document directories from the host.
#[cfg(any(feature = "tcp", feature = "http"))]
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// JSON-RPC endpoint of the HTTP transport.
#[cfg(feature = "http")]
pub const DEFAULT_RPC_PATH: &str = "/mcp";

/// Which transport serves the physics tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// stdin/stdout, the mode MCP clients spawn the server in.
    #[cfg(feature = "stdio")]
    Stdio,

    /// Line-delimited JSON-RPC, one rmcp session per TCP connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// JSON-RPC over POST with `/health` and `/` info endpoints.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// TCP listener settings.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpConfig {
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

/// HTTP listener settings.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,

    /// Always starts with `/`.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Allow any origin, for browser-based clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    DEFAULT_RPC_PATH.to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_TCP_PORT,
            host: default_host(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    fn normalize_rpc_path(path: &str) -> String {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            default_rpc_path()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(TcpConfig::default());
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

impl TransportConfig {
    /// Read the transport from `MCP_TRANSPORT` and its companion variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let requested = var("MCP_TRANSPORT").unwrap_or_default().trim().to_lowercase();

        match requested.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig {
                port: port_var(&var, "MCP_TCP_PORT", DEFAULT_TCP_PORT),
                host: var("MCP_TCP_HOST").unwrap_or_else(default_host),
            }),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig {
                port: port_var(&var, "MCP_HTTP_PORT", DEFAULT_HTTP_PORT),
                host: var("MCP_HTTP_HOST").unwrap_or_else(default_host),
                rpc_path: var("MCP_HTTP_PATH")
                    .map(|p| HttpConfig::normalize_rpc_path(&p))
                    .unwrap_or_else(default_rpc_path),
                enable_cors: var("MCP_HTTP_CORS")
                    .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no"))
                    .unwrap_or_else(default_cors),
            }),
            "" | "stdio" => Self::default(),
            other => {
                warn!(
                    "MCP_TRANSPORT={other:?} is not compiled into this build, using {}",
                    Self::default().description()
                );
                Self::default()
            }
        }
    }

    /// One-line description used in the startup log.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "stdio".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("tcp://{}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("http://{}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn port_var(var: &impl Fn(&str) -> Option<String>, key: &str, default: u16) -> u16 {
    match var(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring {key}={raw:?}: not a port number, using {default}");
            default
        }),
        None => default,
    }
}
