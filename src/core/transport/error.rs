//! Errors that stop a transport from serving.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// A transport failed to start or its session ended abnormally.
///
/// Per-connection failures on TCP are logged and do not surface here; only
/// errors that end the whole server do.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listener could not bind, usually because the port is taken.
    #[error("Cannot listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP handshake with the client failed.
    #[error("MCP session failed to initialize: {0}")]
    Init(String),

    /// The MCP session ended with an error after initialization.
    #[error("MCP session ended with an error: {0}")]
    Session(String),

    /// The HTTP server stopped.
    #[error("HTTP server stopped: {0}")]
    Http(String),
}

impl TransportError {
    /// Create a bind error for `address`.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    /// Create an initialization error.
    pub fn init(msg: impl ToString) -> Self {
        Self::Init(msg.to_string())
    }

    /// Create a session error.
    pub fn session(msg: impl ToString) -> Self {
        Self::Session(msg.to_string())
    }

    /// Create an HTTP error.
    pub fn http(msg: impl ToString) -> Self {
        Self::Http(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_bind_error_keeps_source() {
        let err = TransportError::bind(
            "127.0.0.1:8080",
            io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        );
        assert_eq!(
            err.to_string(),
            "Cannot listen on 127.0.0.1:8080: address in use"
        );
        assert!(err.source().is_some());
    }
}
