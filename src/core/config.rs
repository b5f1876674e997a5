//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Knowledge base configuration.
    pub knowledge: KnowledgeConfig,

    /// Event generation limits.
    pub events: EventsConfig,

    /// Security and path validation configuration.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Whether resources are advertised to clients.
    pub enabled: bool,
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptsConfig {
    /// Whether prompts are advertised to clients.
    pub enabled: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Knowledge base configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Directory scanned by `load_documents` when no directory is given.
    pub documents_dir: PathBuf,

    /// Maximum number of snippets a search returns.
    pub max_sections: usize,
}

/// Limits on event generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Largest `num_events` a single call may request.
    pub max_events: i64,
}

/// Configuration for security and path validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Optional root directory for document loading.
    /// If None, no path restrictions are enforced.
    pub root_path: Option<PathBuf>,

    /// Whether to allow symlinks in path validation.
    /// If false, paths that traverse a symlink are rejected.
    pub allow_symlinks: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "physics-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            documents_dir: PathBuf::from("./pdfs"),
            max_sections: crate::knowledge::DEFAULT_MAX_SECTIONS,
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            max_events: 1_000_000,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            root_path: None,
            allow_symlinks: true,
        }
    }
}

/// Read and parse an environment variable, warning when the value is unusable.
fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_DOCUMENTS_DIR`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(with_timestamps) = parse_env("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = with_timestamps;
        }

        if let Some(enabled) = parse_env("MCP_RESOURCES_ENABLED") {
            config.resources.enabled = enabled;
        }
        if let Some(enabled) = parse_env("MCP_PROMPTS_ENABLED") {
            config.prompts.enabled = enabled;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(dir) = std::env::var("MCP_DOCUMENTS_DIR") {
            config.knowledge.documents_dir = PathBuf::from(dir);
        }
        match parse_env::<usize>("MCP_SEARCH_MAX_SECTIONS") {
            Some(0) => warn!("MCP_SEARCH_MAX_SECTIONS must be positive, keeping default"),
            Some(n) => config.knowledge.max_sections = n,
            None => {}
        }

        match parse_env::<i64>("MCP_MAX_EVENTS") {
            Some(n) if n <= 0 => warn!("MCP_MAX_EVENTS must be positive, keeping default"),
            Some(n) => config.events.max_events = n,
            None => {}
        }

        // Load security configuration
        if let Ok(root_path) = std::env::var("MCP_ROOT_PATH") {
            config.security.root_path = Some(PathBuf::from(root_path));
            info!(
                "Path security enabled: root directory set to {:?}",
                config.security.root_path
            );
        }

        if let Some(allow_symlinks) = parse_env("MCP_ALLOW_SYMLINKS") {
            config.security.allow_symlinks = allow_symlinks;
            info!("Symlinks allowed: {}", config.security.allow_symlinks);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const KEYS: [&str; 4] = [
        "MCP_DOCUMENTS_DIR",
        "MCP_SEARCH_MAX_SECTIONS",
        "MCP_MAX_EVENTS",
        "MCP_ROOT_PATH",
    ];

    fn clear_env() {
        for key in KEYS {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "physics-mcp-server");
        assert_eq!(config.knowledge.documents_dir, PathBuf::from("./pdfs"));
        assert_eq!(config.knowledge.max_sections, 10);
        assert_eq!(config.events.max_events, 1_000_000);
        assert!(config.security.root_path.is_none());
        assert!(config.prompts.enabled);
    }

    #[test]
    fn test_knowledge_and_events_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_DOCUMENTS_DIR", "/data/papers");
            std::env::set_var("MCP_SEARCH_MAX_SECTIONS", "3");
            std::env::set_var("MCP_MAX_EVENTS", "5000");
            std::env::set_var("MCP_ROOT_PATH", "/data");
        }
        let config = Config::from_env();
        assert_eq!(config.knowledge.documents_dir, PathBuf::from("/data/papers"));
        assert_eq!(config.knowledge.max_sections, 3);
        assert_eq!(config.events.max_events, 5000);
        assert_eq!(config.security.root_path, Some(PathBuf::from("/data")));
        clear_env();
    }

    #[test]
    fn test_invalid_env_values_keep_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_SEARCH_MAX_SECTIONS", "0");
            std::env::set_var("MCP_MAX_EVENTS", "lots");
        }
        let config = Config::from_env();
        assert_eq!(config.knowledge.max_sections, 10);
        assert_eq!(config.events.max_events, 1_000_000);
        clear_env();
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["events"]["max_events"], 1_000_000);
        assert_eq!(json["knowledge"]["documents_dir"], "./pdfs");
    }
}
