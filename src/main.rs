//! Physics MCP Server Entry Point
//!
//! Initializes logging, loads configuration and either serves MCP over the
//! configured transport or runs a single tool from the command line.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use physics_mcp_server::core::{Config, McpServer, TransportService};
use physics_mcp_server::domains::tools::definitions::common::result_text;
use physics_mcp_server::domains::tools::{ToolContext, ToolRegistry};
use physics_mcp_server::knowledge::KnowledgeBase;

/// Particle and nuclear physics tools over the Model Context Protocol
#[derive(Parser, Debug)]
#[command(name = "physics-mcp-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Particle and nuclear physics tools over the Model Context Protocol", long_about = None)]
struct Cli {
    /// Log level (overrides MCP_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Documents directory loaded at startup (overrides MCP_DOCUMENTS_DIR)
    #[arg(long, global = true)]
    documents: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve MCP over the configured transport (default)
    Serve,

    /// List the available tools
    Tools,

    /// Call a tool once and print its result
    Call {
        /// Tool name, e.g. calculate_lorentz_factor
        tool: String,

        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        arguments: String,

        /// Print the full result as JSON instead of its text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(dir) = cli.documents {
        config.knowledge.documents_dir = dir;
    }

    init_logging(&config.logging.level, config.logging.with_timestamps);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await.map(|_| ExitCode::SUCCESS),
        Commands::Tools => {
            for tool in ToolRegistry::get_all_tools() {
                println!(
                    "{:<32} {}",
                    tool.name,
                    tool.description.as_deref().unwrap_or_default()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Call {
            tool,
            arguments,
            json,
        } => call(config, &tool, &arguments, json),
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting {} v{}", config.server.name, config.server.version);

    let knowledge = Arc::new(preload_documents(&config));
    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::with_knowledge(config, knowledge);

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");
    Ok(())
}

fn call(config: Config, tool: &str, arguments: &str, json: bool) -> Result<ExitCode> {
    let arguments: serde_json::Value =
        serde_json::from_str(arguments).context("arguments must be a JSON object")?;

    let knowledge = Arc::new(preload_documents(&config));
    let registry = ToolRegistry::new(ToolContext::new(Arc::new(config), knowledge));

    let result = match registry.call_tool(tool, arguments) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result_text(&result).unwrap_or_default());
    }

    Ok(if result.is_error == Some(true) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Load the configured documents directory if it exists.
fn preload_documents(config: &Config) -> KnowledgeBase {
    let knowledge = KnowledgeBase::new();
    let dir = &config.knowledge.documents_dir;
    if !dir.is_dir() {
        info!("Documents directory {} not found, starting empty", dir.display());
        return knowledge;
    }
    match knowledge.load_directory(dir) {
        Ok(report) => info!(
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            "Loaded documents from {}",
            dir.display()
        ),
        Err(e) => warn!("Could not load documents from {}: {}", dir.display(), e),
    }
    knowledge
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the MCP stream.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
