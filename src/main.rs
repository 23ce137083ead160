//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration from the environment, and starts
//! the server with the selected transport. The only CLI surface is the
//! `--http` flag; everything else comes from environment variables.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use dsiprouter_mcp::core::{Config, McpServer, TransportConfig, TransportService};

#[derive(Parser)]
#[command(name = "dsiprouter-mcp")]
#[command(about = "MCP server for the dSIPRouter REST API")]
#[command(version)]
struct Cli {
    /// Host the tool surface over streamable HTTP instead of STDIO
    #[arg(long)]
    http: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment
    let mut config = Config::from_env();
    if cli.http && config.transport.is_stdio() {
        config.transport = TransportConfig::http();
    }

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("dSIPRouter target: {}", config.dsiprouter.base_url);

    // Create the MCP server
    let server = McpServer::new(config.clone());

    info!("Server initialized");

    // Create and run the transport service
    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level, writing to stderr so
/// STDIO transport framing stays clean.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
