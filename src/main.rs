//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging, loads the allocation data and
//! starts the server with the configured transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use allocation_mcp_server::core::{Config, McpServer, TransportService};
use allocation_mcp_server::domains::allocation::{DataLoader, SharedRegistry};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let registry = DataLoader::new(&config.data.data_dir).load();
    let allocations = SharedRegistry::new(registry).into_service();

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config, allocations);

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` directives are honored; `MCP_LOG_LEVEL` sets the default level.
/// Output goes to stderr so stdout stays free for the stdio transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();
}
