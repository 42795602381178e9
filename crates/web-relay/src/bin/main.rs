//! BitBadges web relay CLI

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use web_relay::{AppState, McpRelay, Supervisor, SupervisorConfig, WebServer};

/// Chat with the BitBadges API from a browser, through the MCP server
#[derive(Parser, Debug)]
#[command(name = "bitbadges-web")]
#[command(version)]
struct Cli {
    /// Port for the web interface
    #[arg(long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// MCP server executable
    #[arg(long, default_value = "bitbadges-mcp")]
    server_command: String,

    /// Argument for the MCP server, repeatable (default: serve --stdio)
    #[arg(long = "server-arg")]
    server_args: Vec<String>,

    /// Directory of static front-end files
    #[arg(long, default_value = "public")]
    public_dir: PathBuf,

    /// Delay before restarting an exited MCP server
    #[arg(long, default_value_t = 2000)]
    restart_delay_ms: u64,

    /// Per-request timeout for relayed calls
    #[arg(long, default_value_t = 30)]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let relay = Arc::new(McpRelay::new(Duration::from_secs(cli.request_timeout_secs)));

    let mut config = SupervisorConfig::new(cli.server_command);
    if !cli.server_args.is_empty() {
        config.args = cli.server_args;
    }
    config.restart_delay = Duration::from_millis(cli.restart_delay_ms);
    let supervisor = tokio::spawn(Supervisor::new(config, relay.clone()).run());

    let server = WebServer::new(AppState::new(relay), cli.public_dir, cli.port);
    let result = server
        .run(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down...");
        })
        .await;

    // Dropping the supervisor future kills the child
    supervisor.abort();
    let _ = supervisor.await;

    result
}
