//! BitBadges MCP server CLI
//!
//! `serve` runs the tool gateway over stdio (the default, for MCP clients such
//! as Claude Desktop) or HTTP/SSE. `generate` refreshes the compiled-in tool
//! routes from the BitBadges OpenAPI document.
//!
//! Logs always go to stderr: in stdio mode stdout carries JSON-RPC only.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use bitbadges_mcp::generate::{generate, GenerateOptions};
use bitbadges_mcp::tools::{Catalog, CatalogRouter, Gateway, GeneratedRouter};
use bitbadges_mcp::{McpServer, ServerMode};
use openapi_parser::BITBADGES_OPENAPI_URL;

/// BitBadges MCP - the BitBadges API as Model Context Protocol tools
#[derive(Parser, Debug)]
#[command(name = "bitbadges-mcp")]
#[command(version)]
#[command(about = "BitBadges API exposed as MCP tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the tool catalog
    Serve(ServeArgs),
    /// Regenerate tool routes from the OpenAPI document
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Run in stdio mode (for MCP clients like Claude Desktop)
    #[arg(long, conflicts_with = "http")]
    stdio: bool,

    /// Run in HTTP mode (JSON-RPC on /mcp, SSE on /sse)
    #[arg(long)]
    http: bool,

    /// Port for HTTP server
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Serve a catalog JSON file instead of the compiled-in routes
    #[arg(long)]
    spec: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// OpenAPI document URL
    #[arg(long, default_value = BITBADGES_OPENAPI_URL)]
    url: String,

    /// Read the OpenAPI document from a local file instead of the URL
    #[arg(long)]
    from_file: Option<PathBuf>,

    /// Generated Rust module to overwrite
    #[arg(long, default_value = "crates/mcp-server/src/generated.rs")]
    output: PathBuf,

    /// Also save the raw OpenAPI document here
    #[arg(long)]
    save_spec: Option<PathBuf>,

    /// Also write the tool catalog as JSON here
    #[arg(long)]
    catalog_json: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(args).await,
        Command::Generate(args) => run_generate(args).await,
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let gateway = match &args.spec {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog {}", path.display()))?;
            let catalog = Catalog::from_json(&text)
                .with_context(|| format!("Invalid catalog {}", path.display()))?;
            info!("Loaded {} tools from {}", catalog.len(), path.display());
            Gateway::new(CatalogRouter::new(catalog))?
        }
        None => Gateway::new(GeneratedRouter::new().context("Compiled-in catalog is invalid")?)?,
    };
    info!("Serving {} tools", gateway.list().len());

    // stdio unless HTTP is explicitly requested
    let mode = if args.http && !args.stdio {
        ServerMode::Http { port: args.port }
    } else {
        ServerMode::Stdio
    };

    McpServer::new(gateway).with_mode(mode).run().await
}

async fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut options = GenerateOptions::new(args.output);
    options.url = args.url;
    options.spec_file = args.from_file;
    options.save_spec = args.save_spec;
    options.catalog_json = args.catalog_json;

    let summary = generate(&options).await.context("Tool generation failed")?;
    info!(
        "Generated {} tools from {} operations into {}",
        summary.tools,
        summary.operations,
        options.output.display()
    );
    Ok(())
}
