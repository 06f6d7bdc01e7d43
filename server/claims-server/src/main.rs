use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use claims_server::{create_app, AppConfig, ClaimsServer};
use logger_redacted::init_logging;
use mcp_server::{serve, StdioTransport};

/// Claims Intelligence server
#[derive(Parser, Debug)]
#[command(name = "claims-server")]
#[command(about = "Explanation of Benefit summaries over HTTP and MCP")]
struct Args {
    /// Configuration file path (TOML or YAML)
    #[arg(short, long, env = "CLAIMS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (default)
    Serve {
        /// Server bind address
        #[arg(long)]
        host: Option<String>,

        /// Server port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Speak MCP JSON-RPC over stdin/stdout
    McpStdio,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    let command = args.command.unwrap_or(Command::Serve { host: None, port: None });

    if matches!(command, Command::McpStdio) {
        config.logging.stderr = true;
    }
    init_logging(&config.logging)?;

    let server = ClaimsServer::from_config(&config).await?;

    match command {
        Command::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let addr: SocketAddr = format!("{}:{}", host, port)
                .parse()
                .with_context(|| format!("Invalid bind address {}:{}", host, port))?;

            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind to {}", addr))?;

            info!(version = env!("CARGO_PKG_VERSION"), %addr, "Claims server listening");
            axum::serve(listener, create_app(server))
                .with_graceful_shutdown(shutdown_signal())
                .await
                .context("HTTP server error")?;
        }
        Command::McpStdio => {
            info!("Serving MCP over stdio");
            serve(server.mcp.as_ref(), &mut StdioTransport::stdio()).await?;
        }
    }

    info!("Claims server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "Failed to listen for shutdown signal");
    }
}
