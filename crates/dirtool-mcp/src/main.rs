//! dirtool-mcp entry point: serve the Directory API tool catalog over stdio.

use anyhow::Result;
use clap::Parser;
use dirtool_core::ApiConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dirtool-mcp", version, about = "MCP stdio server for the Admin SDK Directory API")]
struct Cli {
    /// Base URL of the Directory API (overrides DIRTOOL_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// OAuth2 bearer token (overrides DIRTOOL_BEARER_TOKEN)
    #[arg(long)]
    bearer_token: Option<String>,

    /// API key (overrides DIRTOOL_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for JSON-RPC
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = ApiConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(token) = cli.bearer_token {
        config.bearer_token = Some(token);
    }
    if let Some(key) = cli.api_key {
        config.api_key = Some(key);
    }

    info!("dirtool-mcp v{}", env!("CARGO_PKG_VERSION"));

    dirtool_mcp::serve_stdio(config).await?;
    Ok(())
}
