use anyhow::Result;
use clap::Parser;

mod catalog;
mod cli;
mod config;
mod enrollment;
mod http;
mod mcp;
mod search;
mod service;
mod summary;
mod types;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries MCP traffic in stdio mode, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(cli.log_level().into())
                .from_env_lossy(),
        )
        .init();

    cli.run().await
}
