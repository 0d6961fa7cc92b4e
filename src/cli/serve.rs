use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::OutputConfig;
use crate::config::{Config, Transport};
use crate::service::ProgramService;

#[derive(Args)]
pub struct ServeArgs {
    /// Transport: stdio (default) or http
    #[arg(long, value_enum, env = "TRANSPORT")]
    transport: Option<Transport>,

    /// HTTP server port (default: 3000)
    #[arg(long, env = "PORT")]
    port: Option<u16>,
}

pub async fn run(args: ServeArgs, config: Config, output: OutputConfig) -> Result<()> {
    let transport = args.transport.unwrap_or(config.server.transport);
    let port = args.port.unwrap_or(config.server.port);

    let service = ProgramService::from_config(&config)?;
    tracing::info!(
        "Starting EduConnect server ({} transport, {} programs)",
        transport,
        service.catalog().len()
    );

    // stdout belongs to the MCP session in stdio mode
    if !output.quiet {
        eprintln!(
            "{} {}",
            "✓".green(),
            startup_message(transport, port, service.catalog().len())
        );
    }

    match transport {
        Transport::Http => crate::http::run_server(service, port).await,
        Transport::Stdio => crate::mcp::run_server(service).await,
    }
}

fn startup_message(transport: Transport, port: u16, programs: usize) -> String {
    match transport {
        Transport::Http => {
            format!("Serving {programs} programs over MCP at http://localhost:{port}/mcp")
        }
        Transport::Stdio => format!("Serving {programs} programs over MCP on stdio"),
    }
}
