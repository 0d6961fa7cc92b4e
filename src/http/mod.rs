//! HTTP server for EduConnect.
//!
//! Serves the MCP streamable HTTP endpoint at `/mcp` for remote agents, plus
//! a small REST API over the same catalog for non-MCP consumers.

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::mcp::EduConnectMcpServer;
use crate::service::ProgramService;

/// Shared application state for HTTP handlers
pub struct AppState {
    pub service: ProgramService,
}

/// Build the full application router: REST routes plus the MCP endpoint
pub fn app(service: ProgramService) -> axum::Router {
    let mcp_service = {
        let service = service.clone();
        StreamableHttpService::new(
            move || Ok(EduConnectMcpServer::new(service.clone())),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig::default(),
        )
    };

    let state = Arc::new(AppState { service });

    handlers::router(state)
        .nest_service("/mcp", mcp_service)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server on the given port
pub async fn run_server(service: ProgramService, port: u16) -> Result<()> {
    let app = app(service);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("EduConnect HTTP server listening on {}", addr);
    tracing::info!("MCP endpoint: http://localhost:{}/mcp", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down HTTP server");
}
