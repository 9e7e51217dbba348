/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoint;
pub mod probe;

use axum::Router;
use axum::routing::get;
use hydra_core::consts::HEALTH_PORT;
use hydra_core::types::ServerState;
use std::sync::Arc;

pub fn app(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/health", get(endpoint::get_health))
        .fallback(endpoint::handle_404)
        .with_state(state)
}

pub async fn serve_health(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, HEALTH_PORT);
    let listener = tokio::net::TcpListener::bind(&server_url).await?;

    tracing::info!("Health check server listening on {}", server_url);

    axum::serve(listener, app(state)).await
}

/// Runs the health check listener on a background task so the process can
/// keep serving the mock API in the foreground. A failing listener is
/// logged, not fatal.
pub async fn start_health(state: Arc<ServerState>) -> std::io::Result<()> {
    tokio::spawn(async move {
        if let Err(err) = serve_health(state).await {
            tracing::error!("Health check server exited: {}", err);
        }
    });

    Ok(())
}
