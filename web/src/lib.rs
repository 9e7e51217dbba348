/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;

use axum::Router;
use axum::routing::{get, post};
use hydra_core::consts::API_PORT;
use hydra_core::types::ServerState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// The mock API router. Unmatched paths and unmatched methods on matched
/// paths both land on the permissive catch-all, so the route table keeps
/// the coordinator's first-match semantics.
pub fn app(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(endpoints::projects::list))
        .route("/api/v1/projects", get(endpoints::projects::list))
        .route(
            "/project/{project}",
            get(endpoints::projects::get)
                .post(endpoints::projects::post)
                .delete(endpoints::projects::delete),
        )
        .route("/api/jobsets", get(endpoints::jobsets::list))
        .route("/jobset/{*jobset}", get(endpoints::jobsets::get))
        .route("/build/{build}", get(endpoints::builds::get))
        .route(
            "/build/{build}/constituents",
            get(endpoints::builds::get_constituents),
        )
        .route("/search", get(endpoints::search::get))
        .route("/api/search", get(endpoints::search::get))
        .route("/login", post(endpoints::auth::post_login))
        .fallback(endpoints::fallback)
        .method_not_allowed_fallback(endpoints::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, API_PORT);
    let listener = tokio::net::TcpListener::bind(&server_url).await?;

    tracing::info!("Mock Hydra API listening on {}", server_url);

    axum::serve(listener, app(state)).await
}
