/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hydra_core::consts::API_PORT;
use hydra_core::types::ServerState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::probe;

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthyResponse {
    pub status: String,
    pub hydra: String,
    pub port: u16,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Probes the mock API once and reflects the outcome. Every probe failure
/// collapses into the single unhealthy category.
pub async fn get_health(state: State<Arc<ServerState>>) -> Response {
    match probe::probe_api(&state.cli).await {
        Ok(()) => Json(HealthyResponse {
            status: "healthy".to_string(),
            hydra: "running".to_string(),
            port: API_PORT,
        })
        .into_response(),
        Err(err) => {
            tracing::warn!("Mock API probe failed: {}", err);

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyResponse {
                    status: "unhealthy".to_string(),
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn handle_404() -> StatusCode {
    StatusCode::NOT_FOUND
}
