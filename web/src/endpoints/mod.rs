/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod builds;
pub mod jobsets;
pub mod projects;
pub mod search;

use axum::Json;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use hydra_core::types::StatusResponse;

/// Catch-all for requests no route claims. The coordinator being mocked
/// answers unknown paths with a generic success body per method, so the
/// same handler also backs the method-not-allowed fallback.
pub async fn fallback(method: Method) -> Response {
    let status = match method.as_str() {
        "GET" => "ok",
        "POST" => "created",
        "PUT" => "updated",
        "DELETE" => "deleted",
        _ => return StatusCode::METHOD_NOT_ALLOWED.into_response(),
    };

    Json(StatusResponse {
        status: status.to_string(),
    })
    .into_response()
}
