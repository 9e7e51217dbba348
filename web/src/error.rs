/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hydra_core::types::ErrorResponse;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    InternalServerError(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for WebError {}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            WebError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::InternalServerError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

// Helper constructors for the error bodies the API answers with.
impl WebError {
    pub fn not_found() -> Self {
        WebError::NotFound("not found".to_string())
    }

    pub fn invalid_build_id() -> Self {
        WebError::BadRequest("invalid build id".to_string())
    }

    pub fn unauthorized() -> Self {
        WebError::Unauthorized("unauthorized".to_string())
    }

    pub fn missing_credentials() -> Self {
        WebError::BadRequest("missing credentials".to_string())
    }
}
