/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use hydra_core::consts::{ADMIN_PASSWORD, ADMIN_USERNAME, SESSION_COOKIE};
use hydra_core::types::User;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Accepts credentials as a URL-encoded form or as JSON. A form body is
/// recognized by its `username=` parameter; everything else must be JSON.
pub async fn post_login(body: Bytes) -> WebResult<Response> {
    if body.is_empty() {
        return Err(WebError::missing_credentials());
    }

    let request = if String::from_utf8_lossy(&body).contains("username=") {
        parse_form_credentials(&body)
    } else {
        serde_json::from_slice::<LoginRequest>(&body)
            .map_err(|err| WebError::InternalServerError(err.to_string()))?
    };

    if request.username.as_deref() != Some(ADMIN_USERNAME)
        || request.password.as_deref() != Some(ADMIN_PASSWORD)
    {
        return Err(WebError::unauthorized());
    }

    let user = User {
        username: ADMIN_USERNAME.to_string(),
        fullname: "Admin".to_string(),
        emailaddress: "admin@example.com".to_string(),
        roles: vec!["admin".to_string()],
    };

    Ok(([(header::SET_COOKIE, SESSION_COOKIE)], Json(user)).into_response())
}

fn parse_form_credentials(body: &[u8]) -> LoginRequest {
    let mut request = LoginRequest::default();

    for (key, value) in form_urlencoded::parse(body) {
        match key.as_ref() {
            "username" => request.username = Some(value.into_owned()),
            "password" => request.password = Some(value.into_owned()),
            _ => {}
        }
    }

    request
}
