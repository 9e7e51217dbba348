/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::{Path, State};
use bytes::Bytes;
use hydra_core::input::title_case;
use hydra_core::types::{Project, ServerState, StatusResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MakeProjectRequest {
    pub displayname: Option<String>,
    pub enabled: Option<bool>,
}

pub async fn list(state: State<Arc<ServerState>>) -> Json<Vec<Project>> {
    Json(state.projects.list())
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Path(project): Path<String>,
) -> WebResult<Json<Project>> {
    state
        .projects
        .get(&project)
        .map(Json)
        .ok_or_else(WebError::not_found)
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Path(project): Path<String>,
    body: Bytes,
) -> Json<Project> {
    // Anything that does not parse as a project body falls back to the
    // defaults, matching the permissive create contract.
    let request = serde_json::from_slice::<MakeProjectRequest>(&body).unwrap_or_default();

    let project = Project {
        displayname: request
            .displayname
            .unwrap_or_else(|| title_case(&project)),
        enabled: request.enabled.unwrap_or(true),
        name: project,
    };

    Json(state.projects.insert(project))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    Path(project): Path<String>,
) -> WebResult<Json<StatusResponse>> {
    if !state.projects.remove(&project) {
        return Err(WebError::not_found());
    }

    Ok(Json(StatusResponse {
        status: "deleted".to_string(),
    }))
}
