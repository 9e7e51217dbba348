/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::Path;
use hydra_core::types::Jobset;

use crate::error::{WebError, WebResult};

fn trunk_jobset() -> Jobset {
    Jobset {
        name: "trunk".to_string(),
        project: "nixpkgs".to_string(),
        enabled: 1,
    }
}

pub async fn list() -> Json<Vec<Jobset>> {
    Json(vec![trunk_jobset()])
}

/// Wildcard over everything below `/jobset/`; only the exact
/// `nixpkgs/trunk` remainder resolves, every other jobset path is unknown.
pub async fn get(Path(jobset): Path<String>) -> WebResult<Json<Jobset>> {
    match jobset.split_once('/') {
        Some(("nixpkgs", "trunk")) => Ok(Json(trunk_jobset())),
        _ => Err(WebError::not_found()),
    }
}
