/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::Path;
use hydra_core::types::{Build, Constituent};

use crate::error::{WebError, WebResult};

/// The three synthetic builds: one finished successfully, one still
/// running, one failed. Nothing is stored; lookups are computed per
/// request.
pub fn find_build(id: i64) -> Option<Build> {
    match id {
        123456 => Some(Build {
            id,
            nixname: "hello-2.12.1".to_string(),
            finished: true,
            buildstatus: Some(0),
            job: "hello".to_string(),
            project: "nixpkgs".to_string(),
            jobset: "trunk".to_string(),
        }),
        123459 => Some(Build {
            id,
            nixname: "hello-in-progress".to_string(),
            finished: false,
            buildstatus: None,
            job: "hello".to_string(),
            project: "nixpkgs".to_string(),
            jobset: "trunk".to_string(),
        }),
        123460 => Some(Build {
            id,
            nixname: "hello-failed".to_string(),
            finished: true,
            buildstatus: Some(1),
            job: "hello".to_string(),
            project: "nixpkgs".to_string(),
            jobset: "trunk".to_string(),
        }),
        _ => None,
    }
}

fn parse_build_id(raw: &str) -> Result<i64, WebError> {
    raw.parse::<i64>().map_err(|_| WebError::invalid_build_id())
}

pub async fn get(Path(build): Path<String>) -> WebResult<Json<Build>> {
    let build = parse_build_id(&build)?;

    find_build(build).map(Json).ok_or_else(WebError::not_found)
}

pub async fn get_constituents(Path(build): Path<String>) -> WebResult<Json<Vec<Constituent>>> {
    let build = parse_build_id(&build)?;

    if find_build(build).is_none() {
        return Err(WebError::not_found());
    }

    Ok(Json(vec![
        Constituent {
            id: 123457,
            nixname: "dependency-1".to_string(),
        },
        Constituent {
            id: 123458,
            nixname: "dependency-2".to_string(),
        },
    ]))
}
