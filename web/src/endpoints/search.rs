/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use hydra_core::types::{BuildSummary, Project, SearchResponse};

/// Search ignores its query and always answers with the same composite
/// result: one build and one project, independent of the store.
pub async fn get() -> Json<SearchResponse> {
    Json(SearchResponse {
        builds: vec![BuildSummary {
            id: 123456,
            nixname: "hello-2.12.1".to_string(),
            job: "hello".to_string(),
            project: "nixpkgs".to_string(),
            jobset: "trunk".to_string(),
        }],
        projects: vec![Project {
            name: "nixpkgs".to_string(),
            displayname: "Nixpkgs".to_string(),
            enabled: true,
        }],
    })
}
