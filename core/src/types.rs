/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::store::ProjectStore;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "HydraMock", display_name = "Hydra Mock", bin_name = "hydra-mock-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "HYDRA_MOCK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "HYDRA_MOCK_IP", default_value = "127.0.0.1")]
    pub ip: String,
}

#[derive(Debug)]
pub struct ServerState {
    pub cli: Cli,
    pub projects: ProjectStore,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub displayname: String,
    pub enabled: bool,
}

/// The one jobset the mock knows about. `enabled` is numeric on the wire,
/// unlike the boolean on projects.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Jobset {
    pub name: String,
    pub project: String,
    pub enabled: i64,
}

/// `buildstatus` serializes as JSON null while a build is running, so it
/// must not be skipped when absent.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Build {
    pub id: i64,
    pub nixname: String,
    pub finished: bool,
    pub buildstatus: Option<i64>,
    pub job: String,
    pub project: String,
    pub jobset: String,
}

/// Reduced build shape used by search results.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BuildSummary {
    pub id: i64,
    pub nixname: String,
    pub job: String,
    pub project: String,
    pub jobset: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Constituent {
    pub id: i64,
    pub nixname: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub username: String,
    pub fullname: String,
    pub emailaddress: String,
    pub roles: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchResponse {
    pub builds: Vec<BuildSummary>,
    pub projects: Vec<Project>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}
