/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod input;
pub mod store;
pub mod types;

use clap::Parser;
use std::sync::Arc;
use store::ProjectStore;
use tracing_subscriber::EnvFilter;
use types::*;

pub async fn init_state() -> Arc<ServerState> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        "Starting Hydra mock on {}:{}, health check on port {}",
        cli.ip,
        consts::API_PORT,
        consts::HEALTH_PORT
    );

    Arc::new(ServerState {
        projects: ProjectStore::with_seed(),
        cli,
    })
}
