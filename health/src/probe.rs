/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use hydra_core::consts::{API_PORT, PROBE_TIMEOUT};
use hydra_core::types::Cli;
use std::fmt;

#[derive(Debug)]
pub enum ProbeError {
    Request(reqwest::Error),
    UnexpectedStatus(reqwest::StatusCode),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Request(err) => write!(f, "{}", err),
            ProbeError::UnexpectedStatus(status) => {
                write!(f, "mock API answered with status {}", status)
            }
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Request(err) => Some(err),
            ProbeError::UnexpectedStatus(_) => None,
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        ProbeError::Request(err)
    }
}

pub fn probe_url(cli: &Cli) -> String {
    format!("http://{}:{}/", cli.ip, API_PORT)
}

/// One bounded GET against the mock API root. No retries; the client
/// timeout is the only bound on how long a health check can take.
pub async fn probe_api(cli: &Cli) -> Result<(), ProbeError> {
    let client = reqwest::Client::builder().timeout(PROBE_TIMEOUT).build()?;

    let response = client.get(probe_url(cli)).send().await?;

    if response.status() == reqwest::StatusCode::OK {
        Ok(())
    } else {
        Err(ProbeError::UnexpectedStatus(response.status()))
    }
}
