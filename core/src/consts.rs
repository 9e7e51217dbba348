/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::time::Duration;

pub const API_PORT: u16 = 3000;
pub const HEALTH_PORT: u16 = 8080;

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";

pub const SESSION_COOKIE: &str = "hydra_session=mock_session_token; Path=/; HttpOnly";
