// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::env;

use crate::constants::env_vars;

/// Helper configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// In-cluster address of the API server, when exposed to the pod.
    /// Only hostname resolution needs it.
    pub api_server_address: Option<String>,
    /// Skip cluster probing and report an OpenShift v3 cluster, for
    /// environments without real cluster access
    pub mock_api: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let api_server_address = env::var(env_vars::API_SERVER_ADDR).ok();
        let mock_api: bool = env::var(env_vars::MOCK_API)
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);

        Config {
            api_server_address,
            mock_api,
        }
    }
}
