// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Public API hostname resolution for OpenShift clusters.
//!
//! OpenShift v3 publishes its public URL as the `issuer` of an
//! unauthenticated OAuth metadata document; v4 exposes it on the
//! cluster-scoped Infrastructure resource, which requires a service
//! account bearer token to read.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::constants::{endpoints, env_vars, service_account};
use crate::error::{Result, ScoutError};

/// OAuth metadata served by the v3 well-known endpoint.
#[derive(Debug, Deserialize)]
struct OauthMetadata {
    issuer: String,
}

/// Subset of the v4 Infrastructure resource carrying the public API URL.
#[derive(Debug, Deserialize)]
struct Infrastructure {
    status: Option<InfrastructureStatus>,
}

#[derive(Debug, Deserialize)]
struct InfrastructureStatus {
    #[serde(rename = "apiServerURL")]
    api_server_url: Option<String>,
}

/// Resolves the cluster's public API hostname.
///
/// Owns an HTTP client with certificate verification disabled: in-cluster
/// endpoints present self-signed certificates, and the relaxation must not
/// leak into other clients in the process.
#[derive(Debug)]
pub struct HostnameResolver {
    http: reqwest::Client,
    api_server_url: String,
    token_path: PathBuf,
}

impl HostnameResolver {
    /// Build a resolver against an explicit API server base URL and
    /// service account token path.
    pub fn new(api_server_url: impl Into<String>, token_path: impl Into<PathBuf>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            http,
            api_server_url: api_server_url.into(),
            token_path: token_path.into(),
        })
    }

    /// Build a resolver for the in-cluster API server endpoint, using the
    /// mounted service account token for authenticated calls.
    pub fn from_env(config: &Config) -> Result<Self> {
        let address = config
            .api_server_address
            .as_deref()
            .ok_or(ScoutError::MissingEnv(env_vars::API_SERVER_ADDR))?;

        Self::new(format!("https://{}", address), service_account::TOKEN_PATH)
    }

    /// Resolve the public hostname, dispatching on the detected variant.
    /// Nothing is retried or cached; every call queries the cluster.
    pub async fn resolve(&self, openshift4: bool) -> Result<String> {
        if openshift4 {
            self.resolve_v4().await
        } else {
            self.resolve_v3().await
        }
    }

    #[instrument(skip(self))]
    async fn resolve_v3(&self) -> Result<String> {
        let url = format!("{}{}", self.api_server_url, endpoints::OAUTH_WELL_KNOWN);
        debug!("Fetching OAuth metadata from {}", url);

        let metadata: OauthMetadata = self.http.get(&url).send().await?.json().await?;
        Ok(metadata.issuer)
    }

    #[instrument(skip(self))]
    async fn resolve_v4(&self) -> Result<String> {
        let token = tokio::fs::read_to_string(&self.token_path).await?;
        let url = format!("{}{}", self.api_server_url, endpoints::INFRASTRUCTURE);
        debug!("Fetching Infrastructure resource from {}", url);

        let response = self.http.get(&url).bearer_auth(token.trim()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoutError::BadStatus {
                url,
                status: status.to_string(),
            });
        }

        // Shape deviations here usually mean an API version mismatch, so
        // the raw body goes into the error for diagnosis.
        let body = response.text().await?;
        let infrastructure: Infrastructure = serde_json::from_str(&body)
            .map_err(|_| ScoutError::UnexpectedResponse(body.clone()))?;

        infrastructure
            .status
            .and_then(|s| s.api_server_url)
            .ok_or(ScoutError::UnexpectedResponse(body))
    }
}
