// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} - {status}")]
    BadStatus { url: String, status: String },

    #[error("Failed to read service account token: {0}")]
    TokenFile(#[from] std::io::Error),

    #[error("Unexpected API server response: {0}")]
    UnexpectedResponse(String),

    #[error("{0} environment variable not set")]
    MissingEnv(&'static str),

    #[error("Secret {name} has no data")]
    SecretNoData { name: String },

    #[error("Key {key} not found in secret {name}")]
    SecretKeyMissing { name: String, key: String },

    #[error("Value for key {key} in secret {name} is not valid UTF-8")]
    SecretInvalidUtf8 { name: String, key: String },

    #[error("Proxy host {0} has no scheme, cannot embed credentials")]
    InvalidProxyHost(String),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
