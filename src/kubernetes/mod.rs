// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes object helpers: secret reads and deployment inspection.

pub mod deployments;
pub mod secrets;

pub use deployments::{deployment_env, deployment_env_var_source};
pub use secrets::read_proxy_credentials;
