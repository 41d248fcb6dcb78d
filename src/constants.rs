// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Marker API groups used for cluster variant detection
pub mod api_groups {
    /// Present on OpenShift clusters of any version
    pub const ROUTE: &str = "route.openshift.io";
    /// Present on OpenShift v4 clusters
    pub const CONFIG: &str = "config.openshift.io";
}

/// Environment variables read by this crate
pub mod env_vars {
    /// In-cluster address of the Kubernetes API server
    pub const API_SERVER_ADDR: &str = "KUBERNETES_PORT_443_TCP_ADDR";
    /// When "true", variant detection skips the cluster and reports OpenShift v3
    pub const MOCK_API: &str = "MOCK_API";
}

/// API server endpoints queried during hostname resolution
pub mod endpoints {
    /// Unauthenticated OAuth metadata document served by OpenShift v3
    pub const OAUTH_WELL_KNOWN: &str = "/.well-known/oauth-authorization-server";
    /// Cluster-scoped Infrastructure resource served by OpenShift v4
    pub const INFRASTRUCTURE: &str = "/apis/config.openshift.io/v1/infrastructures/cluster";
}

/// Mounted service account paths
pub mod service_account {
    /// Bearer token used for the authenticated Infrastructure read
    pub const TOKEN_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/token";
}

/// Data keys expected in a proxy credentials Secret
pub mod secret_keys {
    pub const USER: &str = "user";
    pub const PASSWORD: &str = "password";
}
