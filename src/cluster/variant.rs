// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! OpenShift variant detection via API group discovery.

use kube::Client;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::constants::api_groups;
use crate::error::Result;

/// Cluster classification derived from marker API groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterVariant {
    Kubernetes,
    OpenShiftV3,
    OpenShiftV4,
}

/// Marker presence reported by a detection probe.
///
/// The two flags are independent: a cluster exposing `config.openshift.io`
/// without `route.openshift.io` is reported as `(false, true)` and left to
/// the caller to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClusterFlags {
    pub openshift: bool,
    pub openshift4: bool,
}

impl ClusterFlags {
    /// Collapse the flags into a single variant. The v4 marker wins when
    /// both are present.
    pub fn variant(&self) -> ClusterVariant {
        if self.openshift4 {
            ClusterVariant::OpenShiftV4
        } else if self.openshift {
            ClusterVariant::OpenShiftV3
        } else {
            ClusterVariant::Kubernetes
        }
    }
}

/// Probes the cluster for OpenShift marker API groups and caches the
/// answer. The variant cannot change while the operator runs, so callers
/// construct one detector and share it.
pub struct VariantDetector {
    client: Client,
    mock_api: bool,
    detected: OnceCell<ClusterFlags>,
}

impl VariantDetector {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            mock_api: config.mock_api,
            detected: OnceCell::new(),
        }
    }

    /// Detect the cluster variant, memoizing the first successful probe.
    /// Failed probes are not cached; the next call starts over.
    pub async fn detect(&self) -> Result<ClusterFlags> {
        self.detected
            .get_or_try_init(|| self.probe())
            .await
            .map(|flags| *flags)
    }

    #[instrument(skip(self))]
    async fn probe(&self) -> Result<ClusterFlags> {
        if self.mock_api {
            info!("MOCK_API set, reporting an OpenShift v3 cluster without probing");
            return Ok(ClusterFlags {
                openshift: true,
                openshift4: false,
            });
        }

        let group_list = self.client.list_api_groups().await?;

        let mut flags = ClusterFlags::default();
        for group in &group_list.groups {
            if group.name == api_groups::ROUTE {
                flags.openshift = true;
            }
            if group.name == api_groups::CONFIG {
                flags.openshift4 = true;
            }
        }

        debug!("Detected cluster flags: {:?}", flags);
        Ok(flags)
    }
}
