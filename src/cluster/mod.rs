// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster variant detection and public hostname resolution.

pub mod hostname;
pub mod variant;

pub use hostname::HostnameResolver;
pub use variant::{ClusterFlags, ClusterVariant, VariantDetector};
