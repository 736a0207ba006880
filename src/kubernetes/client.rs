// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from ambient credentials

use crate::error::{Result, SecretSourceError};
use kube::{Client, Config as KConfig};
use tracing::{debug, info, instrument};

/// Create a Kubernetes client from whatever credentials are discoverable.
///
/// Tries the local kubeconfig (`KUBECONFIG` or `~/.kube/config`) first and
/// falls back to the in-cluster service account token and CA bundle.
#[instrument]
pub async fn create_client() -> Result<Client> {
    let config = KConfig::infer()
        .await
        .map_err(|e| SecretSourceError::ClientConfigError(format!("Failed to infer config: {}", e)))?;

    debug!(
        "Inferred cluster config: url={}, default_namespace={}",
        config.cluster_url, config.default_namespace
    );

    let client = Client::try_from(config)
        .map_err(|e| SecretSourceError::ClientConfigError(format!("Failed to create client: {}", e)))?;

    info!("Created Kubernetes client");
    Ok(client)
}
