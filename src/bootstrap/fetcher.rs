// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Loads Kubernetes secrets as highest-priority configuration sources.

use crate::bootstrap::SecretSourceDescriptor;
use crate::error::Result;
use crate::kubernetes::{decode_secret_data, find_secret_by_name, list_namespace_secrets};
use crate::registry::{PropertySource, Registry};
use kube::Client;
use tracing::{error, info, instrument, warn};

/// Result of fetching one descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The secret was added to the registry as `source`
    Loaded { source: String, keys: usize },
    /// No secret with that name, or the secret carries no data
    NotFound,
    /// The fetch failed; the registry is unchanged
    Failed { reason: String },
}

pub struct SecretFetcher {
    client: Client,
}

impl SecretFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch every descriptor in order, prepending each loaded secret to the
    /// registry. The last one loaded ends up with the highest priority.
    ///
    /// Failures are logged and never abort the remaining fetches.
    pub async fn fetch_all(
        &self,
        descriptors: &[SecretSourceDescriptor],
        registry: &mut Registry,
    ) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            outcomes.push(self.fetch_into(descriptor, registry).await);
        }
        outcomes
    }

    #[instrument(
        skip(self, descriptor, registry),
        fields(
            secret = %format!("{}/{}", descriptor.namespace, descriptor.name),
            index = ?descriptor.index
        )
    )]
    pub async fn fetch_into(
        &self,
        descriptor: &SecretSourceDescriptor,
        registry: &mut Registry,
    ) -> FetchOutcome {
        let source = match self.load(descriptor).await {
            Ok(Some(source)) => source,
            Ok(None) => {
                info!(
                    "Secret {} not found in namespace {}",
                    descriptor.name, descriptor.namespace
                );
                return FetchOutcome::NotFound;
            }
            Err(e) => {
                error!(
                    "Failed to load secret {}/{}: {}",
                    descriptor.namespace, descriptor.name, e
                );
                return FetchOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let name = source.name().to_string();
        let keys = source.len();
        if let Err(e) = registry.add_first(source) {
            warn!("Skipping secret {}/{}: {}", descriptor.namespace, descriptor.name, e);
            return FetchOutcome::Failed {
                reason: e.to_string(),
            };
        }

        info!(
            "Successfully loaded secret {}/{} from API ({} keys)",
            descriptor.namespace, descriptor.name, keys
        );
        FetchOutcome::Loaded { source: name, keys }
    }

    /// List the namespace and turn the matching secret into a source.
    /// A secret without data counts as not found.
    async fn load(&self, descriptor: &SecretSourceDescriptor) -> Result<Option<PropertySource>> {
        let secrets = list_namespace_secrets(&self.client, &descriptor.namespace).await?;

        let Some(secret) = find_secret_by_name(secrets, &descriptor.name) else {
            return Ok(None);
        };
        let Some(data) = decode_secret_data(&secret)? else {
            return Ok(None);
        };

        Ok(Some(PropertySource::from_pairs(
            descriptor.source_name(),
            data,
        )))
    }
}
