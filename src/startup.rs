// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Startup sequence: build the configuration registry, pull cluster secrets
//! into it, then report the resolved secrets.

use crate::bootstrap::{FetchOutcome, SecretFetcher};
use crate::config::Settings;
use crate::error::Result;
use crate::kubernetes::create_client;
use crate::registry::{load_application_config, load_config_tree, PropertySource, Registry};
use crate::report::{default_entries, ReportedSecret, SecretReporter};
use kube::Client;
use std::future::Future;
use tracing::{debug, error, info, warn};

/// Build the registry from the local sources, highest priority first:
/// environment variables, the config tree, then the application config file.
///
/// Sources that cannot be loaded are logged and left out.
pub fn build_registry(settings: &Settings, environment: PropertySource) -> Registry {
    let mut registry = Registry::new();
    add_source(&mut registry, Ok(Some(environment)));
    add_source(&mut registry, load_config_tree(&settings.config_tree_dir));
    add_source(&mut registry, load_application_config(&settings.application_config));

    info!("Configuration sources: {:?}", registry.source_names());
    registry
}

fn add_source(registry: &mut Registry, source: Result<Option<PropertySource>>) {
    match source {
        Ok(Some(source)) => {
            if let Err(e) = registry.add_last(source) {
                warn!("Ignoring configuration source: {}", e);
            }
        }
        Ok(None) => {}
        Err(e) => warn!("Skipping configuration source: {}", e),
    }
}

/// Fetch the planned secrets from the cluster into the registry.
///
/// Nothing here aborts startup: a disabled fetcher, an empty plan, or an
/// unreachable cluster all leave the registry as it was.
pub async fn bootstrap_secrets(settings: &Settings, registry: &mut Registry) -> Vec<FetchOutcome> {
    bootstrap_secrets_with(settings, registry, create_client).await
}

/// Same as [`bootstrap_secrets`], with the client built by `connect`.
/// `connect` is only called when there is something to fetch.
pub async fn bootstrap_secrets_with<F, Fut>(
    settings: &Settings,
    registry: &mut Registry,
    connect: F,
) -> Vec<FetchOutcome>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Client>>,
{
    if !settings.fetch_enabled {
        info!("Kubernetes secret fetching disabled");
        return Vec::new();
    }

    let descriptors = settings.fetch_plan.descriptors(registry);
    if descriptors.is_empty() {
        info!("No Kubernetes secret sources declared, skipping fetch");
        return Vec::new();
    }

    let client = match connect().await {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to load secrets: {}", e);
            return Vec::new();
        }
    };

    debug!("Fetching {} secret sources", descriptors.len());
    SecretFetcher::new(client)
        .fetch_all(&descriptors, registry)
        .await
}

/// Log the default set of secrets once the application is ready
pub fn report_secrets(settings: &Settings, registry: &Registry) -> Vec<ReportedSecret> {
    SecretReporter::new(default_entries(settings)).report(registry)
}
