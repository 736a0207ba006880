// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::bootstrap::{FetchPlan, SecretSourceDescriptor};
use crate::constants::{fetch, paths};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Application settings loaded from environment variables
#[derive(Debug, Clone)]
pub struct Settings {
    /// Whether secrets are fetched from the Kubernetes API at startup
    pub fetch_enabled: bool,
    /// Which secrets the bootstrap fetcher looks for
    pub fetch_plan: FetchPlan,
    pub application_config: PathBuf,
    pub config_tree_dir: PathBuf,
    /// Secret file mounted from a Kubernetes Secret volume
    pub volume_secret_file: PathBuf,
    /// Secret file written by a sidecar (e.g. a Vault agent)
    pub vault_secret_file: PathBuf,
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch_enabled: bool = lookup("K8S_FETCH_ENABLED")
            .unwrap_or_else(|| "true".to_string())
            .parse()
            .context("K8S_FETCH_ENABLED must be 'true' or 'false'")?;

        let fetch_plan = match lookup("SECRET_SOURCES_PREFIX").filter(|p| !p.is_empty()) {
            Some(prefix) => FetchPlan::Discovered { prefix },
            None => FetchPlan::Fixed(SecretSourceDescriptor::new(
                lookup("K8S_SECRET_NAME").unwrap_or_else(|| fetch::DEFAULT_SECRET_NAME.to_string()),
                lookup("K8S_SECRET_NAMESPACE")
                    .unwrap_or_else(|| fetch::DEFAULT_SECRET_NAMESPACE.to_string()),
            )),
        };

        let path = |key: &str, default: &str| {
            PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()))
        };

        Ok(Settings {
            fetch_enabled,
            fetch_plan,
            application_config: path("APPLICATION_CONFIG", paths::APPLICATION_CONFIG),
            config_tree_dir: path("CONFIG_TREE_DIR", paths::CONFIG_TREE_DIR),
            volume_secret_file: path("VOLUME_SECRET_FILE", paths::VOLUME_SECRET_FILE),
            vault_secret_file: path("VAULT_SECRET_FILE", paths::VAULT_SECRET_FILE),
        })
    }
}
