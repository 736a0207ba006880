// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SecretSourceError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to configure Kubernetes client: {0}")]
    ClientConfigError(String),

    #[error("Failed to decode secret {secret} key '{key}': {reason}")]
    DecodeError {
        secret: String,
        key: String,
        reason: String,
    },

    #[error("Configuration source '{0}' is already registered")]
    DuplicateSource(String),

    #[error("Failed to read config tree {path}: {source}")]
    ConfigTreeError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load application config: {0}")]
    ApplicationConfigError(String),
}

pub type Result<T> = std::result::Result<T, SecretSourceError>;
