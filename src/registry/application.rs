// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! YAML application config, queried by path expression.
//!
//! ```yaml
//! kubernetes:
//!   secrets:
//!     sources:
//!       - name: secret-app
//!         namespace: secret-example
//! ```
//!
//! answers `kubernetes.secrets.sources[0].name` and
//! `kubernetes.secrets.sources[0].namespace`.

use crate::constants::sources::APPLICATION_PREFIX;
use crate::error::{Result, SecretSourceError};
use crate::registry::PropertySource;
use config::{Config, File, FileFormat};
use std::path::Path;
use tracing::{debug, instrument};

/// Load the application config at `path` as YAML, whatever its extension.
///
/// Returns `Ok(None)` when the file does not exist.
#[instrument]
pub fn load_application_config(path: &Path) -> Result<Option<PropertySource>> {
    if !path.exists() {
        debug!("Application config {} not present, skipping", path.display());
        return Ok(None);
    }

    let config = Config::builder()
        .add_source(
            File::from(path.to_path_buf())
                .format(FileFormat::Yaml)
                .required(true),
        )
        .build()
        .map_err(|e| {
            SecretSourceError::ApplicationConfigError(format!(
                "Failed to load {}: {}",
                path.display(),
                e
            ))
        })?;

    let source =
        PropertySource::from_config(format!("{}{}", APPLICATION_PREFIX, path.display()), config);
    debug!("Loaded {} top-level keys from {}", source.len(), path.display());

    Ok(Some(source))
}

/// Parse YAML text into a source
pub fn parse_application_config(name: impl Into<String>, yaml: &str) -> Result<PropertySource> {
    let config = Config::builder()
        .add_source(File::from_str(yaml, FileFormat::Yaml))
        .build()
        .map_err(|e| {
            SecretSourceError::ApplicationConfigError(format!("Failed to parse YAML: {}", e))
        })?;

    Ok(PropertySource::from_config(name, config))
}
