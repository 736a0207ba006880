// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Config-tree sources: one configuration key per file in a directory.
//!
//! Kubernetes mounts Secret and ConfigMap volumes as a directory holding one
//! file per key, linked through hidden `..data` entries. Hidden entries are
//! skipped, nested directories produce dotted keys (`dir/file` -> `dir.file`).

use crate::constants::sources::CONFIG_TREE_PREFIX;
use crate::error::{Result, SecretSourceError};
use crate::registry::PropertySource;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Load a config tree rooted at `dir`.
///
/// Returns `Ok(None)` when the directory does not exist.
#[instrument]
pub fn load_config_tree(dir: &Path) -> Result<Option<PropertySource>> {
    if !dir.is_dir() {
        debug!("Config tree {} not present, skipping", dir.display());
        return Ok(None);
    }

    let mut properties = Vec::new();
    collect_dir(dir, None, &mut properties)?;
    let source =
        PropertySource::from_pairs(format!("{}{}", CONFIG_TREE_PREFIX, dir.display()), properties);

    debug!(
        "Loaded {} keys from config tree {}",
        source.len(),
        dir.display()
    );
    Ok(Some(source))
}

fn collect_dir(
    dir: &Path,
    prefix: Option<&str>,
    properties: &mut Vec<(String, String)>,
) -> Result<()> {
    let io_err = |path: &Path| {
        let path = path.display().to_string();
        move |e: std::io::Error| SecretSourceError::ConfigTreeError { path, source: e }
    };

    let mut entries = fs::read_dir(dir)
        .map_err(io_err(dir))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(io_err(dir))?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let Ok(name) = entry.file_name().into_string() else {
            debug!("Skipping non-unicode entry in {}", dir.display());
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        let key = match prefix {
            Some(p) => format!("{}.{}", p, name),
            None => name,
        };
        let path = entry.path();
        // Follows symlinks, which is how mounted volumes expose their files
        let metadata = fs::metadata(&path).map_err(io_err(&path))?;

        if metadata.is_dir() {
            collect_dir(&path, Some(&key), properties)?;
        } else if metadata.is_file() {
            let bytes = fs::read(&path).map_err(io_err(&path))?;
            let value = String::from_utf8_lossy(&bytes);
            properties.push((key, strip_trailing_newline(&value).to_string()));
        }
    }

    Ok(())
}

fn strip_trailing_newline(value: &str) -> &str {
    value
        .strip_suffix("\r\n")
        .or_else(|| value.strip_suffix('\n'))
        .unwrap_or(value)
}
