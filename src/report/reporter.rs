// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::FILE_UNREADABLE;
use crate::registry::Registry;
use crate::report::{Lookup, ReportEntry};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// A label and the value it resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedSecret {
    pub label: String,
    pub value: String,
}

pub struct SecretReporter {
    entries: Vec<ReportEntry>,
}

impl SecretReporter {
    pub fn new(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    /// Resolve every entry, sorted by label. Never fails: unresolved keys
    /// get their default text and unreadable files get an error description.
    /// A repeated label keeps the last entry.
    pub fn resolve(&self, registry: &Registry) -> Vec<ReportedSecret> {
        let resolved: BTreeMap<&str, String> = self
            .entries
            .iter()
            .map(|entry| (entry.label.as_str(), resolve_lookup(&entry.lookup, registry)))
            .collect();

        resolved
            .into_iter()
            .map(|(label, value)| ReportedSecret {
                label: label.to_string(),
                value,
            })
            .collect()
    }

    /// Resolve and log every entry between two banner lines
    pub fn report(&self, registry: &Registry) -> Vec<ReportedSecret> {
        log_property_sources(registry);

        let secrets = self.resolve(registry);

        info!("--- Loaded Secrets ---");
        for secret in &secrets {
            info!("{}: {}", secret.label, secret.value);
        }
        info!("----------------------");

        secrets
    }
}

fn resolve_lookup(lookup: &Lookup, registry: &Registry) -> String {
    match lookup {
        Lookup::Property { keys, default } => keys
            .iter()
            .find_map(|key| registry.get(key))
            .map(Cow::into_owned)
            .unwrap_or_else(|| default.clone()),
        Lookup::File(path) => read_secret_file(path),
    }
}

/// Read a secret file, trimming surrounding whitespace.
/// Any I/O failure is turned into a descriptive value.
pub fn read_secret_file(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_string(),
        Err(e) => format!("{}: {}", FILE_UNREADABLE, e),
    }
}

/// Dump every secret-looking key with the source that holds it
fn log_property_sources(registry: &Registry) {
    debug!("--- All Property Sources ---");
    for source in registry.sources() {
        debug!("Source: {}, keys: {}", source.name(), source.len());
        for key in source.keys() {
            let lower = key.to_lowercase();
            if !(lower.contains("secret") || lower.contains("api")) {
                continue;
            }
            match registry.source_of(key) {
                Some(winner) if winner != source.name() => {
                    debug!("Key: {} (source: {}, shadowed by {})", key, source.name(), winner)
                }
                _ => debug!(
                    "Key: {} = {} (source: {})",
                    key,
                    registry.get_or(key, ""),
                    source.name()
                ),
            }
        }
    }
    debug!("----------------------------");
}
