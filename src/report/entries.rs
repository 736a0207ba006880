// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::config::Settings;
use crate::constants::{keys, NOT_SET};
use std::path::PathBuf;

/// Where a reported secret's value comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// First key the registry resolves, else `default`
    Property { keys: Vec<String>, default: String },
    /// Contents of a file, read directly from disk
    File(PathBuf),
}

impl Lookup {
    pub fn property(keys: &[&str]) -> Self {
        Lookup::Property {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            default: NOT_SET.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub label: String,
    pub lookup: Lookup,
}

impl ReportEntry {
    pub fn new(label: impl Into<String>, lookup: Lookup) -> Self {
        Self {
            label: label.into(),
            lookup,
        }
    }
}

/// The secrets reported at startup, one per delivery mechanism.
///
/// Alternative key names for the same mechanism are tried in order.
pub fn default_entries(settings: &Settings) -> Vec<ReportEntry> {
    vec![
        ReportEntry::new(
            "1. Environment variable secret",
            Lookup::property(&[keys::ENV_SECRET, keys::SECRET_ENV_VARIABLE]),
        ),
        ReportEntry::new(
            "2. Volume mounted file secret",
            Lookup::File(settings.volume_secret_file.clone()),
        ),
        ReportEntry::new(
            "2b. Volume secret property",
            Lookup::property(&[keys::SECRET_VOLUME]),
        ),
        ReportEntry::new(
            "3a. ConfigTree secret (file 1)",
            Lookup::property(&[keys::CONFIGTREE_FILE1]),
        ),
        ReportEntry::new(
            "3b. ConfigTree secret (file 2)",
            Lookup::property(&[keys::CONFIGTREE_FILE2]),
        ),
        ReportEntry::new(
            "3c. ConfigTree secret",
            Lookup::property(&[keys::SECRET_CONFIG_TREE_FILE, keys::SECRET_CONFIG_TREE]),
        ),
        ReportEntry::new(
            "4. From Spring K8s API secret",
            Lookup::property(&[keys::API_SECRET, keys::SECRET_K8S_API]),
        ),
        ReportEntry::new(
            "4b. From Spring K8s API secret (extra)",
            Lookup::property(&[keys::EXTRA_API_SECRET]),
        ),
        ReportEntry::new(
            "5. Hashicorp Vault secret (sidecar)",
            Lookup::File(settings.vault_secret_file.clone()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_recognized_key_is_reported() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        let entries = default_entries(&settings);

        let reported: Vec<&str> = entries
            .iter()
            .filter_map(|e| match &e.lookup {
                Lookup::Property { keys, .. } => Some(keys),
                Lookup::File(_) => None,
            })
            .flatten()
            .map(String::as_str)
            .collect();

        for key in [
            keys::ENV_SECRET,
            keys::SECRET_ENV_VARIABLE,
            keys::SECRET_CONFIG_TREE,
            keys::CONFIGTREE_FILE1,
            keys::CONFIGTREE_FILE2,
            keys::SECRET_CONFIG_TREE_FILE,
            keys::SECRET_VOLUME,
            keys::API_SECRET,
            keys::EXTRA_API_SECRET,
            keys::SECRET_K8S_API,
        ] {
            assert!(reported.contains(&key), "{} is not reported", key);
        }
    }

    #[test]
    fn test_file_entries_use_configured_paths() {
        let settings = Settings::from_lookup(|key| {
            (key == "VAULT_SECRET_FILE").then(|| "/tmp/vault.txt".to_string())
        })
        .unwrap();

        let entries = default_entries(&settings);

        assert!(entries.contains(&ReportEntry::new(
            "5. Hashicorp Vault secret (sidecar)",
            Lookup::File(PathBuf::from("/tmp/vault.txt")),
        )));
    }
}
