// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Named key/value sources and the priority-ordered registry over them

use crate::error::{Result, SecretSourceError};
use config::Source;
use std::borrow::Cow;

/// A named set of configuration properties
#[derive(Debug, Clone)]
pub struct PropertySource {
    name: String,
    properties: Properties,
}

#[derive(Debug, Clone)]
enum Properties {
    /// Insertion-ordered flat keys, matched exactly
    Flat(Vec<(String, String)>),
    /// A loaded document queried by path expression (`a.b[0].c`)
    Document {
        config: config::Config,
        top_level_keys: Vec<String>,
    },
}

impl PropertySource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Properties::Flat(Vec::new()),
        }
    }

    /// Build a source from key/value pairs, keeping their order.
    /// A repeated key replaces the earlier value in place.
    pub fn from_pairs<I, K, V>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut properties: Vec<(String, String)> = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            match properties.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => properties.push((key, value)),
            }
        }

        Self {
            name: name.into(),
            properties: Properties::Flat(properties),
        }
    }

    /// Wrap a built `config::Config`. Lookups go through its path
    /// expressions, so `list[1].name` resolves inside sequences.
    pub fn from_config(name: impl Into<String>, config: config::Config) -> Self {
        let mut top_level_keys: Vec<String> = config
            .collect()
            .map(|table| table.into_iter().map(|(k, _)| k).collect())
            .unwrap_or_default();
        top_level_keys.sort();

        Self {
            name: name.into(),
            properties: Properties::Document {
                config,
                top_level_keys,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of `key`, or `None` when the source does not define it.
    /// Document sources only answer for scalar values.
    pub fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        match &self.properties {
            Properties::Flat(properties) => properties
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| Cow::Borrowed(v.as_str())),
            Properties::Document { config, .. } => config.get_string(key).ok().map(Cow::Owned),
        }
    }

    /// Flat keys in insertion order; for document sources, the sorted
    /// top-level keys
    pub fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match &self.properties {
            Properties::Flat(properties) => Box::new(properties.iter().map(|(k, _)| k.as_str())),
            Properties::Document { top_level_keys, .. } => {
                Box::new(top_level_keys.iter().map(String::as_str))
            }
        }
    }

    pub fn len(&self) -> usize {
        match &self.properties {
            Properties::Flat(properties) => properties.len(),
            Properties::Document { top_level_keys, .. } => top_level_keys.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Configuration sources in priority order, highest first.
///
/// Lookups return the value from the first source that defines the key.
/// Sources are only ever added, never replaced.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    sources: Vec<PropertySource>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source ahead of every existing one
    pub fn add_first(&mut self, source: PropertySource) -> Result<()> {
        self.ensure_unique(source.name())?;
        self.sources.insert(0, source);
        Ok(())
    }

    /// Add a source behind every existing one
    pub fn add_last(&mut self, source: PropertySource) -> Result<()> {
        self.ensure_unique(source.name())?;
        self.sources.push(source);
        Ok(())
    }

    fn ensure_unique(&self, name: &str) -> Result<()> {
        if self.contains(name) {
            return Err(SecretSourceError::DuplicateSource(name.to_string()));
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sources.iter().any(|s| s.name() == name)
    }

    /// Resolve a key against the sources in priority order.
    /// An empty value is a match; only an absent key falls through.
    pub fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.sources.iter().find_map(|s| s.get(key))
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> Cow<'a, str> {
        self.get(key).unwrap_or(Cow::Borrowed(default))
    }

    /// Name of the source that currently resolves `key`
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|s| s.get(key).is_some())
            .map(|s| s.name())
    }

    pub fn sources(&self) -> &[PropertySource] {
        &self.sources
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
