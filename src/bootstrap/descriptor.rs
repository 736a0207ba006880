// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::fetch::DESCRIPTOR_DEFAULT_NAMESPACE;
use crate::constants::sources::KUBERNETES_SECRET_PREFIX;
use crate::registry::Registry;
use std::borrow::Cow;
use tracing::debug;

/// Identifies one Kubernetes secret to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretSourceDescriptor {
    pub name: String,
    pub namespace: String,
    /// Position in the declared `sources[N]` list, if discovered
    pub index: Option<usize>,
}

impl SecretSourceDescriptor {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            index: None,
        }
    }

    /// Name of the configuration source built from this secret
    pub fn source_name(&self) -> String {
        format!("{}{}/{}", KUBERNETES_SECRET_PREFIX, self.namespace, self.name)
    }
}

/// Which secrets the bootstrap fetcher should load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// A single known secret
    Fixed(SecretSourceDescriptor),
    /// Secrets declared as `<prefix>.sources[N].name` / `.namespace` keys
    Discovered { prefix: String },
}

impl FetchPlan {
    pub fn descriptors(&self, registry: &Registry) -> Vec<SecretSourceDescriptor> {
        match self {
            FetchPlan::Fixed(descriptor) => vec![descriptor.clone()],
            FetchPlan::Discovered { prefix } => discover_descriptors(registry, prefix),
        }
    }
}

/// Read `<prefix>.sources[N]` descriptors from the registry.
///
/// Scanning stops at the first index whose `name` key is absent. A present but
/// empty name still counts as a descriptor. A missing or empty namespace
/// falls back to `default`.
pub fn discover_descriptors(registry: &Registry, prefix: &str) -> Vec<SecretSourceDescriptor> {
    let mut descriptors = Vec::new();

    for index in 0.. {
        let Some(name) = registry.get(&format!("{}.sources[{}].name", prefix, index)) else {
            break;
        };
        let namespace = registry
            .get(&format!("{}.sources[{}].namespace", prefix, index))
            .filter(|ns| !ns.is_empty())
            .map(Cow::into_owned)
            .unwrap_or_else(|| DESCRIPTOR_DEFAULT_NAMESPACE.to_string());

        descriptors.push(SecretSourceDescriptor {
            name: name.into_owned(),
            namespace,
            index: Some(index),
        });
    }

    debug!(
        "Discovered {} secret source descriptors under '{}'",
        descriptors.len(),
        prefix
    );
    descriptors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{parse_application_config, PropertySource};

    fn registry_with(pairs: &[(&str, &str)]) -> Registry {
        let mut registry = Registry::new();
        registry
            .add_last(PropertySource::from_pairs("test", pairs.iter().copied()))
            .unwrap();
        registry
    }

    #[test]
    fn test_discovery_stops_at_first_absent_index() {
        let registry = registry_with(&[
            ("k8s.sources[0].name", "first"),
            ("k8s.sources[0].namespace", "ns-a"),
            ("k8s.sources[1].name", "second"),
            ("k8s.sources[3].name", "unreachable"),
        ]);

        let descriptors = discover_descriptors(&registry, "k8s");

        assert_eq!(
            descriptors,
            vec![
                SecretSourceDescriptor {
                    name: "first".to_string(),
                    namespace: "ns-a".to_string(),
                    index: Some(0),
                },
                SecretSourceDescriptor {
                    name: "second".to_string(),
                    namespace: "default".to_string(),
                    index: Some(1),
                },
            ]
        );
    }

    #[test]
    fn test_empty_name_does_not_stop_discovery() {
        let registry = registry_with(&[
            ("k8s.sources[0].name", ""),
            ("k8s.sources[1].name", "second"),
        ]);

        let descriptors = discover_descriptors(&registry, "k8s");

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].name, "");
        assert_eq!(descriptors[1].name, "second");
    }

    #[test]
    fn test_nothing_at_index_zero_discovers_nothing() {
        let registry = registry_with(&[("k8s.sources[1].name", "second")]);
        assert!(discover_descriptors(&registry, "k8s").is_empty());
    }

    #[test]
    fn test_namespace_only_entry_is_not_a_descriptor() {
        let registry = registry_with(&[("k8s.sources[0].namespace", "apps")]);
        assert!(discover_descriptors(&registry, "k8s").is_empty());
    }

    #[test]
    fn test_discovery_over_yaml_document() {
        let mut registry = Registry::new();
        registry
            .add_last(
                parse_application_config(
                    "application:test",
                    r#"
k8s:
  sources:
    - name: ""
      namespace: ignored
    - name: secret-app
      namespace: secret-example
"#,
                )
                .unwrap(),
            )
            .unwrap();

        let descriptors = discover_descriptors(&registry, "k8s");

        assert_eq!(
            descriptors,
            vec![
                SecretSourceDescriptor {
                    name: String::new(),
                    namespace: "ignored".to_string(),
                    index: Some(0),
                },
                SecretSourceDescriptor {
                    name: "secret-app".to_string(),
                    namespace: "secret-example".to_string(),
                    index: Some(1),
                },
            ]
        );
    }

    #[test]
    fn test_fixed_plan_ignores_registry() {
        let registry = registry_with(&[("k8s.sources[0].name", "first")]);
        let plan = FetchPlan::Fixed(SecretSourceDescriptor::new("secret-app", "secret-example"));

        assert_eq!(
            plan.descriptors(&registry),
            vec![SecretSourceDescriptor::new("secret-app", "secret-example")]
        );
    }

    #[test]
    fn test_source_name_is_unique_per_secret() {
        let a = SecretSourceDescriptor::new("secret-app", "ns-a");
        let b = SecretSourceDescriptor::new("secret-app", "ns-b");

        assert_eq!(a.source_name(), "kubernetes-secret:ns-a/secret-app");
        assert_ne!(a.source_name(), b.source_name());
    }
}
