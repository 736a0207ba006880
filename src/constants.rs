// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Text reported for a key that no configuration source resolves
pub const NOT_SET: &str = "Not Set";

/// Prefix of the value reported when a secret file cannot be read
pub const FILE_UNREADABLE: &str = "File not found or unreadable";

/// Configuration keys read by the secret reporter
pub mod keys {
    pub const ENV_SECRET: &str = "ENV_SECRET";
    pub const SECRET_ENV_VARIABLE: &str = "SECRET_ENV_VARIABLE";
    pub const SECRET_CONFIG_TREE: &str = "SECRET_CONFIG_TREE";
    pub const CONFIGTREE_FILE1: &str = "configtree-file1";
    pub const CONFIGTREE_FILE2: &str = "configtree-file2";
    pub const SECRET_CONFIG_TREE_FILE: &str = "secret-config-tree";
    pub const SECRET_VOLUME: &str = "secret-volume";
    pub const API_SECRET: &str = "api-secret";
    pub const EXTRA_API_SECRET: &str = "extra-api-secret";
    pub const SECRET_K8S_API: &str = "secret-spring-k8s-api";
}

/// Names of the base configuration sources
pub mod sources {
    pub const SYSTEM_ENVIRONMENT: &str = "systemEnvironment";
    pub const CONFIG_TREE_PREFIX: &str = "configtree:";
    pub const APPLICATION_PREFIX: &str = "application:";
    pub const KUBERNETES_SECRET_PREFIX: &str = "kubernetes-secret:";
}

/// Defaults for the bootstrap secret fetcher
pub mod fetch {
    /// Secret fetched when no discovery prefix is configured
    pub const DEFAULT_SECRET_NAME: &str = "secret-app";
    /// Namespace of the fixed secret
    pub const DEFAULT_SECRET_NAMESPACE: &str = "secret-example";
    /// Namespace used by discovered descriptors that do not name one
    pub const DESCRIPTOR_DEFAULT_NAMESPACE: &str = "default";
}

/// Well-known filesystem locations
pub mod paths {
    pub const APPLICATION_CONFIG: &str = "config/application.yaml";
    pub const CONFIG_TREE_DIR: &str = "/etc/config-tree";
    pub const VOLUME_SECRET_FILE: &str = "/etc/volume-secret/secret-file.txt";
    pub const VAULT_SECRET_FILE: &str = "/etc/vault-secrets/vault-secret.txt";
}
