// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Bootstrap secret fetcher: pulls Kubernetes secrets into the registry
//! before the rest of the application reads its configuration.

pub mod descriptor;
pub mod fetcher;

pub use descriptor::{discover_descriptors, FetchPlan, SecretSourceDescriptor};
pub use fetcher::{FetchOutcome, SecretFetcher};
