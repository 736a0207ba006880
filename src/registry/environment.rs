// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::sources::SYSTEM_ENVIRONMENT;
use crate::registry::PropertySource;
use std::env;

/// Snapshot every process environment variable into a source.
/// Variables that are not valid unicode are skipped.
pub fn system_environment() -> PropertySource {
    PropertySource::from_pairs(
        SYSTEM_ENVIRONMENT,
        env::vars_os().filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
    )
}
