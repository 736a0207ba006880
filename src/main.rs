// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use secret_sources::config::Settings;
use secret_sources::registry::system_environment;
use secret_sources::startup::{bootstrap_secrets, build_registry, report_secrets};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting secret sources demo");

    let settings = Settings::from_env()?;
    info!("Settings loaded: fetch_plan={:?}", settings.fetch_plan);

    // Build configuration, pulling cluster secrets in ahead of everything else
    let mut registry = build_registry(&settings, system_environment());
    bootstrap_secrets(&settings, &mut registry).await;

    info!("Application ready");
    report_secrets(&settings, &registry);

    Ok(())
}
