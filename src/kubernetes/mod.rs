// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and secret lookup.

pub mod client;
pub mod secrets;

pub use client::create_client;
pub use secrets::{decode_secret_data, find_secret_by_name, list_namespace_secrets};
