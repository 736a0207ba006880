// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret listing, lookup, and decoding utilities

use crate::error::{Result, SecretSourceError};
use k8s_openapi::api::core::v1::Secret;
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::{debug, instrument};

/// List every secret visible in `namespace`
#[instrument(skip(client))]
pub async fn list_namespace_secrets(client: &Client, namespace: &str) -> Result<Vec<Secret>> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);
    let secret_list = secrets.list(&ListParams::default()).await?;

    debug!(
        "Listed {} secrets in namespace {}",
        secret_list.items.len(),
        namespace
    );
    Ok(secret_list.items)
}

/// Find the first secret whose name matches `name`
pub fn find_secret_by_name(secrets: Vec<Secret>, name: &str) -> Option<Secret> {
    secrets.into_iter().find(|s| s.name_any() == name)
}

/// Decode every data value of a secret as UTF-8 text, keeping key order.
///
/// Returns `Ok(None)` when the secret carries no data map.
pub fn decode_secret_data(secret: &Secret) -> Result<Option<Vec<(String, String)>>> {
    let Some(data) = secret.data.as_ref() else {
        return Ok(None);
    };

    data.iter()
        .map(|(key, value)| {
            String::from_utf8(value.0.clone())
                .map(|text| (key.clone(), text))
                .map_err(|e| SecretSourceError::DecodeError {
                    secret: format!("{}/{}", secret.namespace().unwrap_or_default(), secret.name_any()),
                    key: key.clone(),
                    reason: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
