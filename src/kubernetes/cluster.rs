// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Target cluster identity validation

use crate::constants::cluster_config;
use crate::error::{InstallError, Result};
use crate::kubernetes::cancellable;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{Api, Client};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Ensure the client points at the cluster with the expected identifier.
///
/// The identifier is read from the Ocean controller ConfigMap and compared
/// verbatim, without trimming or case folding.
#[instrument(skip(client, cancel))]
pub async fn validate_cluster_context(
    client: &Client,
    cluster_identifier: &str,
    cancel: &CancellationToken,
) -> Result<()> {
    let config_maps: Api<ConfigMap> = Api::namespaced(client.clone(), cluster_config::NAMESPACE);

    let config_map = cancellable(cancel, async {
        config_maps
            .get(cluster_config::NAME)
            .await
            .map_err(InstallError::LookupFailed)
    })
    .await?;

    match cluster_identifier_of(&config_map) {
        Some(observed) if observed == cluster_identifier => {
            debug!("Cluster identifier {} matches", observed);
            Ok(())
        }
        observed => Err(InstallError::IdentityMismatch {
            observed: observed.unwrap_or_default().to_string(),
            expected: cluster_identifier.to_string(),
        }),
    }
}

/// The cluster identifier stored in the ConfigMap, if published
fn cluster_identifier_of(config_map: &ConfigMap) -> Option<&str> {
    config_map
        .data
        .as_ref()
        .and_then(|d| d.get(cluster_config::CLUSTER_IDENTIFIER_KEY))
        .map(String::as_str)
}
