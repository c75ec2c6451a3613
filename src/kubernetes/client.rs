// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation

use crate::config::Config;
use crate::error::{InstallError, Result};
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use tracing::{debug, instrument};

/// Create a Kubernetes client for the target cluster.
///
/// Uses the configured kubeconfig context when set, the inferred
/// configuration otherwise. Every request is bounded by the configured
/// request timeout.
#[instrument(skip(config), fields(context = ?config.kube_context))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let mut client_config = match &config.kube_context {
        Some(context) => {
            debug!("Loading kubeconfig context {}", context);
            let options = KubeConfigOptions {
                context: Some(context.clone()),
                ..Default::default()
            };
            KConfig::from_kubeconfig(&options).await.map_err(|e| {
                InstallError::Kubeconfig(format!("Failed to load context {}: {}", context, e))
            })?
        }
        None => KConfig::infer()
            .await
            .map_err(|e| InstallError::Kubeconfig(format!("Failed to infer config: {}", e)))?,
    };

    client_config.read_timeout = Some(config.request_timeout);
    debug!("Using cluster URL {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| InstallError::Kubeconfig(format!("Failed to create client: {}", e)))
}
