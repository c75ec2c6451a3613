// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use ofas_deployer::config::Config;
use ofas_deployer::deploy::Deployer;
use ofas_deployer::kubernetes::create_client;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={}, cluster_identifier={}, image={}",
        config.namespace, config.cluster_identifier, config.deployer_image
    );

    let client = create_client(&config).await?;
    info!("Connected to Kubernetes cluster");

    // Abort the install on Ctrl-C
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling deployment");
            on_signal.cancel();
        }
    });

    let deployer = Deployer::new(client, config);
    match deployer.run(&cancel).await {
        Ok(job) => {
            info!("Deployment finished, deploy job {} succeeded", job);
            Ok(())
        }
        Err(e) => {
            if e.job_submitted() {
                error!("Deploy job was submitted but did not succeed: {}", e);
            } else {
                error!("Deployment aborted before the deploy job ran: {}", e);
            }
            Err(e.into())
        }
    }
}
