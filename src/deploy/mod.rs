// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One-shot deployment of the add-on installer job.

pub mod job;
pub mod manifest;

pub use job::{classify_job, submit_job, wait_for_job, JobOutcome};
pub use manifest::{generate_job_name, render_job, JobValues};

use crate::config::Config;
use crate::constants::rbac;
use crate::error::Result;
use crate::kubernetes::{create_deployer_rbac, validate_cluster_context};
use kube::{Client, ResourceExt};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

/// Runs the install sequence against a single cluster.
///
/// Validate cluster, provision RBAC, render, submit, and poll run strictly in
/// order and the first failure ends the run. Nothing is retried across steps.
pub struct Deployer {
    client: Client,
    config: Config,
}

impl Deployer {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Install the add-on, returning the name of the completed deploy job
    #[instrument(skip(self, cancel), fields(namespace = %self.config.namespace))]
    pub async fn run(&self, cancel: &CancellationToken) -> Result<String> {
        let namespace = self.config.namespace.as_str();

        validate_cluster_context(&self.client, &self.config.cluster_identifier, cancel).await?;
        info!("Cluster identifier {} verified", self.config.cluster_identifier);

        create_deployer_rbac(&self.client, namespace, cancel).await?;

        let name = generate_job_name();
        let job = render_job(&JobValues {
            name: &name,
            namespace,
            image: &self.config.deployer_image,
            service_account: rbac::SERVICE_ACCOUNT_NAME,
        })?;

        let created = submit_job(&self.client, namespace, &job, cancel).await?;
        let name = created.name_any();

        info!("Waiting for deploy job {}/{} to complete", namespace, name);
        wait_for_job(&self.client, namespace, &name, &self.config.poll, cancel).await?;

        Ok(name)
    }
}
