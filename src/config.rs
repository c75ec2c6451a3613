// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{job, poll, REQUEST_TIMEOUT_SECS};
use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Deploy job polling parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Time between two status checks
    pub interval: Duration,
    /// Overall time to wait for the job to finish
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(poll::INTERVAL_SECS),
            timeout: Duration::from_secs(poll::TIMEOUT_SECS),
        }
    }
}

/// Deployer configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace the deploy job and its service account are created in
    pub namespace: String,
    /// Cluster identifier the target cluster must report
    pub cluster_identifier: String,
    pub deployer_image: String,
    /// Kubeconfig context to use instead of the inferred one
    pub kube_context: Option<String>,
    pub request_timeout: Duration,
    pub poll: PollConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let namespace =
            env::var("OFAS_NAMESPACE").context("OFAS_NAMESPACE environment variable not set")?;
        let cluster_identifier = non_empty(
            "OFAS_CLUSTER_IDENTIFIER",
            env::var("OFAS_CLUSTER_IDENTIFIER")
                .context("OFAS_CLUSTER_IDENTIFIER environment variable not set")?,
        )?;
        let deployer_image =
            env::var("OFAS_DEPLOYER_IMAGE").unwrap_or_else(|_| job::DEFAULT_IMAGE.to_string());
        let kube_context = env::var("OFAS_KUBE_CONTEXT").ok().filter(|c| !c.is_empty());

        let request_timeout = secs_from_env("OFAS_REQUEST_TIMEOUT_SECS", REQUEST_TIMEOUT_SECS)?;
        let poll = PollConfig {
            interval: secs_from_env("OFAS_POLL_INTERVAL_SECS", poll::INTERVAL_SECS)?,
            timeout: secs_from_env("OFAS_POLL_TIMEOUT_SECS", poll::TIMEOUT_SECS)?,
        };

        Ok(Config {
            namespace,
            cluster_identifier,
            deployer_image,
            kube_context,
            request_timeout,
            poll,
        })
    }
}

fn non_empty(name: &str, value: String) -> Result<String> {
    if value.is_empty() {
        bail!("{} environment variable is empty", name);
    }
    Ok(value)
}

fn secs_from_env(name: &str, default: u64) -> Result<Duration> {
    match env::var(name) {
        Ok(value) => parse_secs(name, &value),
        Err(_) => Ok(Duration::from_secs(default)),
    }
}

fn parse_secs(name: &str, value: &str) -> Result<Duration> {
    let secs: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("{} must be a number of seconds, got {:?}", name, value))?;
    Ok(Duration::from_secs(secs))
}
