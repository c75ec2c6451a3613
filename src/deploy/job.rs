// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deploy job submission and completion polling

use crate::config::PollConfig;
use crate::error::{InstallError, Result};
use crate::kubernetes::cancellable;
use k8s_openapi::api::batch::v1::Job;
use kube::{api::PostParams, Api, Client, ResourceExt};
use tokio::time::{sleep, timeout};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Status of a deploy job as derived from its conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// No terminal condition yet
    Pending,
    Succeeded,
    Failed,
}

impl JobOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, JobOutcome::Pending)
    }
}

/// Derive the outcome of a job from its condition list.
///
/// Only conditions with status `True` count. A job carrying both a true
/// `Complete` and a true `Failed` condition is reported as inconsistent.
pub fn classify_job(job: &Job) -> Result<JobOutcome> {
    let conditions = job
        .status
        .as_ref()
        .and_then(|s| s.conditions.as_deref())
        .unwrap_or_default();
    debug!("Deploy job conditions: {:?}", conditions);

    let is_true = |type_: &str| {
        conditions
            .iter()
            .any(|c| c.type_ == type_ && c.status == "True")
    };

    match (is_true("Complete"), is_true("Failed")) {
        (true, true) => Err(InstallError::InconsistentJobState {
            job: job.name_any(),
        }),
        (true, false) => Ok(JobOutcome::Succeeded),
        (false, true) => Ok(JobOutcome::Failed),
        (false, false) => Ok(JobOutcome::Pending),
    }
}

/// Create the deploy job, returning the job as accepted by the API server
#[instrument(skip(client, job, cancel), fields(job = %job.name_any()))]
pub async fn submit_job(
    client: &Client,
    namespace: &str,
    job: &Job,
    cancel: &CancellationToken,
) -> Result<Job> {
    let jobs: Api<Job> = Api::namespaced(client.clone(), namespace);

    debug!("Creating deploy job {}/{}", namespace, job.name_any());
    let created = cancellable(cancel, async {
        jobs.create(&PostParams::default(), job)
            .await
            .map_err(InstallError::SubmitFailed)
    })
    .await?;

    info!("Created deploy job {}/{}", namespace, created.name_any());
    Ok(created)
}

/// Wait until the deploy job succeeds.
///
/// Errors while reading the job are logged and retried on the next tick;
/// the poll timeout bounds the whole wait.
#[instrument(skip(client, poll, cancel))]
pub async fn wait_for_job(
    client: &Client,
    namespace: &str,
    name: &str,
    poll: &PollConfig,
    cancel: &CancellationToken,
) -> Result<()> {
    let jobs: Api<Job> = Api::namespaced(client.clone(), namespace);

    let succeeded = cancellable(cancel, async {
        match timeout(poll.timeout, poll_job(&jobs, name, poll)).await {
            Ok(res) => res,
            Err(_) => Err(InstallError::PollTimeout {
                job: name.to_string(),
                timeout: poll.timeout,
            }),
        }
    })
    .await?;

    if !succeeded {
        return Err(InstallError::JobFailed {
            job: name.to_string(),
        });
    }

    info!("Deploy job {}/{} completed", namespace, name);
    Ok(())
}

/// Poll until the job reaches a terminal outcome, returning whether it succeeded
async fn poll_job(jobs: &Api<Job>, name: &str, poll: &PollConfig) -> Result<bool> {
    loop {
        sleep(poll.interval).await;

        let job = match jobs.get(name).await {
            Ok(job) => job,
            Err(e) => {
                warn!("Could not get deploy job {}: {}", name, e);
                continue;
            }
        };

        match classify_job(&job)? {
            JobOutcome::Pending => debug!("Deploy job {} still running", name),
            outcome => return Ok(outcome == JobOutcome::Succeeded),
        }
    }
}
