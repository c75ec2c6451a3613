// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deploy job manifest rendering

use crate::constants::{job, OPERATOR_NAME};
use crate::error::Result;
use k8s_openapi::api::batch::v1::Job;
use minijinja::{context, Environment, Error, ErrorKind, UndefinedBehavior, Value};
use rand::{distributions::Alphanumeric, Rng};
use tracing::debug;

/// Deploy job template loaded at compile time
const DEPLOY_JOB_TEMPLATE: &str = include_str!("../../templates/deploy-job.yaml");

/// Template name without extension, so no auto-escaping applies
const TEMPLATE_NAME: &str = "deploy-job";

/// Values substituted into the deploy job template
#[derive(Debug, Clone)]
pub struct JobValues<'a> {
    pub name: &'a str,
    pub namespace: &'a str,
    pub image: &'a str,
    pub service_account: &'a str,
}

/// Generate a fresh deploy job name, e.g. `ofas-deploy-k3x9a0qz`
pub fn generate_job_name() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(job::NAME_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!("{}-{}", job::NAME_PREFIX, suffix)
}

/// Render the deploy job template and decode it into a Job
pub fn render_job(values: &JobValues<'_>) -> Result<Job> {
    let manifest = render_job_manifest(values)?;
    decode_job_manifest(&manifest)
}

/// Render the deploy job template to YAML.
///
/// Missing or blank values fail rendering.
pub fn render_job_manifest(values: &JobValues<'_>) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_filter("required", required);
    env.add_template(TEMPLATE_NAME, DEPLOY_JOB_TEMPLATE)?;

    let manifest = env.get_template(TEMPLATE_NAME)?.render(context! {
        name => values.name,
        namespace => values.namespace,
        image => values.image,
        service_account => values.service_account,
        managed_by => OPERATOR_NAME,
        container_name => job::CONTAINER_NAME,
        args => job::ARGS,
        ttl_seconds_after_finished => job::TTL_SECONDS_AFTER_FINISHED,
    })?;

    debug!("Rendered deploy job manifest:\n{}", manifest);
    Ok(manifest)
}

/// Decode a rendered manifest into a Job
pub fn decode_job_manifest(manifest: &str) -> Result<Job> {
    Ok(serde_yaml::from_str(manifest)?)
}

/// Fail if a value is undefined, none, or a blank string
fn required(value: Value) -> std::result::Result<Value, Error> {
    let blank = value.as_str().is_some_and(|s| s.trim().is_empty());
    if value.is_undefined() || value.is_none() || blank {
        Err(Error::new(
            ErrorKind::InvalidOperation,
            "required value is missing or empty",
        ))
    } else {
        Ok(value)
    }
}
