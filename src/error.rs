// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// The principal sub-resource that failed to provision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalResource {
    ServiceAccount,
    ClusterRoleBinding,
}

impl fmt::Display for PrincipalResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrincipalResource::ServiceAccount => f.write_str("service account"),
            PrincipalResource::ClusterRoleBinding => f.write_str("cluster role binding"),
        }
    }
}

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Failed to create Kubernetes client: {0}")]
    Kubeconfig(String),

    #[error("Could not get ocean configuration: {0}")]
    LookupFailed(#[source] kube::Error),

    #[error("Current cluster identifier is {observed:?}, expected {expected:?}")]
    IdentityMismatch { observed: String, expected: String },

    #[error("Could not create deployer {resource}: {source}")]
    ProvisionFailed {
        resource: PrincipalResource,
        #[source]
        source: kube::Error,
    },

    #[error("Could not render deploy job template: {0}")]
    RenderFailed(#[from] minijinja::Error),

    #[error("Could not decode deploy job manifest: {0}")]
    ManifestInvalid(#[from] serde_yaml::Error),

    #[error("Could not create deploy job: {0}")]
    SubmitFailed(#[source] kube::Error),

    #[error("Timed out after {timeout:?} waiting for deploy job {job} to finish")]
    PollTimeout { job: String, timeout: Duration },

    #[error("Deploy job {job} failed")]
    JobFailed { job: String },

    #[error("Deploy job {job} reports both Complete and Failed conditions")]
    InconsistentJobState { job: String },

    #[error("Operation cancelled")]
    Cancelled,
}

impl InstallError {
    /// Whether the deploy job reached the cluster before this error occurred.
    ///
    /// `false` means nothing ran; `true` covers both an explicit job failure
    /// and a job whose fate is unknown.
    pub fn job_submitted(&self) -> bool {
        matches!(
            self,
            InstallError::PollTimeout { .. }
                | InstallError::JobFailed { .. }
                | InstallError::InconsistentJobState { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, InstallError>;
