// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Spot Ocean records exchanged with the cloud provider API.
//!
//! Orchestrator-specific payloads are tagged by [`Orchestrator`], so consumers
//! match on the variant instead of inspecting an untyped object.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Container orchestrator an Ocean resource belongs to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orchestrator {
    Kubernetes,
    Ecs,
}

impl fmt::Display for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orchestrator::Kubernetes => f.write_str("kubernetes"),
            Orchestrator::Ecs => f.write_str("ecs"),
        }
    }
}

/// Payloads that are keyed by orchestrator
pub trait OrchestratorSpec {
    fn orchestrator(&self) -> Orchestrator;
}

/// Metadata common to all Ocean resources
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Time>,
}

/// A Spot account
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "accountId")]
    pub id: String,
    pub name: String,
    pub organization_id: String,
    /// Set by AWS only
    #[serde(rename = "providerExternalId")]
    pub external_id: Option<String>,
}

/// An Ocean resource with its orchestrator-specific payload
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OceanObject<S> {
    pub metadata: ObjectMeta,
    pub spec: S,
}

impl<S: OrchestratorSpec> OceanObject<S> {
    pub fn orchestrator(&self) -> Orchestrator {
        self.spec.orchestrator()
    }
}

pub type OceanCluster = OceanObject<OceanClusterSpec>;
pub type OceanLaunchSpec = OceanObject<OceanLaunchSpecSpec>;
pub type OceanRollout = OceanObject<OceanRolloutSpec>;

macro_rules! orchestrator_spec {
    ($name:ident, $kubernetes:ty, $ecs:ty) => {
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
        #[serde(tag = "orchestrator", content = "config", rename_all = "lowercase")]
        pub enum $name {
            Kubernetes($kubernetes),
            Ecs($ecs),
        }

        impl OrchestratorSpec for $name {
            fn orchestrator(&self) -> Orchestrator {
                match self {
                    $name::Kubernetes(_) => Orchestrator::Kubernetes,
                    $name::Ecs(_) => Orchestrator::Ecs,
                }
            }
        }
    };
}

orchestrator_spec!(OceanClusterSpec, KubernetesCluster, EcsCluster);
orchestrator_spec!(OceanLaunchSpecSpec, LaunchSpec, LaunchSpec);
orchestrator_spec!(OceanRolloutSpec, Rollout, Rollout);

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub spot_percentage: f64,
    pub utilize_reserved_instances: bool,
    pub fallback_to_on_demand: bool,
    pub draining_timeout: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    pub minimum: i32,
    pub maximum: i32,
    pub target: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Compute {
    pub subnet_ids: Vec<String>,
    pub instance_types_whitelist: Vec<String>,
    pub instance_types_blacklist: Vec<String>,
    pub security_group_ids: Vec<String>,
    pub image_id: String,
    pub key_pair: String,
    pub user_data: String,
    pub root_volume_size: i32,
    pub associate_public_ip_address: bool,
    pub enable_monitoring: bool,
    pub enable_ebs_optimization: bool,
    pub iam_instance_profile_name: String,
    pub iam_instance_profile_arn: String,
    pub load_balancer_names: Vec<String>,
    pub load_balancer_arns: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutoScaler {
    pub enabled: bool,
    pub auto_config: bool,
    pub cooldown: i32,
    pub headroom_cpu_per_unit: i32,
    pub headroom_memory_per_unit: i32,
    pub headroom_gpu_per_unit: i32,
    pub headroom_num_per_unit: i32,
    pub resource_limit_max_vcpu: i32,
    pub resource_limit_max_memory: i32,
    pub evaluation_periods: i32,
    pub max_scale_down_percentage: i32,
}

/// Ocean for Kubernetes cluster
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesCluster {
    pub controller_cluster_id: String,
    pub region: String,
    pub strategy: Strategy,
    pub capacity: Capacity,
    pub compute: Compute,
    pub auto_scaler: AutoScaler,
}

/// Ocean for ECS cluster
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EcsCluster {
    pub cluster_name: String,
    pub region: String,
    pub strategy: Strategy,
    pub capacity: Capacity,
    pub compute: Compute,
    pub auto_scaler: AutoScaler,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSpec {
    pub ocean_id: String,
    pub image_id: String,
    pub user_data: String,
    pub security_group_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rollout {
    pub ocean_id: String,
    pub comment: String,
    pub status: String,
    pub batch_size_percentage: i32,
    pub disable_auto_scaling: bool,
    pub spec_ids: Vec<String>,
    pub instance_ids: Vec<String>,
}

/// Options for creating or updating an Ocean cluster
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OceanClusterOptions {
    // Base.
    pub cluster_id: String,
    pub controller_id: String,
    pub name: String,
    pub region: String,

    pub strategy: Strategy,
    pub capacity: Capacity,
    pub compute: Compute,
    pub auto_scaler: AutoScaler,
}

impl OceanClusterOptions {
    /// Build the cluster payload for an orchestrator.
    ///
    /// For ECS the controller ID names the ECS cluster.
    pub fn to_spec(&self, orchestrator: Orchestrator) -> OceanClusterSpec {
        match orchestrator {
            Orchestrator::Kubernetes => OceanClusterSpec::Kubernetes(KubernetesCluster {
                controller_cluster_id: self.controller_id.clone(),
                region: self.region.clone(),
                strategy: self.strategy.clone(),
                capacity: self.capacity.clone(),
                compute: self.compute.clone(),
                auto_scaler: self.auto_scaler.clone(),
            }),
            Orchestrator::Ecs => OceanClusterSpec::Ecs(EcsCluster {
                cluster_name: self.controller_id.clone(),
                region: self.region.clone(),
                strategy: self.strategy.clone(),
                capacity: self.capacity.clone(),
                compute: self.compute.clone(),
                auto_scaler: self.auto_scaler.clone(),
            }),
        }
    }
}

/// Options for creating or updating an Ocean launch spec
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OceanLaunchSpecOptions {
    pub spec_id: String,
    pub cluster_id: String,
    pub name: String,
    pub image_id: String,
    pub user_data: String,
    pub security_group_ids: Vec<String>,
}

impl OceanLaunchSpecOptions {
    pub fn to_spec(&self, orchestrator: Orchestrator) -> OceanLaunchSpecSpec {
        let spec = LaunchSpec {
            ocean_id: self.cluster_id.clone(),
            image_id: self.image_id.clone(),
            user_data: self.user_data.clone(),
            security_group_ids: self.security_group_ids.clone(),
        };
        match orchestrator {
            Orchestrator::Kubernetes => OceanLaunchSpecSpec::Kubernetes(spec),
            Orchestrator::Ecs => OceanLaunchSpecSpec::Ecs(spec),
        }
    }
}

/// Options for starting or updating an Ocean rollout
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OceanRolloutOptions {
    pub rollout_id: String,
    pub cluster_id: String,
    pub comment: String,
    pub status: String,
    pub batch_size_percentage: i32,
    pub disable_auto_scaling: bool,
    pub spec_ids: Vec<String>,
    pub instance_ids: Vec<String>,
}

impl OceanRolloutOptions {
    pub fn to_spec(&self, orchestrator: Orchestrator) -> OceanRolloutSpec {
        let rollout = Rollout {
            ocean_id: self.cluster_id.clone(),
            comment: self.comment.clone(),
            status: self.status.clone(),
            batch_size_percentage: self.batch_size_percentage,
            disable_auto_scaling: self.disable_auto_scaling,
            spec_ids: self.spec_ids.clone(),
            instance_ids: self.instance_ids.clone(),
        };
        match orchestrator {
            Orchestrator::Kubernetes => OceanRolloutSpec::Kubernetes(rollout),
            Orchestrator::Ecs => OceanRolloutSpec::Ecs(rollout),
        }
    }
}
