// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The name used for labels and as the field manager on created resources
pub const OPERATOR_NAME: &str = "ofas-deployer";

/// Cluster configuration record published by the Ocean controller
pub mod cluster_config {
    /// Namespace holding the controller ConfigMap
    pub const NAMESPACE: &str = "kube-system";
    /// Name of the controller ConfigMap
    pub const NAME: &str = "spotinst-kubernetes-cluster-controller-config";
    /// Key holding the cluster identifier
    pub const CLUSTER_IDENTIFIER_KEY: &str = "spotinst.cluster-identifier";
}

/// Principal used by the deploy job
pub mod rbac {
    pub const SERVICE_ACCOUNT_NAME: &str = "ofas-deployer";
    /// Prefix of the ClusterRoleBinding, suffixed with the target namespace
    pub const CLUSTER_ROLE_BINDING_PREFIX: &str = "ofas-deployer";
    pub const CLUSTER_ROLE_NAME: &str = "cluster-admin";
}

/// Deploy job settings
pub mod job {
    pub const NAME_PREFIX: &str = "ofas-deploy";
    /// Length of the random job name suffix
    pub const NAME_SUFFIX_LEN: usize = 8;
    pub const DEFAULT_IMAGE: &str = "public.ecr.aws/f4k1p1n4/bigdata-deployer:main";
    pub const CONTAINER_NAME: &str = "deployer";
    pub const ARGS: &[&str] = &["install", "--create-bootstrap-environment"];
    pub const TTL_SECONDS_AFTER_FINISHED: i32 = 300;
}

/// Deploy job polling configuration
pub mod poll {
    pub const INTERVAL_SECS: u64 = 5;
    pub const TIMEOUT_SECS: u64 = 300;
}

/// Per-request timeout for Kubernetes API calls
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
