// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, cluster validation, and RBAC provisioning.

pub mod cancel;
pub mod client;
pub mod cluster;
pub mod rbac;

pub use cancel::cancellable;
pub use client::create_client;
pub use cluster::validate_cluster_context;
pub use rbac::create_deployer_rbac;
