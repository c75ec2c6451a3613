// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deploy job principal provisioning

use crate::constants::{rbac, OPERATOR_NAME};
use crate::error::{InstallError, PrincipalResource, Result};
use crate::kubernetes::cancellable;
use k8s_openapi::api::core::v1::ServiceAccount;
use k8s_openapi::api::rbac::v1::{ClusterRoleBinding, RoleRef, Subject};
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client, Resource,
};
use std::collections::BTreeMap;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

/// Name of the ClusterRoleBinding granting the deployer access for a namespace
pub fn cluster_role_binding_name(namespace: &str) -> String {
    format!("{}-{}", rbac::CLUSTER_ROLE_BINDING_PREFIX, namespace)
}

/// Ensure the deployer service account and its cluster role binding exist.
///
/// Resources that already exist are left untouched. Nothing is rolled back
/// when the binding fails after the service account was created.
#[instrument(skip(client, cancel))]
pub async fn create_deployer_rbac(
    client: &Client,
    namespace: &str,
    cancel: &CancellationToken,
) -> Result<()> {
    let (service_account, binding) = deployer_rbac(namespace);

    let service_accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), namespace);
    cancellable(
        cancel,
        create_if_missing(
            &service_accounts,
            &service_account,
            PrincipalResource::ServiceAccount,
        ),
    )
    .await?;

    let bindings: Api<ClusterRoleBinding> = Api::all(client.clone());
    cancellable(
        cancel,
        create_if_missing(&bindings, &binding, PrincipalResource::ClusterRoleBinding),
    )
    .await?;

    Ok(())
}

async fn create_if_missing<K>(api: &Api<K>, object: &K, resource: PrincipalResource) -> Result<()>
where
    K: Resource + Clone + serde::Serialize + serde::de::DeserializeOwned + std::fmt::Debug,
{
    let name = object.meta().name.clone().unwrap_or_default();

    match api.create(&PostParams::default(), object).await {
        Ok(_) => {
            info!("Created deployer {} {}", resource, name);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 409 => {
            debug!("Deployer {} {} already exists", resource, name);
            Ok(())
        }
        Err(source) => Err(InstallError::ProvisionFailed { resource, source }),
    }
}

/// Build the deployer service account and cluster role binding for a namespace
fn deployer_rbac(namespace: &str) -> (ServiceAccount, ClusterRoleBinding) {
    let labels = BTreeMap::from([(
        "app.kubernetes.io/managed-by".to_string(),
        OPERATOR_NAME.to_string(),
    )]);

    let service_account = ServiceAccount {
        metadata: ObjectMeta {
            name: Some(rbac::SERVICE_ACCOUNT_NAME.to_string()),
            namespace: Some(namespace.to_string()),
            labels: Some(labels.clone()),
            ..Default::default()
        },
        ..Default::default()
    };

    let binding = ClusterRoleBinding {
        metadata: ObjectMeta {
            name: Some(cluster_role_binding_name(namespace)),
            labels: Some(labels),
            ..Default::default()
        },
        role_ref: RoleRef {
            api_group: "rbac.authorization.k8s.io".to_string(),
            kind: "ClusterRole".to_string(),
            name: rbac::CLUSTER_ROLE_NAME.to_string(),
        },
        subjects: Some(vec![Subject {
            kind: "ServiceAccount".to_string(),
            name: rbac::SERVICE_ACCOUNT_NAME.to_string(),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        }]),
    };

    (service_account, binding)
}
