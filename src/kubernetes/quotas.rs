// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Quota store backed by the cluster API server.

use crate::config::QuotaLimits;
use crate::constants::{quota_keys, OPERATOR_NAME};
use crate::error::{QuartermasterError, Result};
use crate::quantity;
use crate::reconciler::QuotaStore;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{ResourceQuota, ResourceQuotaSpec};
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    Api, Client, ResourceExt,
};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Clone)]
pub struct KubeQuotaStore {
    client: Client,
}

impl KubeQuotaStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn quotas(&self, namespace: &str) -> Api<ResourceQuota> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl QuotaStore for KubeQuotaStore {
    async fn list_quota_names(&self, namespace: &str) -> Result<Vec<String>> {
        let quotas = self
            .quotas(namespace)
            .list(&ListParams::default())
            .await
            .map_err(|e| QuartermasterError::ListQuotasError(namespace.to_string(), e))?;

        let names: Vec<String> = quotas.items.iter().map(|q| q.name_any()).collect();
        debug!(
            "Found {} resource quotas in namespace {}",
            names.len(),
            namespace
        );

        Ok(names)
    }

    async fn create_quota(&self, namespace: &str, name: &str, limits: &QuotaLimits) -> Result<()> {
        let quota = build_quota(namespace, name, limits)?;
        let pp = PostParams {
            field_manager: Some(OPERATOR_NAME.to_string()),
            ..Default::default()
        };

        match self.quotas(namespace).create(&pp, &quota).await {
            Ok(_) => Ok(()),
            Err(kube::Error::Api(err)) if err.code == 409 => Err(QuartermasterError::QuotaExists(
                name.to_string(),
                namespace.to_string(),
            )),
            Err(e) => Err(QuartermasterError::CreateQuotaError(
                name.to_string(),
                namespace.to_string(),
                e,
            )),
        }
    }
}

/// Build the quota object, validating every limit quantity.
fn build_quota(namespace: &str, name: &str, limits: &QuotaLimits) -> Result<ResourceQuota> {
    let mut hard = BTreeMap::new();
    hard.insert(quota_keys::PODS.to_string(), quantity::parse(&limits.pods)?);
    hard.insert(
        quota_keys::REQUESTS_MEMORY.to_string(),
        quantity::parse(&limits.requests_memory)?,
    );
    hard.insert(
        quota_keys::LIMITS_MEMORY.to_string(),
        quantity::parse(&limits.limits_memory)?,
    );
    hard.insert(
        quota_keys::LIMITS_CPU.to_string(),
        quantity::parse(&limits.limits_cpu)?,
    );

    Ok(ResourceQuota {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(ResourceQuotaSpec {
            hard: Some(hard),
            ..Default::default()
        }),
        ..Default::default()
    })
}
