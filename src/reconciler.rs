// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The decision engine: brings namespaces into compliance with the quota policy.

use crate::config::{QuotaLimits, QuotaPolicy};
use crate::error::{QuartermasterError, Result};
use crate::events::{EventKind, NamespaceEvent};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Capability contract for the quota objects in the cluster.
#[async_trait]
pub trait QuotaStore {
    /// Names of the quota objects currently in the namespace.
    async fn list_quota_names(&self, namespace: &str) -> Result<Vec<String>>;

    /// Atomically create a quota object. Fails with
    /// [`QuartermasterError::QuotaExists`] when one with the same name is
    /// already present.
    async fn create_quota(&self, namespace: &str, name: &str, limits: &QuotaLimits) -> Result<()>;
}

/// Applies the quota policy to one namespace notification at a time.
pub struct QuotaReconciler<S> {
    store: S,
    policy: QuotaPolicy,
}

impl<S: QuotaStore> QuotaReconciler<S> {
    pub fn new(store: S, policy: QuotaPolicy) -> Self {
        Self { store, policy }
    }

    /// Decide and execute the minimal action for one namespace notification.
    #[instrument(skip(self, event), fields(namespace = %event.name))]
    pub async fn reconcile(&self, event: &NamespaceEvent) -> Result<()> {
        if event.kind != EventKind::Created {
            debug!("Ignoring {:?} event for namespace {}", event.kind, event.name);
            return Ok(());
        }

        if !event.name.contains(&self.policy.namespace_match) {
            debug!(
                "Namespace {} does not contain {:?}, skipping",
                event.name, self.policy.namespace_match
            );
            return Ok(());
        }

        info!(
            "Found namespace that contains {:?}: {}",
            self.policy.namespace_match, event.name
        );

        let existing = self.store.list_quota_names(&event.name).await?;

        if existing.is_empty() {
            info!("No resource quota found in namespace {}", event.name);
            return self.ensure_quota(&event.name).await;
        }

        // One creation attempt per non-matching entry; the conflict handling
        // below keeps this convergent.
        for quota_name in &existing {
            if quota_name == &self.policy.quota_name {
                info!(
                    "Resource quota {} already present in namespace {}, skipping",
                    quota_name, event.name
                );
            } else {
                self.ensure_quota(&event.name).await?;
            }
        }

        Ok(())
    }

    /// Create the managed quota, treating an already-exists conflict as the
    /// converged state.
    async fn ensure_quota(&self, namespace: &str) -> Result<()> {
        match self
            .store
            .create_quota(namespace, &self.policy.quota_name, &self.policy.limits)
            .await
        {
            Ok(()) => {
                info!(
                    "Created resource quota {} in namespace {}",
                    self.policy.quota_name, namespace
                );
                Ok(())
            }
            Err(QuartermasterError::QuotaExists(..)) => {
                info!(
                    "Resource quota {} already exists in namespace {}, nothing to do",
                    self.policy.quota_name, namespace
                );
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
