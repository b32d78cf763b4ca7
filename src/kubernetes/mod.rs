// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes-facing side: client construction, the namespace watch, and the
//! quota store.

pub mod client;
pub mod namespaces;
pub mod quotas;

pub use client::create_client;
pub use namespaces::NamespaceWatch;
pub use quotas::KubeQuotaStore;
