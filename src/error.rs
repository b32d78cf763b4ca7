// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuartermasterError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Failed to list resource quotas in namespace {0}: {1}")]
    ListQuotasError(String, #[source] kube::Error),

    #[error("Failed to create resource quota {0} in namespace {1}: {2}")]
    CreateQuotaError(String, String, #[source] kube::Error),

    #[error("Resource quota {0} already exists in namespace {1}")]
    QuotaExists(String, String),

    #[error("Invalid resource quantity: {0}")]
    InvalidQuantity(String),
}

pub type Result<T> = std::result::Result<T, QuartermasterError>;
