// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::policy_file::{DEFAULT_PATH, PATH_ENV};
use crate::error::{QuartermasterError, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Desired-state policy loaded from the configuration file
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaPolicy {
    /// Substring a namespace name must contain to be in scope
    #[serde(rename = "NamespaceShouldContain")]
    pub namespace_match: String,
    /// Name given to the managed resource quota
    #[serde(rename = "ResourceQuotaName")]
    pub quota_name: String,
    /// Hard limits applied by the managed resource quota
    #[serde(flatten)]
    pub limits: QuotaLimits,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuotaLimits {
    #[serde(rename = "ResourcePods")]
    pub pods: String,
    #[serde(rename = "ResourceRequestsMemory")]
    pub requests_memory: String,
    #[serde(rename = "ResourceLimitsMemory")]
    pub limits_memory: String,
    #[serde(rename = "ResourceLimitsCPU")]
    pub limits_cpu: String,
}

impl QuotaPolicy {
    /// Load the policy from the default path or the QUARTERMASTER_CONFIG override
    pub fn load() -> Result<Self> {
        Self::from_file(&resolve_path(env::var(PATH_ENV).ok()))
    }

    /// Load the policy from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            QuartermasterError::ConfigError(format!(
                "Failed to read policy file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&raw).map_err(|e| {
            QuartermasterError::ConfigError(format!(
                "Failed to parse policy file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

fn resolve_path(env_override: Option<String>) -> PathBuf {
    env_override
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH))
}
