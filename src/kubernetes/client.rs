// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client construction: kubeconfig first, in-cluster fallback.

use crate::error::{QuartermasterError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Create the cluster client from a kubeconfig (an explicit path or the
/// standard discovery locations), falling back to in-cluster credentials
/// when no usable kubeconfig is found.
#[instrument]
pub async fn create_client(kubeconfig_path: Option<&Path>) -> Result<Client> {
    match local_config(kubeconfig_path).await {
        Ok(config) => {
            info!("Using kubeconfig credentials");
            client_from_config(config)
        }
        Err(e) => {
            warn!(
                "Failed to load kubeconfig ({}), falling back to in-cluster credentials",
                e
            );
            let config = Config::incluster().map_err(|e| {
                QuartermasterError::KubeconfigError(format!(
                    "Failed to load in-cluster config: {}",
                    e
                ))
            })?;
            client_from_config(config)
        }
    }
}

async fn local_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                QuartermasterError::KubeconfigError(format!(
                    "Failed to read kubeconfig {}: {}",
                    path.display(),
                    e
                ))
            })?;
            config_from_kubeconfig(&raw).await
        }
        None => Config::from_kubeconfig(&KubeConfigOptions::default())
            .await
            .map_err(|e| {
                QuartermasterError::KubeconfigError(format!(
                    "Failed to load default kubeconfig: {}",
                    e
                ))
            }),
    }
}

/// Build a client config from a kubeconfig document
async fn config_from_kubeconfig(kubeconfig: &str) -> Result<Config> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig).map_err(|e| {
        QuartermasterError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e))
    })?;

    Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
        .await
        .map_err(|e| {
            QuartermasterError::KubeconfigError(format!("Failed to create config: {}", e))
        })
}

fn client_from_config(config: Config) -> Result<Client> {
    Client::try_from(config)
        .map_err(|e| QuartermasterError::KubeconfigError(format!("Failed to create client: {}", e)))
}
