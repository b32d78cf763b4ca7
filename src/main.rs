// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use quartermaster::config::QuotaPolicy;
use quartermaster::driver::ControlLoop;
use quartermaster::kubernetes::{create_client, KubeQuotaStore, NamespaceWatch};
use quartermaster::reconciler::QuotaReconciler;

/// Attach a resource quota to namespaces whose name matches the policy
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    /// Path to a kubeconfig file; in-cluster credentials are used when absent
    /// or unusable
    #[clap(long)]
    kubeconfig: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    info!("Starting quartermaster operator");

    // Load the quota policy
    let policy = QuotaPolicy::load()?;
    info!(
        "Policy loaded: namespaces containing {:?} get resource quota {}",
        policy.namespace_match, policy.quota_name
    );

    // Create Kubernetes client
    let client = create_client(args.kubeconfig.as_deref()).await?;
    info!("Connected to Kubernetes cluster");

    // Wire the namespace watch to the reconciler and run until terminated
    let store = KubeQuotaStore::new(client.clone());
    let watch = NamespaceWatch::new(client);
    let reconciler = QuotaReconciler::new(store, policy);

    ControlLoop::new(watch, reconciler).run().await?;

    // The namespace watch is endless; reaching this point means it stopped
    warn!("Control loop stopped unexpectedly");
    Ok(())
}
