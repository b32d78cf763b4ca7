// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace lifecycle events from the cluster watch.

use crate::events::{EventKind, EventSource, NamespaceEvent, WatchEvent};
use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use k8s_openapi::api::core::v1::Namespace;
use kube::{Api, Client, ResourceExt};
use kube_runtime::{watcher, WatchStreamExt};
use tracing::{debug, warn};

type NamespaceStream = BoxStream<'static, Result<watcher::Event<Namespace>, watcher::Error>>;

/// Event source backed by a watch on all namespaces in the cluster.
///
/// The watch re-lists after reconnection, so notifications are delivered
/// at-least-once; a namespace modification is indistinguishable from a
/// duplicate creation notification and is delivered as one.
pub struct NamespaceWatch {
    stream: NamespaceStream,
}

impl NamespaceWatch {
    pub fn new(client: Client) -> Self {
        let namespaces: Api<Namespace> = Api::all(client);
        let stream = watcher(namespaces, watcher::Config::default())
            .default_backoff()
            .boxed();

        Self { stream }
    }

    #[cfg(test)]
    fn from_stream(stream: NamespaceStream) -> Self {
        Self { stream }
    }
}

#[async_trait]
impl EventSource for NamespaceWatch {
    async fn next_event(&mut self) -> Option<WatchEvent> {
        while let Some(item) = self.stream.next().await {
            match item {
                Ok(watcher::Event::Apply(ns)) | Ok(watcher::Event::InitApply(ns)) => {
                    return Some(WatchEvent::Namespace(NamespaceEvent {
                        name: ns.name_any(),
                        kind: EventKind::Created,
                    }));
                }
                Ok(watcher::Event::Delete(ns)) => {
                    return Some(WatchEvent::Namespace(NamespaceEvent {
                        name: ns.name_any(),
                        kind: EventKind::Deleted,
                    }));
                }
                Ok(watcher::Event::InitDone) => return Some(WatchEvent::Synced),
                Ok(watcher::Event::Init) => {
                    debug!("Namespace watch (re)listing started");
                }
                Err(e) => {
                    // The watcher re-lists and recovers on its own
                    warn!("Namespace watch error: {}", e);
                }
            }
        }

        None
    }
}
