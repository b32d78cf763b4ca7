// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Single-consumer control loop wiring the namespace watch to the reconciler.

use crate::error::{QuartermasterError, Result};
use crate::events::{EventSource, NamespaceEvent, WatchEvent};
use crate::reconciler::{QuotaReconciler, QuotaStore};
use std::mem;
use tracing::{debug, error, info};

/// Loop state: buffering until the initial listing is complete, then live.
enum LoopState {
    Syncing { pending: Vec<NamespaceEvent> },
    Running,
}

/// Consumes namespace events one at a time and hands them to the reconciler.
pub struct ControlLoop<E, S> {
    events: E,
    reconciler: QuotaReconciler<S>,
    state: LoopState,
}

impl<E: EventSource, S: QuotaStore> ControlLoop<E, S> {
    pub fn new(events: E, reconciler: QuotaReconciler<S>) -> Self {
        Self {
            events,
            reconciler,
            state: LoopState::Syncing {
                pending: Vec::new(),
            },
        }
    }

    /// Consume events until the source ends or a reconciliation failure stops
    /// the loop.
    pub async fn run(mut self) -> Result<()> {
        info!("Control loop started, waiting for initial namespace listing");

        while let Some(event) = self.events.next_event().await {
            match event {
                WatchEvent::Namespace(ev) => self.handle_namespace(ev).await?,
                WatchEvent::Synced => self.handle_synced().await?,
            }
        }

        info!("Event source ended, stopping control loop");
        Ok(())
    }

    async fn handle_namespace(&mut self, event: NamespaceEvent) -> Result<()> {
        if let LoopState::Syncing { pending } = &mut self.state {
            debug!(
                "Buffering event for namespace {} until the initial listing completes",
                event.name
            );
            pending.push(event);
            return Ok(());
        }

        self.dispatch(event).await
    }

    async fn handle_synced(&mut self) -> Result<()> {
        match mem::replace(&mut self.state, LoopState::Running) {
            LoopState::Syncing { pending } => {
                info!(
                    "Initial namespace listing complete, dispatching {} buffered events",
                    pending.len()
                );
                for event in pending {
                    self.dispatch(event).await?;
                }
                Ok(())
            }
            LoopState::Running => {
                debug!("Watch re-synchronized");
                Ok(())
            }
        }
    }

    /// Error policy: a read failure drops the event, anything else stops the
    /// loop.
    async fn dispatch(&self, event: NamespaceEvent) -> Result<()> {
        match self.reconciler.reconcile(&event).await {
            Ok(()) => Ok(()),
            Err(e @ QuartermasterError::ListQuotasError(..)) => {
                error!("Dropping event for namespace {}: {}", event.name, e);
                Ok(())
            }
            Err(e) => {
                error!("Reconciliation failed for namespace {}: {}", event.name, e);
                Err(e)
            }
        }
    }
}
