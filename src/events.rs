// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace lifecycle notifications and the contract for their source.

use async_trait::async_trait;

/// Kind of namespace lifecycle change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Created,
    Deleted,
}

/// One namespace lifecycle notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceEvent {
    pub name: String,
    pub kind: EventKind,
}

/// What a watch can deliver: a namespace notification, or the signal that the
/// initial full listing is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    Namespace(NamespaceEvent),
    Synced,
}

/// Produces namespace notifications, at-least-once, in order per namespace.
#[async_trait]
pub trait EventSource {
    /// The next notification, or None once the source is exhausted.
    async fn next_event(&mut self) -> Option<WatchEvent>;
}
