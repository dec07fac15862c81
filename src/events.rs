// Copyright (c) 2025 - Cowboy AI, Inc.
//! Registry Events
//!
//! Every successful new registration is recorded as an immutable event on
//! the owning registry. Events are observability output for the surrounding
//! pipeline (audit of what got bound when); the resolver itself never
//! replays them.

use crate::domain::{EntityType, LogicalName, ResourceId, Workspace};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A name→id binding was recorded in a workspace registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRegistered {
    /// Unique event ID
    pub event_id: Uuid,
    /// Workspace the binding belongs to
    pub workspace: Workspace,
    /// Registry the binding was recorded in
    pub entity_type: EntityType,
    /// Operator-chosen logical name
    pub name: LogicalName,
    /// Backend-assigned identifier
    pub resource_id: ResourceId,
    /// When the binding was recorded
    pub registered_at: DateTime<Utc>,
}

impl NameRegistered {
    pub fn new(
        workspace: Workspace,
        entity_type: EntityType,
        name: LogicalName,
        resource_id: ResourceId,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            workspace,
            entity_type,
            name,
            resource_id,
            registered_at: Utc::now(),
        }
    }
}

/// Events emitted by workspace registries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A new name→id binding was recorded
    NameRegistered(NameRegistered),
}
