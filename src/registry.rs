// Copyright (c) 2025 - Cowboy AI, Inc.
//! Workspace Entity Registry
//!
//! One [`WorkspaceRegistry`] owns every name→id binding for a single
//! workspace, partitioned by entity type. Bindings are append-only and
//! write-once: once a name is bound to an identifier it stays bound for the
//! remainder of the provisioning run, and a conflicting re-registration is
//! rejected. Re-registering the identical id is tolerated as idempotent so
//! that reapplying a run is not treated as a conflict.
//!
//! Producer stages may register concurrently within one workspace, so the
//! check-and-insert is a single atomic step under a write lock. Readers
//! never observe a partially inserted binding.

use crate::domain::{EntityType, LogicalName, ResourceId, Workspace};
use crate::errors::{ResolutionError, ResolutionResult};
use crate::events::{NameRegistered, RegistryEvent};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError, RwLock};
use tracing::debug;

/// Binding key: registries are namespaced per entity type, so a subnet and
/// a security group may share a logical name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RegistryKey {
    entity_type: EntityType,
    name: LogicalName,
}

/// Name→id registry for a single workspace
///
/// Created empty at the start of a workspace's provisioning run, populated
/// incrementally as entity-producing stages complete, read by every later
/// stage's resolution step, and discarded at run end. Durable state is the
/// provisioning backend's concern, never this layer's.
#[derive(Debug)]
pub struct WorkspaceRegistry {
    workspace: Workspace,
    entries: RwLock<HashMap<RegistryKey, ResourceId>>,
    events: Mutex<Vec<RegistryEvent>>,
}

impl WorkspaceRegistry {
    /// Create an empty registry for one workspace
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            entries: RwLock::new(HashMap::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    /// The workspace this registry is scoped to
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Record a name→id binding
    ///
    /// Atomic check-and-insert: either the binding is recorded (or already
    /// present with the identical id), or the call fails with
    /// [`ResolutionError::DuplicateRegistration`] and the existing binding
    /// is retained.
    pub fn register(
        &self,
        entity_type: EntityType,
        name: LogicalName,
        id: ResourceId,
    ) -> ResolutionResult<()> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        match entries.entry(RegistryKey {
            entity_type,
            name: name.clone(),
        }) {
            Entry::Occupied(slot) => {
                if *slot.get() == id {
                    debug!(
                        workspace = %self.workspace,
                        entity_type = %entity_type,
                        name = %name,
                        id = %id,
                        "idempotent re-registration"
                    );
                    Ok(())
                } else {
                    Err(ResolutionError::DuplicateRegistration {
                        entity_type,
                        workspace: self.workspace.clone(),
                        name,
                        existing: slot.get().clone(),
                        attempted: id,
                    })
                }
            }
            Entry::Vacant(slot) => {
                debug!(
                    workspace = %self.workspace,
                    entity_type = %entity_type,
                    name = %name,
                    id = %id,
                    "registered entity"
                );
                slot.insert(id.clone());
                // Appended while the write lock is held so the event log
                // order matches insertion order.
                self.events
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(RegistryEvent::NameRegistered(NameRegistered::new(
                        self.workspace.clone(),
                        entity_type,
                        name,
                        id,
                    )));
                Ok(())
            }
        }
    }

    /// Look up the identifier bound to a logical name
    pub fn resolve(
        &self,
        entity_type: EntityType,
        name: &LogicalName,
    ) -> ResolutionResult<ResourceId> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&RegistryKey {
                entity_type,
                name: name.clone(),
            })
            .cloned()
            .ok_or_else(|| ResolutionError::UnresolvedReference {
                entity_type,
                workspace: self.workspace.clone(),
                name: name.clone(),
            })
    }

    /// Resolve an ordered sequence of names, preserving order and
    /// cardinality
    ///
    /// Fails with the first unresolved name; a partial id list is never
    /// returned, since handing one to a provisioning backend would create
    /// resources against the wrong references.
    pub fn resolve_many(
        &self,
        entity_type: EntityType,
        names: &[LogicalName],
    ) -> ResolutionResult<Vec<ResourceId>> {
        names
            .iter()
            .map(|name| self.resolve(entity_type, name))
            .collect()
    }

    /// Whether a binding exists for this name
    pub fn contains(&self, entity_type: EntityType, name: &LogicalName) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&RegistryKey {
                entity_type,
                name: name.clone(),
            })
    }

    /// Number of bindings across all entity types
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the registry holds no bindings
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain the accumulated registration events
    pub fn take_events(&self) -> Vec<RegistryEvent> {
        std::mem::take(
            &mut *self
                .events
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}
