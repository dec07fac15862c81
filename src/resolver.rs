// Copyright (c) 2025 - Cowboy AI, Inc.
//! Name Resolver
//!
//! [`NameResolver`] is the aggregate root of the resolution layer: it owns
//! one [`WorkspaceRegistry`] per workspace and routes every operation to
//! the registry of the workspace it targets. Registries never leak across
//! workspaces, which enforces the no-cross-workspace-resolution rule
//! structurally rather than by convention.
//!
//! The resolver holds no ordering logic. Callers populate registries in
//! dependency order (VPC → subnet/SG/IGW → route table/NAT → associations
//! → cluster → node group); the resolver only reads whatever is populated
//! at call time and fails clearly when a needed binding is absent.

use crate::domain::{EntityType, LogicalName, ResourceId, Workspace};
use crate::errors::ResolutionResult;
use crate::events::RegistryEvent;
use crate::registry::WorkspaceRegistry;
use crate::route::{ResolvedRoute, RouteSpec};
use crate::spec::{ReferenceFields, ResolvedSpec, UnresolvedSpec};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Per-workspace registry owner and resolution entry point
#[derive(Debug, Default)]
pub struct NameResolver {
    workspaces: RwLock<HashMap<Workspace, Arc<WorkspaceRegistry>>>,
}

impl NameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry owned for `workspace`, if any registration has created
    /// it yet
    pub fn registry(&self, workspace: &Workspace) -> Option<Arc<WorkspaceRegistry>> {
        self.workspaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(workspace)
            .cloned()
    }

    /// Workspaces that currently own a registry
    pub fn workspaces(&self) -> Vec<Workspace> {
        self.workspaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    fn registry_or_create(&self, workspace: &Workspace) -> Arc<WorkspaceRegistry> {
        if let Some(registry) = self.registry(workspace) {
            return registry;
        }
        self.workspaces
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(workspace.clone())
            .or_insert_with(|| Arc::new(WorkspaceRegistry::new(workspace.clone())))
            .clone()
    }

    /// Registry to resolve against: the owned one, or a fresh empty one
    /// when the workspace has never seen a registration. An absent
    /// workspace and an empty registry are indistinguishable to callers;
    /// both report the missing binding.
    fn reading_registry(&self, workspace: &Workspace) -> Arc<WorkspaceRegistry> {
        self.registry(workspace)
            .unwrap_or_else(|| Arc::new(WorkspaceRegistry::new(workspace.clone())))
    }

    /// Record a name→id binding in `workspace`'s registry, creating the
    /// registry on first use
    pub fn register(
        &self,
        entity_type: EntityType,
        workspace: &Workspace,
        name: LogicalName,
        id: ResourceId,
    ) -> ResolutionResult<()> {
        self.registry_or_create(workspace)
            .register(entity_type, name, id)
    }

    /// Look up the identifier bound to a logical name
    pub fn resolve(
        &self,
        entity_type: EntityType,
        workspace: &Workspace,
        name: &LogicalName,
    ) -> ResolutionResult<ResourceId> {
        self.reading_registry(workspace).resolve(entity_type, name)
    }

    /// Resolve an ordered sequence of names, preserving order and
    /// cardinality; fails fast on the first missing name
    pub fn resolve_many(
        &self,
        entity_type: EntityType,
        workspace: &Workspace,
        names: &[LogicalName],
    ) -> ResolutionResult<Vec<ResourceId>> {
        self.reading_registry(workspace)
            .resolve_many(entity_type, names)
    }

    /// Resolve a specification against the workspace it declares
    pub fn resolve_spec(
        &self,
        spec: &UnresolvedSpec,
        reference_fields: &ReferenceFields,
    ) -> ResolutionResult<ResolvedSpec> {
        self.resolve_spec_in(spec.workspace().clone(), spec, reference_fields)
    }

    /// Resolve a specification against an explicit workspace override
    pub fn resolve_spec_in(
        &self,
        workspace: Workspace,
        spec: &UnresolvedSpec,
        reference_fields: &ReferenceFields,
    ) -> ResolutionResult<ResolvedSpec> {
        spec.resolve(&self.reading_registry(&workspace), reference_fields)
    }

    /// Resolve a route's target within `workspace`
    pub fn resolve_route(
        &self,
        workspace: &Workspace,
        route: &RouteSpec,
    ) -> ResolutionResult<ResolvedRoute> {
        route.resolve(&self.reading_registry(workspace))
    }

    /// Drain the registration events accumulated for `workspace`
    pub fn take_events(&self, workspace: &Workspace) -> Vec<RegistryEvent> {
        self.registry(workspace)
            .map(|registry| registry.take_events())
            .unwrap_or_default()
    }
}
