// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Registry Resolution
//!
//! Verifies the registry contract for all valid inputs: registration
//! round-trips, write-once conflict detection, order/cardinality
//! preservation, and workspace isolation.

use proptest::prelude::*;

use provision_resolver::{
    EntityType, LogicalName, NameResolver, ResolutionError, ResourceId, Workspace,
    WorkspaceRegistry,
};

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary entity type from the closed taxonomy
fn entity_type() -> impl Strategy<Value = EntityType> {
    prop::sample::select(EntityType::ALL.to_vec())
}

/// Non-empty logical names in the shape operators actually write
fn logical_name() -> impl Strategy<Value = LogicalName> {
    "[a-z][a-z0-9_]{0,15}".prop_map(|s| LogicalName::new(s).unwrap())
}

/// Non-empty backend identifiers
fn resource_id() -> impl Strategy<Value = ResourceId> {
    "[a-z]{2,4}-[0-9a-f]{1,12}".prop_map(|s| ResourceId::new(s).unwrap())
}

/// Workspace names
fn ws_name() -> impl Strategy<Value = Workspace> {
    "[a-z]{1,8}".prop_map(|s| Workspace::new(s).unwrap())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// After register(T, W, N, I), resolve(T, W, N) == I
    #[test]
    fn prop_register_resolve_round_trip(
        entity_type in entity_type(),
        ws in ws_name(),
        name in logical_name(),
        id in resource_id(),
    ) {
        let registry = WorkspaceRegistry::new(ws);
        registry.register(entity_type, name.clone(), id.clone()).unwrap();
        prop_assert_eq!(registry.resolve(entity_type, &name).unwrap(), id);
    }

    /// Resolving an unregistered name fails naming T, W, N
    #[test]
    fn prop_unregistered_resolve_names_scope(
        entity_type in entity_type(),
        ws in ws_name(),
        name in logical_name(),
    ) {
        let registry = WorkspaceRegistry::new(ws.clone());
        let err = registry.resolve(entity_type, &name).unwrap_err();
        prop_assert_eq!(
            err,
            ResolutionError::UnresolvedReference { entity_type, workspace: ws, name }
        );
    }

    /// Registering twice with the same id is observationally the same as
    /// registering once
    #[test]
    fn prop_idempotent_registration(
        entity_type in entity_type(),
        ws in ws_name(),
        name in logical_name(),
        id in resource_id(),
    ) {
        let registry = WorkspaceRegistry::new(ws);
        registry.register(entity_type, name.clone(), id.clone()).unwrap();
        registry.register(entity_type, name.clone(), id.clone()).unwrap();
        prop_assert_eq!(registry.len(), 1);
        prop_assert_eq!(registry.take_events().len(), 1);
        prop_assert_eq!(registry.resolve(entity_type, &name).unwrap(), id);
    }

    /// A conflicting re-registration fails and the first binding survives
    #[test]
    fn prop_conflict_retains_first_binding(
        entity_type in entity_type(),
        ws in ws_name(),
        name in logical_name(),
        first in resource_id(),
        second in resource_id(),
    ) {
        prop_assume!(first != second);

        let registry = WorkspaceRegistry::new(ws);
        registry.register(entity_type, name.clone(), first.clone()).unwrap();

        let err = registry.register(entity_type, name.clone(), second).unwrap_err();
        let is_duplicate = matches!(err, ResolutionError::DuplicateRegistration { .. });
        prop_assert!(is_duplicate);
        prop_assert_eq!(registry.resolve(entity_type, &name).unwrap(), first);
    }

    /// resolve_many preserves input order and cardinality
    #[test]
    fn prop_resolve_many_preserves_order(
        entity_type in entity_type(),
        ws in ws_name(),
        names in prop::collection::btree_set("[a-z][a-z0-9_]{0,15}", 1..12),
    ) {
        let registry = WorkspaceRegistry::new(ws);
        let names: Vec<LogicalName> = names
            .into_iter()
            .map(|s| LogicalName::new(s).unwrap())
            .collect();
        let ids: Vec<ResourceId> = names
            .iter()
            .enumerate()
            .map(|(i, _)| ResourceId::new(format!("res-{i}")).unwrap())
            .collect();

        for (name, id) in names.iter().zip(&ids) {
            registry.register(entity_type, name.clone(), id.clone()).unwrap();
        }

        // Resolve in reverse to prove output order follows input order,
        // not registration order.
        let reversed: Vec<LogicalName> = names.iter().rev().cloned().collect();
        let resolved = registry.resolve_many(entity_type, &reversed).unwrap();
        let expected: Vec<ResourceId> = ids.into_iter().rev().collect();
        prop_assert_eq!(resolved, expected);
    }

    /// A registration in one workspace never satisfies another workspace
    #[test]
    fn prop_cross_workspace_isolation(
        entity_type in entity_type(),
        ws_a in ws_name(),
        ws_b in ws_name(),
        name in logical_name(),
        id in resource_id(),
    ) {
        prop_assume!(ws_a != ws_b);

        let resolver = NameResolver::new();
        resolver.register(entity_type, &ws_a, name.clone(), id).unwrap();

        let err = resolver.resolve(entity_type, &ws_b, &name).unwrap_err();
        let is_unresolved = matches!(err, ResolutionError::UnresolvedReference { .. });
        prop_assert!(is_unresolved);
    }
}
