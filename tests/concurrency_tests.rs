// Copyright (c) 2025 - Cowboy AI, Inc.
//! Concurrency tests for registry registration
//!
//! Producer stages may register concurrently within one workspace. The
//! registry's check-and-insert must be a single atomic step: racing
//! conflicting registrations for the same name admit exactly one winner,
//! and readers never observe a half-inserted binding.

use std::sync::Arc;
use std::thread;

use provision_resolver::{
    EntityType, LogicalName, NameResolver, ResolutionError, ResourceId, Workspace,
    WorkspaceRegistry,
};

fn workspace(s: &str) -> Workspace {
    Workspace::new(s).unwrap()
}

fn name(s: &str) -> LogicalName {
    LogicalName::new(s).unwrap()
}

fn id(s: &str) -> ResourceId {
    ResourceId::new(s).unwrap()
}

#[test]
fn test_concurrent_registration_of_distinct_names() {
    let registry = Arc::new(WorkspaceRegistry::new(workspace("default")));

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..50 {
                    registry
                        .register(
                            EntityType::Subnet,
                            name(&format!("subnet_{worker}_{i}")),
                            id(&format!("subnet-{worker}-{i}")),
                        )
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), 8 * 50);
    for worker in 0..8 {
        for i in 0..50 {
            assert_eq!(
                registry
                    .resolve(EntityType::Subnet, &name(&format!("subnet_{worker}_{i}")))
                    .unwrap(),
                id(&format!("subnet-{worker}-{i}"))
            );
        }
    }
}

#[test]
fn test_racing_conflicting_registrations_admit_one_winner() {
    let registry = Arc::new(WorkspaceRegistry::new(workspace("default")));

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry.register(
                    EntityType::Vpc,
                    name("main_vpc"),
                    id(&format!("vpc-{worker}")),
                )
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    for result in &results {
        if let Err(err) = result {
            assert!(matches!(
                err,
                ResolutionError::DuplicateRegistration { .. }
            ));
        }
    }

    // The winner's binding is the one retained.
    let winner = registry.resolve(EntityType::Vpc, &name("main_vpc")).unwrap();
    assert!(results.iter().any(|r| r.is_ok()));
    assert!(winner.as_str().starts_with("vpc-"));
    assert_eq!(registry.take_events().len(), 1);
}

#[test]
fn test_racing_identical_registrations_all_succeed() {
    let registry = Arc::new(WorkspaceRegistry::new(workspace("default")));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.register(EntityType::Vpc, name("main_vpc"), id("vpc-001")))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(registry.len(), 1);
    // Exactly one registration event despite eight successful calls.
    assert_eq!(registry.take_events().len(), 1);
}

#[test]
fn test_readers_race_writers_on_unrelated_names() {
    let registry = Arc::new(WorkspaceRegistry::new(workspace("default")));
    registry
        .register(EntityType::Vpc, name("main_vpc"), id("vpc-001"))
        .unwrap();

    let writer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for i in 0..200 {
                registry
                    .register(
                        EntityType::Subnet,
                        name(&format!("subnet_{i}")),
                        id(&format!("subnet-{i}")),
                    )
                    .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..200 {
                    // Must always see the fully present binding.
                    assert_eq!(
                        registry.resolve(EntityType::Vpc, &name("main_vpc")).unwrap(),
                        id("vpc-001")
                    );
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
}

#[test]
fn test_parallel_workspaces_do_not_interfere() {
    let resolver = Arc::new(NameResolver::new());

    let handles: Vec<_> = ["default", "qe", "prod"]
        .into_iter()
        .map(|ws| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                let ws = workspace(ws);
                for i in 0..50 {
                    resolver
                        .register(
                            EntityType::Subnet,
                            &ws,
                            name(&format!("subnet_{i}")),
                            id(&format!("subnet-{}-{i}", ws.as_str())),
                        )
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for ws in ["default", "qe", "prod"] {
        let ws = workspace(ws);
        assert_eq!(
            resolver
                .resolve(EntityType::Subnet, &ws, &name("subnet_0"))
                .unwrap(),
            id(&format!("subnet-{}-0", ws.as_str()))
        );
    }
}
