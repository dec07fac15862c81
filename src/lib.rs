// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reference resolution layer for declarative infrastructure provisioning
//!
//! This crate translates logical-name references embedded in entity
//! specifications into the opaque identifiers a provisioning backend
//! assigns, using per-workspace registries populated as each provisioning
//! stage completes. It is the wiring between stages, not the engine:
//! resource creation, ordering, retries, and durable state all belong to
//! the surrounding backend.
//!
//! ## Key Concepts
//!
//! - **Registries**: append-only name→id maps, one per entity type per
//!   workspace, populated by the backend after each create succeeds
//! - **Specifications**: operator-authored field maps whose declared
//!   reference fields resolve to identifiers; literals pass through
//! - **Routes**: target-tagged specs where `igw`/`nat` select a registry
//!   and other tags pass the key through as a literal identifier
//! - **Fail-fast**: a missing name is a configuration defect; resolution
//!   either fully succeeds or raises with the exact workspace, entity
//!   type, and name that failed
//!
//! ## Usage
//!
//! ```rust
//! use provision_resolver::{
//!     EntityType, LogicalName, NameResolver, ReferenceFields, ResourceId,
//!     UnresolvedSpec, Workspace,
//! };
//!
//! let resolver = NameResolver::new();
//! let ws = Workspace::new("default").unwrap();
//!
//! // The backend registers each entity as it is created.
//! resolver.register(
//!     EntityType::Vpc,
//!     &ws,
//!     LogicalName::new("app_vpc").unwrap(),
//!     ResourceId::new("vpc-001").unwrap(),
//! ).unwrap();
//!
//! // Later stages resolve references by name.
//! let spec = UnresolvedSpec::new(ws.clone(), LogicalName::new("pub_rt").unwrap())
//!     .with_field("vpc_name", "app_vpc");
//! let refs = ReferenceFields::new().bind("vpc_name", EntityType::Vpc, "vpc_id");
//!
//! let resolved = resolver.resolve_spec(&spec, &refs).unwrap();
//! assert_eq!(resolved.field("vpc_id"), Some(&serde_json::json!("vpc-001")));
//! ```

pub mod domain;
pub mod errors;
pub mod events;
pub mod registry;
pub mod resolver;
pub mod route;
pub mod spec;

// Re-export commonly used types
pub use domain::{Cidr, EntityType, IdentityError, LogicalName, NetworkError, ResourceId, Workspace};
pub use errors::{ResolutionError, ResolutionResult};
pub use events::{NameRegistered, RegistryEvent};
pub use registry::WorkspaceRegistry;
pub use resolver::NameResolver;
pub use route::{ResolvedRoute, RouteSpec, RouteTarget};
pub use spec::{FieldBinding, ReferenceFields, ResolvedSpec, UnresolvedSpec};
