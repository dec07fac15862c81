// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resolution Domain Models
//!
//! Core domain concepts for the reference resolution layer: the entity-type
//! taxonomy that registries are partitioned by, and value objects with
//! validation invariants.
//!
//! # Value Objects with Invariants
//!
//! - [`LogicalName`] - non-empty operator-chosen entity name
//! - [`ResourceId`] - non-empty backend-assigned identifier
//! - [`Workspace`] - non-empty environment partition name
//! - [`Cidr`] - IPv4/IPv6 destination block with mandatory prefix
//! - [`EntityType`] - closed networking entity taxonomy

pub mod entity_type;
pub mod identifiers;
pub mod network;

// Re-export value objects
pub use entity_type::EntityType;
pub use identifiers::{IdentityError, LogicalName, ResourceId, Workspace};
pub use network::{Cidr, NetworkError};
