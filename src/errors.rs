// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for resolution operations
//!
//! Every failure here is terminal for the enclosing provisioning stage: a
//! missing name is a configuration defect, not a transient condition, so
//! nothing in this taxonomy is retried or defaulted.

use crate::domain::{EntityType, IdentityError, LogicalName, NetworkError, ResourceId, Workspace};
use thiserror::Error;

/// Errors that can occur while registering or resolving references
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// A logical name has no registered identifier in the expected
    /// workspace/entity-type scope
    #[error("unresolved reference: no {entity_type} named '{name}' in workspace '{workspace}'")]
    UnresolvedReference {
        entity_type: EntityType,
        workspace: Workspace,
        name: LogicalName,
    },

    /// The same logical name was registered twice with conflicting ids
    #[error(
        "duplicate registration: {entity_type} '{name}' in workspace '{workspace}' \
         is already bound to '{existing}', refusing rebind to '{attempted}'"
    )]
    DuplicateRegistration {
        entity_type: EntityType,
        workspace: Workspace,
        name: LogicalName,
        existing: ResourceId,
        attempted: ResourceId,
    },

    /// A reference-field mapping names a field absent from the specification
    #[error("invalid field mapping: specification '{spec}' has no field '{field}'")]
    InvalidFieldMapping { spec: LogicalName, field: String },

    /// A declared reference field holds something other than a logical name
    /// or a list of logical names
    #[error("invalid reference value in field '{field}': {reason}")]
    InvalidReferenceValue { field: String, reason: String },

    /// A route supplied a target key without a target type
    #[error(
        "ambiguous target type: route to '{destination}' supplies target_key \
         '{target_key}' but no target_type"
    )]
    AmbiguousTargetType {
        destination: String,
        target_key: String,
    },

    /// Identity value object validation error
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Network value object validation error
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Result type for resolution operations
pub type ResolutionResult<T> = Result<T, ResolutionError>;
