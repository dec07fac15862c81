// Copyright (c) 2025 - Cowboy AI, Inc.
//! Entity Specifications
//!
//! An [`UnresolvedSpec`] is the operator-authored description of an entity
//! to create: a field map in which some fields hold logical references
//! (a single name, or an ordered list of names) and the rest are literals
//! (CIDR blocks, booleans, tag maps) that pass through untouched.
//!
//! Which fields are references is declared explicitly via
//! [`ReferenceFields`]; undeclared fields are never resolved, even when
//! their value happens to look like a registered name. This keeps opaque
//! literals (a protocol number, a CIDR) from being resolved by accident.
//!
//! Resolution is all-or-nothing: either every declared reference resolves
//! and a [`ResolvedSpec`] is produced, or an error is raised and no
//! half-resolved spec ever reaches the provisioning backend.

use crate::domain::{EntityType, LogicalName, Workspace};
use crate::errors::{ResolutionError, ResolutionResult};
use crate::registry::WorkspaceRegistry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Describes the JSON shape of a value, for error messages
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Binding of one reference field to its registry and output field name
///
/// The output name differs from the source name by convention: an operator
/// writes `subnet_name`, the backend expects `subnet_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBinding {
    /// Registry the field's names resolve against
    pub entity_type: EntityType,
    /// Field name the resolved identifier(s) are written under
    pub target: String,
}

/// Declaration of which specification fields are logical references
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceFields {
    bindings: BTreeMap<String, FieldBinding>,
}

impl ReferenceFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `source` as a reference into `entity_type`'s registry,
    /// resolved into the `target` field
    pub fn bind(
        mut self,
        source: impl Into<String>,
        entity_type: EntityType,
        target: impl Into<String>,
    ) -> Self {
        self.bindings.insert(
            source.into(),
            FieldBinding {
                entity_type,
                target: target.into(),
            },
        );
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldBinding)> {
        self.bindings.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Operator-authored specification with unresolved logical references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedSpec {
    workspace: Workspace,
    name: LogicalName,
    fields: BTreeMap<String, Value>,
}

impl UnresolvedSpec {
    /// Create an empty specification for an entity named `name` in
    /// `workspace`
    pub fn new(workspace: Workspace, name: LogicalName) -> Self {
        Self {
            workspace,
            name,
            fields: BTreeMap::new(),
        }
    }

    /// Add a field (reference or literal)
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Workspace this specification resolves within
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Logical name of the entity being specified
    pub fn name(&self) -> &LogicalName {
        &self.name
    }

    /// Look up a field value
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Resolve every declared reference field against `registry`
    ///
    /// Declared fields holding a single name are replaced by a single
    /// identifier; fields holding a list of names are replaced by the
    /// identifier list in the same order. Undeclared fields pass through
    /// unchanged. The registry is expected to be the one owning this
    /// specification's workspace; [`crate::resolver::NameResolver`] selects
    /// it that way.
    pub fn resolve(
        &self,
        registry: &WorkspaceRegistry,
        reference_fields: &ReferenceFields,
    ) -> ResolutionResult<ResolvedSpec> {
        let mut fields = self.fields.clone();

        for (source, binding) in reference_fields.iter() {
            let value =
                fields
                    .remove(source)
                    .ok_or_else(|| ResolutionError::InvalidFieldMapping {
                        spec: self.name.clone(),
                        field: source.clone(),
                    })?;

            let resolved = match value {
                Value::String(raw) => {
                    let name = LogicalName::new(raw)?;
                    let id = registry.resolve(binding.entity_type, &name)?;
                    Value::String(id.as_str().to_string())
                }
                Value::Array(items) => {
                    let mut names = Vec::with_capacity(items.len());
                    for item in &items {
                        match item {
                            Value::String(raw) => names.push(LogicalName::new(raw.clone())?),
                            other => {
                                return Err(ResolutionError::InvalidReferenceValue {
                                    field: source.clone(),
                                    reason: format!(
                                        "list elements must be logical names, found {}",
                                        value_kind(other)
                                    ),
                                })
                            }
                        }
                    }
                    let ids = registry.resolve_many(binding.entity_type, &names)?;
                    Value::Array(
                        ids.into_iter()
                            .map(|id| Value::String(id.as_str().to_string()))
                            .collect(),
                    )
                }
                other => {
                    return Err(ResolutionError::InvalidReferenceValue {
                        field: source.clone(),
                        reason: format!(
                            "expected a logical name or list of names, found {}",
                            value_kind(&other)
                        ),
                    })
                }
            };

            fields.insert(binding.target.clone(), resolved);
        }

        Ok(ResolvedSpec {
            workspace: self.workspace.clone(),
            name: self.name.clone(),
            fields,
        })
    }
}

/// Specification with every reference replaced by backend identifiers,
/// ready to hand to the provisioning backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSpec {
    workspace: Workspace,
    name: LogicalName,
    fields: BTreeMap<String, Value>,
}

impl ResolvedSpec {
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn name(&self) -> &LogicalName {
        &self.name
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }
}
