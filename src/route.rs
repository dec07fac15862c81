// Copyright (c) 2025 - Cowboy AI, Inc.
//! Route Specifications
//!
//! A route names its target indirectly: a `target_type` tag selects which
//! registry the `target_key` resolves against (`igw` → internet gateways,
//! `nat` → NAT gateways). Any other non-empty tag is a literal passthrough:
//! the key is taken to already be a backend identifier (a peering
//! connection or transit-gateway attachment id supplied directly by the
//! operator) and no lookup is attempted. A missing tag alongside a present
//! key is almost always an authoring mistake and is rejected rather than
//! defaulted to passthrough.

use crate::domain::{Cidr, EntityType, LogicalName, ResourceId};
use crate::errors::{ResolutionError, ResolutionResult};
use crate::registry::WorkspaceRegistry;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Classified route target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Resolve against the internet gateway registry
    InternetGateway(LogicalName),
    /// Resolve against the NAT gateway registry
    NatGateway(LogicalName),
    /// Already a backend identifier; no lookup
    Literal(ResourceId),
}

/// Operator-authored route with an unresolved target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    destination: Cidr,
    #[serde(default)]
    target_type: Option<String>,
    target_key: String,
}

impl RouteSpec {
    pub fn new(
        destination: Cidr,
        target_type: impl Into<Option<String>>,
        target_key: impl Into<String>,
    ) -> Self {
        Self {
            destination,
            target_type: target_type.into(),
            target_key: target_key.into(),
        }
    }

    /// Destination CIDR block
    pub fn destination(&self) -> Cidr {
        self.destination
    }

    /// Classify the target by its `target_type` tag
    ///
    /// An unrecognized tag is logged and passed through so that operators
    /// can supply identifiers this layer does not natively model; the log
    /// line is what makes a typo (`"ngw"` for `"nat"`) visible.
    pub fn target(&self) -> ResolutionResult<RouteTarget> {
        let tag = self.target_type.as_deref().unwrap_or("").trim();

        if tag.is_empty() {
            return Err(ResolutionError::AmbiguousTargetType {
                destination: self.destination.to_string(),
                target_key: self.target_key.clone(),
            });
        }

        match tag {
            "igw" => Ok(RouteTarget::InternetGateway(LogicalName::new(
                self.target_key.clone(),
            )?)),
            "nat" => Ok(RouteTarget::NatGateway(LogicalName::new(
                self.target_key.clone(),
            )?)),
            other => {
                warn!(
                    target_type = other,
                    target_key = %self.target_key,
                    destination = %self.destination,
                    "unrecognized route target type, treating target_key as a literal identifier"
                );
                Ok(RouteTarget::Literal(ResourceId::new(
                    self.target_key.clone(),
                )?))
            }
        }
    }

    /// Resolve the target against `registry`, producing a route the
    /// provisioning backend can create directly
    pub fn resolve(&self, registry: &WorkspaceRegistry) -> ResolutionResult<ResolvedRoute> {
        let target_id = match self.target()? {
            RouteTarget::InternetGateway(name) => {
                registry.resolve(EntityType::InternetGateway, &name)?
            }
            RouteTarget::NatGateway(name) => registry.resolve(EntityType::NatGateway, &name)?,
            RouteTarget::Literal(id) => id,
        };

        Ok(ResolvedRoute {
            destination: self.destination,
            target_id,
        })
    }
}

/// Route with its target fully resolved to a backend identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRoute {
    pub destination: Cidr,
    pub target_id: ResourceId,
}
