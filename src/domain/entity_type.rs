// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provisionable Entity Type Taxonomy
//!
//! Defines the closed set of networking entity types that the resolution
//! layer keeps registries for. Each type owns an independent name→id
//! namespace within a workspace, so a subnet and a security group may share
//! a logical name without colliding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Networking entity type taxonomy
///
/// One registry exists per entity type per workspace. The enumeration is
/// closed: downstream consumers (cluster specs, node-group specs) reference
/// these types but do not extend them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// Virtual private cloud
    Vpc,
    /// Subnet within a VPC
    Subnet,
    /// Security group
    SecurityGroup,
    /// Route table
    RouteTable,
    /// Internet gateway
    InternetGateway,
    /// NAT gateway
    NatGateway,
    /// Elastic IP allocation
    ElasticIp,
}

impl EntityType {
    /// All entity types, in conventional provisioning order
    /// (producers of a type are expected to run before its consumers).
    pub const ALL: [EntityType; 7] = [
        Self::Vpc,
        Self::Subnet,
        Self::SecurityGroup,
        Self::RouteTable,
        Self::InternetGateway,
        Self::NatGateway,
        Self::ElasticIp,
    ];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vpc => "vpc",
            Self::Subnet => "subnet",
            Self::SecurityGroup => "security_group",
            Self::RouteTable => "route_table",
            Self::InternetGateway => "internet_gateway",
            Self::NatGateway => "nat_gateway",
            Self::ElasticIp => "elastic_ip",
        }
    }

    /// Parse from a string representation, accepting common short forms
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vpc" => Some(Self::Vpc),
            "subnet" => Some(Self::Subnet),
            "security_group" | "sg" => Some(Self::SecurityGroup),
            "route_table" | "rtb" => Some(Self::RouteTable),
            "internet_gateway" | "igw" => Some(Self::InternetGateway),
            "nat_gateway" | "nat" => Some(Self::NatGateway),
            "elastic_ip" | "eip" => Some(Self::ElasticIp),
            _ => None,
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Vpc => "VPC",
            Self::Subnet => "Subnet",
            Self::SecurityGroup => "Security Group",
            Self::RouteTable => "Route Table",
            Self::InternetGateway => "Internet Gateway",
            Self::NatGateway => "NAT Gateway",
            Self::ElasticIp => "Elastic IP",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
