//! Plan access control.
//!
//! A [`PlanPermissions`] object references a plan through its
//! [`PlanIdentifier`] and is published separately from the plan itself.

use serde::{Deserialize, Serialize};

use crate::plan::PlanIdentifier;

/// Capability granted on a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PermissionType {
    View,
    Edit,
    Clone,
    Admin,
}

/// Subject a grant applies to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "subject", rename_all = "snake_case")]
pub enum Grantee {
    /// A named user account.
    User { name: String },

    /// A named group.
    Group { name: String },

    /// Every authenticated user.
    LoggedInUsers,

    /// Unauthenticated access.
    Anonymous,
}

/// One grantee with its granted capability set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionGrant {
    pub grantee: Grantee,
    pub permissions: Vec<PermissionType>,
}

impl PermissionGrant {
    pub fn new(grantee: Grantee, permissions: Vec<PermissionType>) -> Self {
        Self {
            grantee,
            permissions,
        }
    }
}

/// Access-control list attached to a plan identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanPermissions {
    pub identifier: PlanIdentifier,
    pub grants: Vec<PermissionGrant>,
}

impl PlanPermissions {
    /// Create an empty permission set for the given plan identifier.
    pub fn new(identifier: PlanIdentifier) -> Self {
        Self {
            identifier,
            grants: Vec::new(),
        }
    }

    /// Add a grant.
    pub fn grant(mut self, grantee: Grantee, permissions: Vec<PermissionType>) -> Self {
        self.grants.push(PermissionGrant::new(grantee, permissions));
        self
    }
}
