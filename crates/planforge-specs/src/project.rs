//! Project identity.

use serde::{Deserialize, Serialize};

/// A project groups related plans under a short unique key.
///
/// Key uniqueness is enforced by the remote server, not locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// Human-readable project name.
    pub name: String,

    /// Short unique project key (uppercase alphanumeric).
    pub key: String,

    /// Optional project description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Project {
    /// Create a project with the given name and key.
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            description: None,
        }
    }

    /// Set the project description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
