//! Build artifact declarations.

use serde::{Deserialize, Serialize};

/// A build output retained after a job completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artifact {
    /// Artifact name, unique within the job.
    pub name: String,

    /// Copy glob pattern relative to the working directory.
    pub copy_pattern: String,

    /// Whether the artifact is shared with later stages and other plans.
    pub shared: bool,

    /// Whether the job fails if the pattern matches nothing.
    pub required: bool,
}

impl Artifact {
    pub fn new(name: impl Into<String>, copy_pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            copy_pattern: copy_pattern.into(),
            shared: false,
            required: false,
        }
    }

    pub fn shared(mut self, shared: bool) -> Self {
        self.shared = shared;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}
