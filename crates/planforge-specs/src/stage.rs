//! Plan stages.

use serde::{Deserialize, Serialize};

use crate::job::Job;

/// A sequential phase of a plan.
///
/// Stages execute in declared order; a stage starts only after every job of
/// the previous stage succeeded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stage {
    /// Human-readable stage name.
    pub name: String,

    /// Jobs of this stage; the server may run them concurrently.
    pub jobs: Vec<Job>,
}

impl Stage {
    /// Create a stage with no jobs yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            jobs: Vec::new(),
        }
    }

    /// Set the job list.
    pub fn jobs(mut self, jobs: Vec<Job>) -> Self {
        self.jobs = jobs;
        self
    }
}
