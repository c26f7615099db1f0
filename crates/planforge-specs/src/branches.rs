//! Automatic plan-branch management.

use serde::{Deserialize, Serialize};

/// Policy for plan branches created from repository branches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanBranchManagement {
    /// Delete the plan branch when its source branch is deleted.
    pub delete_on_branch_removal: bool,

    /// Notify committers about branch build results.
    pub notify_committers: bool,
}

impl PlanBranchManagement {
    pub fn new() -> Self {
        Self {
            delete_on_branch_removal: false,
            notify_committers: false,
        }
    }

    /// Enable cleanup of plan branches whose source branch was removed.
    pub fn delete_on_branch_removal(mut self) -> Self {
        self.delete_on_branch_removal = true;
        self
    }

    /// Enable committer notifications for branch builds.
    pub fn notify_committers(mut self) -> Self {
        self.notify_committers = true;
        self
    }
}

impl Default for PlanBranchManagement {
    fn default() -> Self {
        Self::new()
    }
}
