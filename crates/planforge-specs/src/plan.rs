//! Plans and plan identifiers.

use serde::{Deserialize, Serialize};

use crate::branches::PlanBranchManagement;
use crate::notification::Notification;
use crate::project::Project;
use crate::stage::Stage;
use crate::trigger::Trigger;

/// Addressing tuple for a plan on the server.
///
/// Permissions reference a plan through this identifier rather than through
/// the plan object itself; both are published separately under the same
/// project key + plan key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PlanIdentifier {
    pub project_key: String,
    pub plan_key: String,
}

impl PlanIdentifier {
    pub fn new(project_key: impl Into<String>, plan_key: impl Into<String>) -> Self {
        Self {
            project_key: project_key.into(),
            plan_key: plan_key.into(),
        }
    }
}

impl std::fmt::Display for PlanIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.project_key, self.plan_key)
    }
}

/// A named CI pipeline definition tied to one project.
///
/// Built once per publish run and discarded after serialization. All fields
/// are set through chained builder methods; nothing is validated at
/// construction time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Owning project.
    pub project: Project,

    /// Human-readable plan name.
    pub name: String,

    /// Plan key, unique within the project (uppercase alphanumeric).
    pub key: String,

    /// Optional plan description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the plan starts enabled on the server.
    pub enabled: bool,

    /// Names of linked repositories the plan builds from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_repositories: Vec<String>,

    /// Ordered stage list.
    pub stages: Vec<Stage>,

    /// Allow concurrent runs of this plan.
    pub concurrent_builds: bool,

    /// Events that start a run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<Trigger>,

    /// Automatic plan-branch policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_management: Option<PlanBranchManagement>,

    /// Notification rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<Notification>,
}

impl Plan {
    /// Create a plan owned by `project` with the given name and key.
    ///
    /// The plan starts enabled, with no stages, triggers or notifications
    /// and with concurrent builds off.
    pub fn new(project: Project, name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            project,
            name: name.into(),
            key: key.into(),
            description: None,
            enabled: true,
            linked_repositories: Vec::new(),
            stages: Vec::new(),
            concurrent_builds: false,
            triggers: Vec::new(),
            branch_management: None,
            notifications: Vec::new(),
        }
    }

    /// The identifier under which this plan and its permissions publish.
    pub fn identifier(&self) -> PlanIdentifier {
        PlanIdentifier::new(self.project.key.clone(), self.key.clone())
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn linked_repositories(mut self, repositories: Vec<String>) -> Self {
        self.linked_repositories = repositories;
        self
    }

    pub fn stages(mut self, stages: Vec<Stage>) -> Self {
        self.stages = stages;
        self
    }

    pub fn concurrent_builds(mut self, concurrent: bool) -> Self {
        self.concurrent_builds = concurrent;
        self
    }

    pub fn triggers(mut self, triggers: Vec<Trigger>) -> Self {
        self.triggers = triggers;
        self
    }

    pub fn branch_management(mut self, management: PlanBranchManagement) -> Self {
        self.branch_management = Some(management);
        self
    }

    pub fn notifications(mut self, notifications: Vec<Notification>) -> Self {
        self.notifications = notifications;
        self
    }
}
