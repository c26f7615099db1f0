//! Shared plan assembly with fixed defaults.
//!
//! A concrete plan supplies only its identity, task pipeline, linked
//! repositories and artifacts as a [`PlanDescription`]; [`build_plan`]
//! applies the defaults every team plan shares. Defaults are pure
//! functions of no hidden state.

use planforge_specs::{
    Artifact, DockerConfiguration, Grantee, Job, Notification, NotificationEvent,
    PermissionType, Plan, PlanBranchManagement, PlanIdentifier, PlanPermissions, Project,
    Recipient, Stage, Task, Trigger,
};

use crate::config::TeamConfig;

/// Everything one concrete plan has to supply.
#[derive(Debug, Clone)]
pub struct PlanDescription {
    pub project_name: String,
    pub project_key: String,
    pub project_description: Option<String>,
    pub plan_name: String,
    pub plan_key: String,
    pub plan_description: String,
    pub linked_repositories: Vec<String>,
    /// Ordered pipeline for the single build-and-test job.
    pub tasks: Vec<Task>,
    /// Artifacts retained by the build-and-test job.
    pub artifacts: Vec<Artifact>,
}

/// Assemble a plan from its description, applying the shared defaults:
/// enabled, repository-push trigger, branch cleanup with committer
/// notifications, concurrent builds allowed, plan-failure notification to
/// committers.
pub fn build_plan(description: &PlanDescription) -> Plan {
    let mut project = Project::new(&description.project_name, &description.project_key);
    if let Some(project_description) = &description.project_description {
        project = project.description(project_description);
    }

    let job = build_and_test_job(description.tasks.clone(), description.artifacts.clone());

    Plan::new(project, &description.plan_name, &description.plan_key)
        .description(&description.plan_description)
        .enabled(true)
        .linked_repositories(description.linked_repositories.clone())
        .stages(vec![default_stage(vec![job])])
        .concurrent_builds(true)
        .triggers(vec![default_trigger()])
        .branch_management(default_branch_management())
        .notifications(vec![default_notification()])
}

/// The single job every team plan runs: fixed name and key, Docker off.
pub fn build_and_test_job(tasks: Vec<Task>, artifacts: Vec<Artifact>) -> Job {
    Job::new("Build and test", "JOB1")
        .tasks(tasks)
        .docker(DockerConfiguration::disabled())
        .artifacts(artifacts)
}

/// The single stage every team plan has.
pub fn default_stage(jobs: Vec<Job>) -> Stage {
    Stage::new("Stage 1").jobs(jobs)
}

fn default_trigger() -> Trigger {
    Trigger::RepositoryPush
}

fn default_branch_management() -> PlanBranchManagement {
    PlanBranchManagement::new()
        .delete_on_branch_removal()
        .notify_committers()
}

fn default_notification() -> Notification {
    Notification::new(NotificationEvent::PlanFailed).recipient(Recipient::Committers)
}

/// The fixed access-control list every plan gets: the application account
/// with admin/clone/edit, the admin group with admin, logged-in users and
/// anonymous users with view. Nothing varies with the identifier.
pub fn build_plan_permissions(
    config: &TeamConfig,
    identifier: &PlanIdentifier,
) -> PlanPermissions {
    PlanPermissions::new(identifier.clone())
        .grant(
            Grantee::User {
                name: config.app_user.clone(),
            },
            vec![
                PermissionType::Admin,
                PermissionType::Clone,
                PermissionType::Edit,
            ],
        )
        .grant(
            Grantee::Group {
                name: config.admin_group.clone(),
            },
            vec![PermissionType::Admin],
        )
        .grant(Grantee::LoggedInUsers, vec![PermissionType::View])
        .grant(Grantee::Anonymous, vec![PermissionType::View])
}
