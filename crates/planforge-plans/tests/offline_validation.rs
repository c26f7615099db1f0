//! Offline validation of every catalog plan.
//!
//! Mirrors what the server would reject structurally, without a server:
//! every plan definition must build into a plan that passes the validator,
//! with a non-empty pipeline and unresolved executor placeholders.

use planforge_plans::tasks::{BRANCH_NAME, BUILD_NUMBER};
use planforge_plans::{build_plan, build_plan_permissions, catalog, TeamConfig};
use planforge_specs::{validate_permissions, validate_plan, Task};

/// Test: every catalog plan passes the structural validator.
#[test]
fn test_catalog_plans_validate_offline() {
    let config = TeamConfig::default();
    for description in catalog(&config) {
        let plan = build_plan(&description);
        validate_plan(&plan)
            .unwrap_or_else(|err| panic!("plan {} invalid: {err}", description.plan_key));

        let permissions = build_plan_permissions(&config, &plan.identifier());
        validate_permissions(&permissions)
            .unwrap_or_else(|err| panic!("permissions {} invalid: {err}", description.plan_key));
    }
}

/// Test: the example plan publishes under project key SPIT and plan key SSD
/// with a non-empty pipeline.
#[test]
fn test_domain_plan_identity_and_pipeline() {
    let config = TeamConfig::default();
    let plan = build_plan(
        &planforge_plans::catalog::spitfire_service_domain(&config),
    );

    assert_eq!(plan.identifier().to_string(), "SPIT-SSD");
    assert!(!plan.stages.is_empty());
    for stage in &plan.stages {
        assert!(!stage.jobs.is_empty());
        for job in &stage.jobs {
            assert!(!job.tasks.is_empty());
        }
    }
}

/// Test: no task in any catalog plan resolves the executor placeholders
/// locally: goal and script strings keep the literal tokens.
#[test]
fn test_placeholders_stay_literal() {
    let config = TeamConfig::default();
    for description in catalog(&config) {
        let plan = build_plan(&description);
        let mut tasks_with_placeholders = 0;
        for stage in &plan.stages {
            for job in &stage.jobs {
                for task in &job.tasks {
                    let text = match task {
                        Task::Script { inline_body, .. } => inline_body.as_str(),
                        Task::Maven { goal, .. } => goal.as_str(),
                        Task::VcsCheckout { .. } => continue,
                    };
                    if text.contains("${") {
                        tasks_with_placeholders += 1;
                        assert!(
                            text.contains(BUILD_NUMBER) || text.contains(BRANCH_NAME),
                            "unknown placeholder in {text:?}"
                        );
                        // No resolved fragment may remain: a resolved token
                        // would have stripped the ${ prefix.
                        assert!(!text.contains("${}"), "mangled placeholder in {text:?}");
                    }
                }
            }
        }
        assert!(
            tasks_with_placeholders > 0,
            "plan {} has no placeholder-bearing tasks",
            description.plan_key
        );
    }
}

/// Test: building the same description twice yields identical plans,
/// including the defaulted sub-configurations.
#[test]
fn test_defaults_are_stateless() {
    let config = TeamConfig::default();
    for description in catalog(&config) {
        let plan_a = build_plan(&description);
        let plan_b = build_plan(&description);
        assert_eq!(plan_a.triggers, plan_b.triggers);
        assert_eq!(plan_a.branch_management, plan_b.branch_management);
        assert_eq!(plan_a.notifications, plan_b.notifications);
        assert_eq!(plan_a, plan_b);
    }
}
