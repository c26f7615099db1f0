//! Integration tests for the publish flow with the recording backend.

use std::sync::Arc;

use planforge_client::fakes::{BackendCall, RecordingBackend};
use planforge_client::{PublishError, Publisher};
use planforge_specs::{
    Grantee, Job, PermissionType, Plan, PlanPermissions, Project, Stage, Task,
};

fn sample_plan() -> Plan {
    let job = Job::new("Build and test", "JOB1").tasks(vec![Task::Script {
        description: "build".to_string(),
        inline_body: "echo build".to_string(),
    }]);
    Plan::new(Project::new("Spitfire", "SPIT"), "Spitfire Service - Domain", "SSD")
        .stages(vec![Stage::new("Stage 1").jobs(vec![job])])
}

fn sample_permissions(plan: &Plan) -> PlanPermissions {
    PlanPermissions::new(plan.identifier()).grant(Grantee::Anonymous, vec![PermissionType::View])
}

/// Test: plan publishes before permissions, in order, and the receipt
/// carries both payload digests.
#[tokio::test]
async fn test_successful_publish_order_and_receipt() {
    let backend = Arc::new(RecordingBackend::new());
    let publisher = Publisher::new(backend.clone());

    let plan = sample_plan();
    let permissions = sample_permissions(&plan);

    let receipt = publisher
        .publish(&plan, &permissions)
        .await
        .expect("publish failed");

    assert_eq!(receipt.identifier.to_string(), "SPIT-SSD");
    assert_eq!(receipt.plan_digest.len(), 64);
    assert_eq!(receipt.permissions_digest.len(), 64);
    assert_ne!(receipt.plan_digest, receipt.permissions_digest);

    assert_eq!(
        backend.calls(),
        vec![
            BackendCall::Plan("SPIT-SSD".to_string()),
            BackendCall::Permissions("SPIT-SSD".to_string()),
        ]
    );
}

/// Test: a permission failure triggers the compensating disable call and
/// reports the rollback as successful.
#[tokio::test]
async fn test_permission_failure_disables_plan() {
    let backend = Arc::new(RecordingBackend::failing_permissions());
    let publisher = Publisher::new(backend.clone());

    let plan = sample_plan();
    let permissions = sample_permissions(&plan);

    let err = publisher
        .publish(&plan, &permissions)
        .await
        .expect_err("publish should fail");

    match err {
        PublishError::PermissionsNotApplied {
            identifier,
            rolled_back,
            ..
        } => {
            assert_eq!(identifier, "SPIT-SSD");
            assert!(rolled_back, "plan should have been disabled again");
        }
        other => panic!("Expected PermissionsNotApplied, got {:?}", other),
    }

    assert_eq!(
        backend.calls(),
        vec![
            BackendCall::Plan("SPIT-SSD".to_string()),
            BackendCall::Permissions("SPIT-SSD".to_string()),
            BackendCall::SetEnabled("SPIT-SSD".to_string(), false),
        ]
    );
}

/// Test: when the disable call itself fails, the error reports the plan as
/// left enabled.
#[tokio::test]
async fn test_failed_rollback_reported() {
    let backend = Arc::new(RecordingBackend::failing_permissions_and_disable());
    let publisher = Publisher::new(backend.clone());

    let plan = sample_plan();
    let permissions = sample_permissions(&plan);

    let err = publisher
        .publish(&plan, &permissions)
        .await
        .expect_err("publish should fail");

    match err {
        PublishError::PermissionsNotApplied { rolled_back, .. } => {
            assert!(!rolled_back, "rollback failure must be reported");
        }
        other => panic!("Expected PermissionsNotApplied, got {:?}", other),
    }
}
