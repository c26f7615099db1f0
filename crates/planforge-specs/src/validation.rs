//! Offline structural validation of plan object graphs.
//!
//! Construction never validates, so an assembled [`Plan`] may violate the
//! server's structural constraints. [`validate_plan`] walks the graph and
//! reports the first violation; a plan that passes here can still be
//! rejected by the server for semantic reasons it alone can decide (for
//! example whether a linked repository exists).

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::job::Job;
use crate::permission::PlanPermissions;
use crate::plan::Plan;
use crate::task::Task;

/// Whether `key` is a valid plan/project/job key: uppercase ASCII
/// alphanumeric, starting with a letter.
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Validate a plan's object graph.
///
/// Checks:
/// 1. Project and plan names are non-empty, keys are well-formed.
/// 2. The plan has at least one stage, every stage at least one job,
///    every job at least one task.
/// 3. Job keys are well-formed and unique across the plan.
/// 4. Task payloads are non-empty (script bodies, maven goals, checkout
///    items).
/// 5. Artifact declarations carry a name and a copy pattern; docker-enabled
///    jobs name an image.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, depth-first in declaration
/// order.
pub fn validate_plan(plan: &Plan) -> Result<(), ValidationError> {
    if plan.project.name.is_empty() {
        return Err(ValidationError::EmptyName { entity: "project" });
    }
    if !is_valid_key(&plan.project.key) {
        return Err(ValidationError::InvalidKey {
            entity: "project",
            key: plan.project.key.clone(),
        });
    }
    if plan.name.is_empty() {
        return Err(ValidationError::EmptyName { entity: "plan" });
    }
    if !is_valid_key(&plan.key) {
        return Err(ValidationError::InvalidKey {
            entity: "plan",
            key: plan.key.clone(),
        });
    }

    if plan.stages.is_empty() {
        return Err(ValidationError::EmptyStages {
            plan: plan.identifier().to_string(),
        });
    }

    let mut seen_job_keys = HashSet::new();
    for stage in &plan.stages {
        if stage.name.is_empty() {
            return Err(ValidationError::EmptyName { entity: "stage" });
        }
        if stage.jobs.is_empty() {
            return Err(ValidationError::EmptyJobs {
                stage: stage.name.clone(),
            });
        }
        for job in &stage.jobs {
            if !seen_job_keys.insert(job.key.clone()) {
                return Err(ValidationError::DuplicateJobKey {
                    plan: plan.identifier().to_string(),
                    key: job.key.clone(),
                });
            }
            validate_job(job)?;
        }
    }

    Ok(())
}

fn validate_job(job: &Job) -> Result<(), ValidationError> {
    if job.name.is_empty() {
        return Err(ValidationError::EmptyName { entity: "job" });
    }
    if !is_valid_key(&job.key) {
        return Err(ValidationError::InvalidKey {
            entity: "job",
            key: job.key.clone(),
        });
    }
    if job.tasks.is_empty() {
        return Err(ValidationError::EmptyTasks {
            job: job.key.clone(),
        });
    }

    for task in &job.tasks {
        validate_task(task)?;
    }

    if job.docker.enabled && job.docker.image.is_none() {
        return Err(ValidationError::MissingDockerImage {
            job: job.key.clone(),
        });
    }

    for artifact in &job.artifacts {
        if artifact.name.is_empty() {
            return Err(ValidationError::EmptyArtifactName {
                job: job.key.clone(),
            });
        }
        if artifact.copy_pattern.is_empty() {
            return Err(ValidationError::EmptyCopyPattern {
                job: job.key.clone(),
                name: artifact.name.clone(),
            });
        }
    }

    Ok(())
}

fn validate_task(task: &Task) -> Result<(), ValidationError> {
    match task {
        Task::VcsCheckout {
            description,
            checkout_items,
            ..
        } => {
            if checkout_items.is_empty() {
                return Err(ValidationError::EmptyCheckoutItems {
                    description: description.clone(),
                });
            }
        }
        Task::Script {
            description,
            inline_body,
        } => {
            if inline_body.trim().is_empty() {
                return Err(ValidationError::EmptyScriptBody {
                    description: description.clone(),
                });
            }
        }
        Task::Maven {
            description, goal, ..
        } => {
            if goal.trim().is_empty() {
                return Err(ValidationError::EmptyGoal {
                    description: description.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Validate a permission set.
///
/// # Errors
///
/// - [`ValidationError::EmptyGrants`]: the set carries no grants.
/// - [`ValidationError::EmptyGrantPermissions`]: a grant carries no
///   capabilities.
pub fn validate_permissions(permissions: &PlanPermissions) -> Result<(), ValidationError> {
    if permissions.grants.is_empty() {
        return Err(ValidationError::EmptyGrants {
            identifier: permissions.identifier.to_string(),
        });
    }
    for grant in &permissions.grants {
        if grant.permissions.is_empty() {
            return Err(ValidationError::EmptyGrantPermissions {
                identifier: permissions.identifier.to_string(),
                grantee: format!("{:?}", grant.grantee),
            });
        }
    }
    Ok(())
}
