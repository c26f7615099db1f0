//! Validation error taxonomy.

/// Structural violations found by the offline validator.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{entity} name must not be empty")]
    EmptyName { entity: &'static str },

    #[error("invalid {entity} key {key:?}: keys are uppercase alphanumeric and start with a letter")]
    InvalidKey { entity: &'static str, key: String },

    #[error("plan {plan} has no stages")]
    EmptyStages { plan: String },

    #[error("stage {stage:?} has no jobs")]
    EmptyJobs { stage: String },

    #[error("job {job} has no tasks")]
    EmptyTasks { job: String },

    #[error("duplicate job key {key} in plan {plan}")]
    DuplicateJobKey { plan: String, key: String },

    #[error("script task {description:?} has an empty body")]
    EmptyScriptBody { description: String },

    #[error("maven task {description:?} has an empty goal")]
    EmptyGoal { description: String },

    #[error("checkout task {description:?} has no checkout items")]
    EmptyCheckoutItems { description: String },

    #[error("artifact {name:?} in job {job} has an empty copy pattern")]
    EmptyCopyPattern { job: String, name: String },

    #[error("job {job} declares an artifact with an empty name")]
    EmptyArtifactName { job: String },

    #[error("docker-enabled job {job} has no image")]
    MissingDockerImage { job: String },

    #[error("permissions for {identifier} have no grants")]
    EmptyGrants { identifier: String },

    #[error("grant for {grantee} in {identifier} has an empty permission set")]
    EmptyGrantPermissions {
        identifier: String,
        grantee: String,
    },
}
