//! Concrete plan definitions.

use planforge_specs::Artifact;

use crate::builder::PlanDescription;
use crate::config::TeamConfig;
use crate::tasks;

/// Build plan for the Spitfire domain service: checkout, version bump,
/// coverage and test, static analysis, artifact deploy.
pub fn spitfire_service_domain(config: &TeamConfig) -> PlanDescription {
    PlanDescription {
        project_name: "Spitfire".to_string(),
        project_key: "SPIT".to_string(),
        project_description: Some("Service for Spitfire".to_string()),
        plan_name: "Spitfire Service - Domain".to_string(),
        plan_key: "SSD".to_string(),
        plan_description: "Builds and deploys the Spitfire domain service".to_string(),
        linked_repositories: vec!["Git Spitfire Domain".to_string()],
        tasks: vec![
            tasks::checkout_default_repository(),
            tasks::set_pom_version(config),
            tasks::coverage_verify(config, None),
            tasks::static_analysis(config, None),
            tasks::deploy_artifacts(config, None),
        ],
        artifacts: vec![],
    }
}

/// Container-image plan for the Spitfire service: checkout, version bump,
/// coverage and test, image push, build-number artifact.
pub fn spitfire_service_image(config: &TeamConfig) -> PlanDescription {
    let image = format!("{}/spitfire/service", config.docker_registry);
    PlanDescription {
        project_name: "Spitfire".to_string(),
        project_key: "SPIT".to_string(),
        project_description: Some("Service for Spitfire".to_string()),
        plan_name: "Spitfire Service - Image".to_string(),
        plan_key: "SSI".to_string(),
        plan_description: "Builds and pushes the Spitfire service image".to_string(),
        linked_repositories: vec!["Git Spitfire Domain".to_string()],
        tasks: vec![
            tasks::checkout_default_repository(),
            tasks::set_pom_version(config),
            tasks::coverage_verify(config, None),
            tasks::build_and_push_docker_image(config, &image),
            tasks::write_build_number_file("spitfire_build", "build-info.txt"),
        ],
        artifacts: vec![Artifact::new("Build info", "build-info.txt")
            .shared(true)
            .required(true)],
    }
}

/// All plan definitions, in publish order.
pub fn catalog(config: &TeamConfig) -> Vec<PlanDescription> {
    vec![
        spitfire_service_domain(config),
        spitfire_service_image(config),
    ]
}

/// Look up a plan description by its plan key.
pub fn find_plan(config: &TeamConfig, plan_key: &str) -> Option<PlanDescription> {
    catalog(config)
        .into_iter()
        .find(|description| description.plan_key == plan_key)
}
