//! Task factories for the standard pipeline steps.
//!
//! Goal and script strings embed the executor's placeholder tokens
//! ([`BUILD_NUMBER`], [`BRANCH_NAME`]) verbatim; the remote executor
//! resolves them at run time.

use planforge_specs::{CheckoutItem, Task};

use crate::config::TeamConfig;

/// Placeholder resolved by the executor to the numeric build identifier.
pub const BUILD_NUMBER: &str = "${build.number}";

/// Placeholder resolved by the executor to the source branch name.
pub const BRANCH_NAME: &str = "${repository.branchName}";

/// Version tag embedding both placeholders: `<build>-<branch>`.
fn version_tag() -> String {
    format!("{BUILD_NUMBER}-{BRANCH_NAME}")
}

/// Clean checkout of the plan's default repository.
pub fn checkout_default_repository() -> Task {
    Task::VcsCheckout {
        description: "Checkout default repository".to_string(),
        checkout_items: vec![CheckoutItem::default_repository()],
        clean_checkout: true,
    }
}

/// Inline shell script task.
pub fn script(description: impl Into<String>, body: impl Into<String>) -> Task {
    Task::Script {
        description: description.into(),
        inline_body: body.into(),
    }
}

/// Maven goal on the configured JDK and Maven labels.
pub fn maven(config: &TeamConfig, description: impl Into<String>, goal: impl Into<String>) -> Task {
    maven_task(config, description, goal, false)
}

fn maven_task(
    config: &TeamConfig,
    description: impl Into<String>,
    goal: impl Into<String>,
    has_tests: bool,
) -> Task {
    Task::Maven {
        description: description.into(),
        goal: goal.into(),
        jdk: config.jdk_label.clone(),
        executable_label: config.maven_label.clone(),
        has_tests,
    }
}

/// Rewrite the POM version to `<build>-<branch>`.
pub fn set_pom_version(config: &TeamConfig) -> Task {
    maven(
        config,
        "Change version",
        format!("versions:set -DnewVersion={}", version_tag()),
    )
}

/// Coverage-instrumented build and test run.
///
/// Test failures are tolerated so the analysis step still sees the full
/// report. `profile` selects the environment-specific settings; `None`
/// means `"default"`.
pub fn coverage_verify(config: &TeamConfig, profile: Option<&str>) -> Task {
    let profile = profile.unwrap_or("default");
    let goal = format!(
        "clean org.jacoco:jacoco-maven-plugin:prepare-agent install \
         -Dmaven.test.failure.ignore=true \
         -Dsonar.jacoco.reportMissing.force.zero=true \
         -Dapplication.version={BUILD_NUMBER} \
         -Dspring.profiles.default={profile}"
    );
    maven_task(config, "Coverage and test", goal, true)
}

/// Static-analysis run against the quality server.
pub fn static_analysis(config: &TeamConfig, profile: Option<&str>) -> Task {
    let profile = profile.unwrap_or("default");
    let goal = format!("sonar:sonar -Psonarqube -Dspring.profiles.default={profile}");
    maven_task(config, "Static analysis", goal, true)
}

/// Deploy packages to the artifact repository.
pub fn deploy_artifacts(config: &TeamConfig, profile: Option<&str>) -> Task {
    let profile = profile.unwrap_or("default");
    let goal = format!(
        "deploy -Dapplication.version={} -Dspring.profiles.default={profile}",
        version_tag()
    );
    maven(config, "Deploy to artifact repository", goal)
}

/// Build, push and remove a tagged container image.
///
/// The registry password is not part of the script text: the executor
/// injects it as the `REGISTRY_PASSWORD` environment variable from its
/// secret store, and the script feeds it to `docker login` on stdin.
pub fn build_and_push_docker_image(config: &TeamConfig, image: &str) -> Task {
    let tag = format!("{image}:{}", version_tag());
    let body = format!(
        "docker build -t {tag} .\n\
         printf '%s' \"$REGISTRY_PASSWORD\" | docker login -u {user} --password-stdin {registry}\n\
         docker push {tag}\n\
         docker rmi {tag}",
        user = config.app_user,
        registry = config.docker_registry,
    );
    script("Build and push docker image", body)
}

/// Write `<variable>=<build>-<branch>` into a file, to be declared as an
/// artifact by the caller.
pub fn write_build_number_file(variable_name: &str, file_name: &str) -> Task {
    let body = format!("echo {variable_name}={} > {file_name}", version_tag());
    script("Create file with build number", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TeamConfig {
        TeamConfig {
            app_user: "spitfire-ci".to_string(),
            admin_group: "build-admins".to_string(),
            jdk_label: "JDK 17".to_string(),
            maven_label: "Maven 3.9".to_string(),
            docker_registry: "registry.example.org".to_string(),
        }
    }

    fn goal_of(task: &Task) -> &str {
        match task {
            Task::Maven { goal, .. } => goal,
            other => panic!("Expected maven task, got {:?}", other),
        }
    }

    fn body_of(task: &Task) -> &str {
        match task {
            Task::Script { inline_body, .. } => inline_body,
            other => panic!("Expected script task, got {:?}", other),
        }
    }

    #[test]
    fn test_checkout_is_clean_default_repo() {
        match checkout_default_repository() {
            Task::VcsCheckout {
                checkout_items,
                clean_checkout,
                ..
            } => {
                assert_eq!(checkout_items, vec![CheckoutItem::default_repository()]);
                assert!(clean_checkout);
            }
            other => panic!("Expected checkout task, got {:?}", other),
        }
    }

    #[test]
    fn test_set_pom_version_keeps_placeholders_literal() {
        let task = set_pom_version(&config());
        let goal = goal_of(&task);
        assert!(goal.contains(BUILD_NUMBER));
        assert!(goal.contains(BRANCH_NAME));
        assert!(goal.starts_with("versions:set"));
    }

    #[test]
    fn test_maven_labels_come_from_config() {
        let task = maven(&config(), "Deploy", "deploy");
        match task {
            Task::Maven {
                jdk,
                executable_label,
                has_tests,
                ..
            } => {
                assert_eq!(jdk, "JDK 17");
                assert_eq!(executable_label, "Maven 3.9");
                assert!(!has_tests);
            }
            other => panic!("Expected maven task, got {:?}", other),
        }
    }

    #[test]
    fn test_coverage_profile_defaults() {
        let goal_default = goal_of(&coverage_verify(&config(), None)).to_string();
        assert!(goal_default.contains("-Dspring.profiles.default=default"));

        let goal_named = goal_of(&coverage_verify(&config(), Some("integration"))).to_string();
        assert!(goal_named.contains("-Dspring.profiles.default=integration"));
    }

    #[test]
    fn test_coverage_marks_tests() {
        match coverage_verify(&config(), None) {
            Task::Maven { has_tests, .. } => assert!(has_tests),
            other => panic!("Expected maven task, got {:?}", other),
        }
    }

    #[test]
    fn test_docker_script_shape() {
        let task = build_and_push_docker_image(&config(), "registry.example.org/spitfire/service");
        let body = body_of(&task);
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("docker build"));
        assert!(lines[1].contains("docker login"));
        assert!(lines[2].starts_with("docker push"));
        assert!(lines[3].starts_with("docker rmi"));
        assert!(body.contains(BUILD_NUMBER));
        assert!(body.contains(BRANCH_NAME));
    }

    #[test]
    fn test_docker_script_never_embeds_password() {
        let task = build_and_push_docker_image(&config(), "registry.example.org/spitfire/service");
        let body = body_of(&task);
        assert!(body.contains("--password-stdin"));
        assert!(body.contains("REGISTRY_PASSWORD"));
        assert!(!body.contains(" -p "));
    }

    #[test]
    fn test_build_number_file_script() {
        let task = write_build_number_file("spitfire_build", "build-info.txt");
        let body = body_of(&task);
        assert_eq!(
            body,
            "echo spitfire_build=${build.number}-${repository.branchName} > build-info.txt"
        );
    }
}
