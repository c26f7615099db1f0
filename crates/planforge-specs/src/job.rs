//! Jobs and their Docker execution configuration.

use serde::{Deserialize, Serialize};

use crate::artifact::Artifact;
use crate::task::Task;

/// Docker configuration for a job's build agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DockerConfiguration {
    /// Run the job inside a container instead of directly on the agent.
    pub enabled: bool,

    /// Image to run in when enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl DockerConfiguration {
    /// Docker execution switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            image: None,
        }
    }

    /// Docker execution in the given image.
    pub fn image(image: impl Into<String>) -> Self {
        Self {
            enabled: true,
            image: Some(image.into()),
        }
    }
}

/// A named unit of work within a stage.
///
/// Tasks execute strictly in declared order. Jobs within the same stage may
/// run concurrently on the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Job {
    /// Human-readable job name.
    pub name: String,

    /// Job key, unique within the plan (uppercase alphanumeric).
    pub key: String,

    /// Ordered task list.
    pub tasks: Vec<Task>,

    /// Docker execution configuration.
    pub docker: DockerConfiguration,

    /// Artifacts retained after the job completes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,
}

impl Job {
    /// Create a job with no tasks yet and Docker disabled.
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            tasks: Vec::new(),
            docker: DockerConfiguration::disabled(),
            artifacts: Vec::new(),
        }
    }

    /// Set the ordered task list.
    pub fn tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    /// Set the Docker configuration.
    pub fn docker(mut self, docker: DockerConfiguration) -> Self {
        self.docker = docker;
        self
    }

    /// Set the artifact declarations.
    pub fn artifacts(mut self, artifacts: Vec<Artifact>) -> Self {
        self.artifacts = artifacts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_defaults() {
        let job = Job::new("Build and test", "JOB1");
        assert_eq!(job.name, "Build and test");
        assert_eq!(job.key, "JOB1");
        assert!(job.tasks.is_empty());
        assert!(!job.docker.enabled);
        assert!(job.artifacts.is_empty());
    }

    #[test]
    fn test_job_task_order_preserved() {
        let tasks = vec![
            Task::Script {
                description: "first".to_string(),
                inline_body: "echo 1".to_string(),
            },
            Task::Script {
                description: "second".to_string(),
                inline_body: "echo 2".to_string(),
            },
        ];
        let job = Job::new("Build and test", "JOB1").tasks(tasks.clone());
        assert_eq!(job.tasks, tasks);
    }

    #[test]
    fn test_docker_configuration_image() {
        let docker = DockerConfiguration::image("maven:3.9");
        assert!(docker.enabled);
        assert_eq!(docker.image.as_deref(), Some("maven:3.9"));
    }
}
