//! Team-wide plan configuration.
//!
//! Identities and tool labels shared by every plan. These used to be
//! constants; they are an explicit configuration object so the same builder
//! logic can serve multiple environments.

use serde::{Deserialize, Serialize};

/// Identity and tool-label configuration applied to every plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamConfig {
    /// Application account granted full rights on every plan.
    pub app_user: String,
    /// Group granted admin rights on every plan.
    pub admin_group: String,
    /// JDK label configured on the build agents.
    pub jdk_label: String,
    /// Maven executable label configured on the build agents.
    pub maven_label: String,
    /// Container registry host images are pushed to.
    pub docker_registry: String,
}

impl Default for TeamConfig {
    fn default() -> Self {
        TeamConfig {
            app_user: std::env::var("PLANFORGE_APP_USER")
                .unwrap_or_else(|_| "spitfire-ci".to_string()),
            admin_group: std::env::var("PLANFORGE_ADMIN_GROUP")
                .unwrap_or_else(|_| "build-admins".to_string()),
            jdk_label: std::env::var("PLANFORGE_JDK_LABEL")
                .unwrap_or_else(|_| "JDK 17".to_string()),
            maven_label: std::env::var("PLANFORGE_MAVEN_LABEL")
                .unwrap_or_else(|_| "Maven 3.9".to_string()),
            docker_registry: std::env::var("PLANFORGE_DOCKER_REGISTRY")
                .unwrap_or_else(|_| "registry.example.org".to_string()),
        }
    }
}

impl TeamConfig {
    /// Create a config from environment variables.
    pub fn from_env() -> Self {
        Self::default()
    }
}
