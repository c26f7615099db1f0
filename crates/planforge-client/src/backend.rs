//! Backend trait over the server's REST specs endpoint.
//!
//! The trait is async and transport-agnostic; [`HttpBackend`] talks to a
//! real server, `fakes::RecordingBackend` satisfies the contract in-memory
//! for tests.

use async_trait::async_trait;
use planforge_specs::PlanIdentifier;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::{Credentials, ServerConfig};
use crate::error::PublishError;

/// Transport for publishing spec payloads.
#[async_trait]
pub trait SpecsBackend: Send + Sync {
    /// Send a serialized plan.
    async fn send_plan(
        &self,
        identifier: &PlanIdentifier,
        payload: &Value,
    ) -> Result<(), PublishError>;

    /// Send a serialized permission set for an already-published plan.
    async fn send_permissions(
        &self,
        identifier: &PlanIdentifier,
        payload: &Value,
    ) -> Result<(), PublishError>;

    /// Flip the enabled flag of a published plan.
    async fn set_plan_enabled(
        &self,
        identifier: &PlanIdentifier,
        enabled: bool,
    ) -> Result<(), PublishError>;
}

/// HTTP implementation of [`SpecsBackend`].
pub struct HttpBackend {
    config: ServerConfig,
    credentials: Credentials,
    http_client: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend for the given server and account.
    pub fn new(config: ServerConfig, credentials: Credentials) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("planforge/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        HttpBackend {
            config,
            credentials,
            http_client,
        }
    }

    fn plans_url(&self) -> String {
        format!("{}/rest/specs/latest/plans", self.config.base_url)
    }

    fn plan_url(&self, identifier: &PlanIdentifier) -> String {
        format!("{}/{}", self.plans_url(), identifier)
    }

    async fn check(response: reqwest::Response) -> Result<(), PublishError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(PublishError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl SpecsBackend for HttpBackend {
    async fn send_plan(
        &self,
        identifier: &PlanIdentifier,
        payload: &Value,
    ) -> Result<(), PublishError> {
        debug!(plan = %identifier, url = %self.plans_url(), "Sending plan");
        let response = self
            .http_client
            .post(self.plans_url())
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .json(payload)
            .send()
            .await?;
        Self::check(response).await
    }

    async fn send_permissions(
        &self,
        identifier: &PlanIdentifier,
        payload: &Value,
    ) -> Result<(), PublishError> {
        let url = format!("{}/permissions", self.plan_url(identifier));
        debug!(plan = %identifier, url = %url, "Sending permissions");
        let response = self
            .http_client
            .put(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .json(payload)
            .send()
            .await?;
        Self::check(response).await
    }

    async fn set_plan_enabled(
        &self,
        identifier: &PlanIdentifier,
        enabled: bool,
    ) -> Result<(), PublishError> {
        let url = format!("{}/enabled", self.plan_url(identifier));
        debug!(plan = %identifier, enabled = enabled, "Setting plan enabled flag");
        let response = self
            .http_client
            .post(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .json(&json!({ "enabled": enabled }))
            .send()
            .await?;
        Self::check(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> HttpBackend {
        HttpBackend::new(
            ServerConfig::new("https://ci.example.org"),
            Credentials {
                username: "ci-app".to_string(),
                password: "secret".to_string(),
            },
        )
    }

    #[test]
    fn test_plan_url_uses_identifier() {
        let url = backend().plan_url(&PlanIdentifier::new("SPIT", "SSD"));
        assert_eq!(url, "https://ci.example.org/rest/specs/latest/plans/SPIT-SSD");
    }
}
