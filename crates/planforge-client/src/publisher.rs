//! One-shot plan publishing with compensating rollback.

use std::sync::Arc;

use planforge_specs::{Plan, PlanIdentifier, PlanPermissions};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::backend::{HttpBackend, SpecsBackend};
use crate::config::ServerConfig;
use crate::error::{ConfigError, PublishError};

/// Result of a successful publish run.
#[derive(Debug, Clone)]
pub struct PublishReceipt {
    /// Identifier the plan and permissions were published under.
    pub identifier: PlanIdentifier,

    /// SHA-256 digest of the serialized plan payload.
    pub plan_digest: String,

    /// SHA-256 digest of the serialized permissions payload.
    pub permissions_digest: String,
}

/// Publishes a plan and its permissions to one server.
pub struct Publisher {
    backend: Arc<dyn SpecsBackend>,
}

impl Publisher {
    /// Create a publisher over an arbitrary backend.
    pub fn new(backend: Arc<dyn SpecsBackend>) -> Self {
        Self { backend }
    }

    /// Create an HTTP publisher, loading credentials from the config's
    /// dot-file.
    pub fn http(config: ServerConfig) -> Result<Self, ConfigError> {
        let credentials = config.load_credentials()?;
        Ok(Self::new(Arc::new(HttpBackend::new(config, credentials))))
    }

    /// Publish `plan`, then `permissions`, under the plan's identifier.
    ///
    /// The two payloads go to separate endpoints. When the permission step
    /// fails after the plan step succeeded, the publisher disables the
    /// just-published plan so it is never left enabled without its intended
    /// access control, then reports
    /// [`PublishError::PermissionsNotApplied`] with the rollback outcome.
    ///
    /// No retries; transport failures surface as [`PublishError::Http`].
    pub async fn publish(
        &self,
        plan: &Plan,
        permissions: &PlanPermissions,
    ) -> Result<PublishReceipt, PublishError> {
        let identifier = plan.identifier();

        let plan_payload = serde_json::to_value(plan)?;
        let plan_digest = payload_digest(&plan_payload)?;
        self.backend.send_plan(&identifier, &plan_payload).await?;
        info!(
            event = "publish.plan_sent",
            plan = %identifier,
            digest = %short(&plan_digest),
        );

        let permissions_payload = serde_json::to_value(permissions)?;
        let permissions_digest = payload_digest(&permissions_payload)?;
        if let Err(err) = self
            .backend
            .send_permissions(&identifier, &permissions_payload)
            .await
        {
            warn!(
                event = "publish.permissions_failed",
                plan = %identifier,
                error = %err,
            );
            let rolled_back = match self.backend.set_plan_enabled(&identifier, false).await {
                Ok(()) => true,
                Err(disable_err) => {
                    warn!(
                        event = "publish.rollback_failed",
                        plan = %identifier,
                        error = %disable_err,
                    );
                    false
                }
            };
            return Err(PublishError::PermissionsNotApplied {
                identifier: identifier.to_string(),
                rolled_back,
                source: Box::new(err),
            });
        }
        info!(
            event = "publish.permissions_sent",
            plan = %identifier,
            digest = %short(&permissions_digest),
        );

        Ok(PublishReceipt {
            identifier,
            plan_digest,
            permissions_digest,
        })
    }
}

/// SHA-256 hex digest of a payload's canonical JSON bytes.
fn payload_digest(payload: &serde_json::Value) -> Result<String, PublishError> {
    let bytes = serde_json::to_vec(payload)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

fn short(digest: &str) -> &str {
    &digest[..12.min(digest.len())]
}
