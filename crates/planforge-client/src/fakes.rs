//! In-memory fake backend (testing only)
//!
//! `RecordingBackend` satisfies [`SpecsBackend`] without any network,
//! records every call in order, and can be told to fail individual
//! operations to exercise the publisher's compensation path.

use std::sync::Mutex;

use async_trait::async_trait;
use planforge_specs::PlanIdentifier;
use serde_json::Value;

use crate::backend::SpecsBackend;
use crate::error::PublishError;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Plan(String),
    Permissions(String),
    SetEnabled(String, bool),
}

/// Recording in-memory backend.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<BackendCall>>,
    fail_permissions: bool,
    fail_disable: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose permission publish always fails.
    pub fn failing_permissions() -> Self {
        Self {
            fail_permissions: true,
            ..Self::default()
        }
    }

    /// Backend whose permission publish and disable call both fail.
    pub fn failing_permissions_and_disable() -> Self {
        Self {
            fail_permissions: true,
            fail_disable: true,
            ..Self::default()
        }
    }

    /// Snapshot of the recorded calls, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: BackendCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn rejected() -> PublishError {
        PublishError::Rejected {
            status: 500,
            body: "injected failure".to_string(),
        }
    }
}

#[async_trait]
impl SpecsBackend for RecordingBackend {
    async fn send_plan(
        &self,
        identifier: &PlanIdentifier,
        _payload: &Value,
    ) -> Result<(), PublishError> {
        self.record(BackendCall::Plan(identifier.to_string()));
        Ok(())
    }

    async fn send_permissions(
        &self,
        identifier: &PlanIdentifier,
        _payload: &Value,
    ) -> Result<(), PublishError> {
        self.record(BackendCall::Permissions(identifier.to_string()));
        if self.fail_permissions {
            return Err(Self::rejected());
        }
        Ok(())
    }

    async fn set_plan_enabled(
        &self,
        identifier: &PlanIdentifier,
        enabled: bool,
    ) -> Result<(), PublishError> {
        self.record(BackendCall::SetEnabled(identifier.to_string(), enabled));
        if self.fail_disable {
            return Err(Self::rejected());
        }
        Ok(())
    }
}
