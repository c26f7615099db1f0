//! Plan notifications.

use serde::{Deserialize, Serialize};

/// Plan event a notification reacts to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationEvent {
    /// The plan run failed.
    PlanFailed,

    /// The plan run completed, regardless of outcome.
    PlanCompleted,
}

/// Who receives a notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Recipient {
    /// Everyone who committed to the triggering changeset.
    Committers,

    /// A fixed email address.
    Email { address: String },
}

/// A notification rule attached to a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub event: NotificationEvent,
    pub recipients: Vec<Recipient>,
}

impl Notification {
    /// Create a notification for the given event with no recipients yet.
    pub fn new(event: NotificationEvent) -> Self {
        Self {
            event,
            recipients: Vec::new(),
        }
    }

    /// Add a recipient.
    pub fn recipient(mut self, recipient: Recipient) -> Self {
        self.recipients.push(recipient);
        self
    }
}
