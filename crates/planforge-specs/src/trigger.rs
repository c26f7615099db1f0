//! Plan triggers.

use serde::{Deserialize, Serialize};

/// Event that starts a plan run on the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    /// Push webhook from a linked repository. No polling.
    RepositoryPush,

    /// Cron-style schedule evaluated by the server.
    Scheduled {
        /// Cron expression in the server's scheduler syntax.
        cron: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_serde_tags() {
        let json = serde_json::to_value(&Trigger::RepositoryPush).unwrap();
        assert_eq!(json["type"], "repository_push");

        let json = serde_json::to_value(&Trigger::Scheduled {
            cron: "0 4 * * *".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "scheduled");
        assert_eq!(json["cron"], "0 4 * * *");
    }
}
