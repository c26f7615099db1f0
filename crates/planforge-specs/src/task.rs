//! Pipeline task variants.
//!
//! A task is a single step executed by the server's build agent. Goal and
//! script strings may embed executor placeholder tokens such as
//! `${build.number}`; they are sent verbatim and resolved remotely, never
//! by this library.

use serde::{Deserialize, Serialize};

/// Selects a repository within a checkout task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "repository", rename_all = "snake_case")]
pub enum CheckoutItem {
    /// The plan's default linked repository.
    Default,

    /// A specific linked repository by name.
    Named { name: String },
}

impl CheckoutItem {
    /// Checkout item for the plan's default repository.
    pub fn default_repository() -> Self {
        CheckoutItem::Default
    }

    /// Checkout item for a named linked repository.
    pub fn named(name: impl Into<String>) -> Self {
        CheckoutItem::Named { name: name.into() }
    }
}

/// A single pipeline step.
///
/// Tasks within a job execute strictly in declared order; the first failure
/// aborts the remainder. That contract belongs to the remote executor and
/// is not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Task {
    /// Source checkout from one or more linked repositories.
    VcsCheckout {
        description: String,
        checkout_items: Vec<CheckoutItem>,
        clean_checkout: bool,
    },

    /// Inline shell script.
    Script {
        description: String,
        inline_body: String,
    },

    /// Maven goal invocation on a labelled JDK and Maven installation.
    Maven {
        description: String,
        goal: String,
        jdk: String,
        executable_label: String,
        has_tests: bool,
    },
}

impl Task {
    /// Human-readable task description, for logs and listings.
    pub fn description(&self) -> &str {
        match self {
            Task::VcsCheckout { description, .. } => description,
            Task::Script { description, .. } => description,
            Task::Maven { description, .. } => description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_item_constructors() {
        assert_eq!(CheckoutItem::default_repository(), CheckoutItem::Default);
        assert_eq!(
            CheckoutItem::named("Git Spitfire Domain"),
            CheckoutItem::Named {
                name: "Git Spitfire Domain".to_string()
            }
        );
    }

    #[test]
    fn test_task_description_accessor() {
        let task = Task::Script {
            description: "Create file with build number".to_string(),
            inline_body: "echo hi".to_string(),
        };
        assert_eq!(task.description(), "Create file with build number");
    }

    #[test]
    fn test_task_serde_tag() {
        let task = Task::Maven {
            description: "Deploy".to_string(),
            goal: "deploy".to_string(),
            jdk: "JDK 17".to_string(),
            executable_label: "Maven 3.9".to_string(),
            has_tests: false,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["type"], "maven");
        assert_eq!(json["goal"], "deploy");
    }
}
