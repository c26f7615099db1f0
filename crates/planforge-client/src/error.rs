//! Error types for the publish client.

use std::path::PathBuf;

use thiserror::Error;

/// Errors loading server configuration and credentials.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Credentials file does not exist.
    #[error("credentials file not found: {}", .path.display())]
    CredentialsNotFound { path: PathBuf },

    /// Credentials file line without a `key=value` shape.
    #[error("malformed line {line} in credentials file {}", .path.display())]
    MalformedCredentialLine { path: PathBuf, line: usize },

    /// Credentials file is missing a required key.
    #[error("credentials file {} is missing {field:?}", .path.display())]
    MissingCredentialField { path: PathBuf, field: &'static str },

    /// IO error reading configuration.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors publishing to the server.
#[derive(Error, Debug)]
pub enum PublishError {
    /// Transport-level HTTP failure.
    #[error("http error: {0}")]
    Http(String),

    /// The server rejected the payload.
    #[error("server rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Payload serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The plan was published but its permissions were not.
    ///
    /// When `rolled_back` is true the compensating step disabled the plan,
    /// so it is not left enabled without its intended access control.
    #[error("permissions for {identifier} not applied (plan disabled again: {rolled_back})")]
    PermissionsNotApplied {
        identifier: String,
        rolled_back: bool,
        #[source]
        source: Box<PublishError>,
    },
}

impl From<reqwest::Error> for PublishError {
    fn from(err: reqwest::Error) -> Self {
        PublishError::Http(err.to_string())
    }
}
