//! Server connection configuration and credential loading.
//!
//! Credentials are read from a `key=value` dot-file (default
//! `.credentials` in the working directory):
//!
//! ```text
//! username=ci-app
//! password=...
//! ```
//!
//! Blank lines and `#` comments are ignored. The password never appears in
//! `Debug` output.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Server connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the CI server.
    pub base_url: String,
    /// Path to the credentials dot-file.
    pub credentials_path: PathBuf,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: std::env::var("PLANFORGE_SERVER")
                .unwrap_or_else(|_| "http://localhost:8085".to_string()),
            credentials_path: std::env::var("PLANFORGE_CREDENTIALS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".credentials")),
            timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Create a config from environment variables.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create config for a specific server.
    pub fn new(base_url: &str) -> Self {
        ServerConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials_path: PathBuf::from(".credentials"),
            timeout_secs: 30,
        }
    }

    /// Set the credentials file path.
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = path.into();
        self
    }

    /// Load the credentials this config points at.
    pub fn load_credentials(&self) -> Result<Credentials, ConfigError> {
        Credentials::from_dotfile(&self.credentials_path)
    }
}

/// Server account credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Parse credentials from a `key=value` dot-file.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::CredentialsNotFound`]: file does not exist.
    /// - [`ConfigError::MalformedCredentialLine`]: a non-comment line has
    ///   no `=` separator.
    /// - [`ConfigError::MissingCredentialField`]: `username` or `password`
    ///   is absent.
    pub fn from_dotfile(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::CredentialsNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;

        let mut username = None;
        let mut password = None;
        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or(ConfigError::MalformedCredentialLine {
                    path: path.to_path_buf(),
                    line: index + 1,
                })?;
            match key.trim() {
                "username" => username = Some(value.trim().to_string()),
                "password" => password = Some(value.trim().to_string()),
                // Unknown keys are tolerated for forward compatibility
                _ => {}
            }
        }

        let username = username.ok_or(ConfigError::MissingCredentialField {
            path: path.to_path_buf(),
            field: "username",
        })?;
        let password = password.ok_or(ConfigError::MissingCredentialField {
            path: path.to_path_buf(),
            field: "password",
        })?;

        Ok(Credentials { username, password })
    }
}

// Manual Debug: the password must not leak into logs or error chains.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dotfile(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_parse_well_formed_dotfile() {
        let file = write_dotfile("# server account\nusername=ci-app\npassword=hunter2\n");
        let credentials = Credentials::from_dotfile(file.path()).expect("parse");
        assert_eq!(credentials.username, "ci-app");
        assert_eq!(credentials.password, "hunter2");
    }

    #[test]
    fn test_missing_file_reported() {
        let err = Credentials::from_dotfile(Path::new("/nonexistent/.credentials")).unwrap_err();
        assert!(matches!(err, ConfigError::CredentialsNotFound { .. }));
    }

    #[test]
    fn test_missing_password_reported() {
        let file = write_dotfile("username=ci-app\n");
        let err = Credentials::from_dotfile(file.path()).unwrap_err();
        match err {
            ConfigError::MissingCredentialField { field, .. } => assert_eq!(field, "password"),
            other => panic!("Expected MissingCredentialField, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_line_reported_with_number() {
        let file = write_dotfile("username=ci-app\nnot a pair\n");
        let err = Credentials::from_dotfile(file.path()).unwrap_err();
        match err {
            ConfigError::MalformedCredentialLine { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected MalformedCredentialLine, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials {
            username: "ci-app".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("ci-app"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_server_config_new_trims_trailing_slash() {
        let config = ServerConfig::new("https://ci.example.org/");
        assert_eq!(config.base_url, "https://ci.example.org");
    }
}
