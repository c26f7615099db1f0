//! planforge-client - Publishing plans to the CI server
//!
//! Provides:
//! - Server connection configuration with dot-file credential loading
//! - A backend trait over the server's REST specs endpoint, with an HTTP
//!   implementation and an in-memory fake for tests
//! - A publisher that sends a plan and its permissions in one run, with a
//!   compensating disable step when the permission publish fails

pub mod backend;
pub mod config;
pub mod error;
pub mod fakes;
pub mod publisher;

// Re-export key types
pub use backend::{HttpBackend, SpecsBackend};
pub use config::{Credentials, ServerConfig};
pub use error::{ConfigError, PublishError};
pub use publisher::{PublishReceipt, Publisher};
