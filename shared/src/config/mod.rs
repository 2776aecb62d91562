//! Configuration module
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `wiring` - Capability selection for the demo authentication services

pub mod environment;
pub mod wiring;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LoggingConfig};
pub use wiring::ServiceWiring;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Wiring for the primary demo service
    pub primary: ServiceWiring,

    /// Wiring for the secondary demo service
    pub secondary: ServiceWiring,
}

impl AppConfig {
    /// Load the complete configuration from environment variables
    ///
    /// Every field has a default, so loading never fails: a bare
    /// environment yields the stock demo wiring (password authentication
    /// with email notification, OAuth authentication with SMS
    /// notification).
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let logging = LoggingConfig::from_env(environment);

        Self {
            environment,
            logging,
            primary: ServiceWiring::from_env("PRIMARY", "simple", "email"),
            secondary: ServiceWiring::from_env("SECONDARY", "oauth", "sms"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            logging: LoggingConfig::default(),
            primary: ServiceWiring::new("simple", "email"),
            secondary: ServiceWiring::new("oauth", "sms"),
        }
    }
}
