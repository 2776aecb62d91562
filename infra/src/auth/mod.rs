//! Authentication Provider Module
//!
//! This module provides the credential verification implementations
//! behind the core `Authenticator` contract.
//!
//! ## Features
//!
//! - **Password provider**: verification against the fixed demo account
//! - **OAuth-style provider**: stand-in for verification delegated to a
//!   token service
//! - **Factory**: provider selection from configuration with a safe
//!   fallback

use std::str::FromStr;
use std::sync::Arc;

use ag_core::services::auth::Authenticator;
use ag_shared::config::ServiceWiring;

pub mod oauth;
pub mod password;

// Re-export commonly used types
pub use oauth::OauthAuthenticator;
pub use password::PasswordAuthenticator;

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Supported authentication providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    /// Fixed username/password comparison
    Password,
    /// OAuth-style delegated verification
    Oauth,
}

impl FromStr for AuthProvider {
    type Err = InfrastructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "password" | "simple" => Ok(AuthProvider::Password),
            "oauth" => Ok(AuthProvider::Oauth),
            _ => Err(InfrastructureError::UnknownAuthProvider(s.to_string())),
        }
    }
}

/// Create an authenticator based on configuration
///
/// Returns the provider named by the wiring. An unknown provider name is
/// not an error: the password provider is returned instead, with a
/// warning, so a misconfigured demo still runs.
///
/// # Arguments
///
/// * `wiring` - Capability selection for one service instance
pub fn create_authenticator(wiring: &ServiceWiring) -> Arc<dyn Authenticator> {
    match wiring.authenticator.parse() {
        Ok(AuthProvider::Password) => Arc::new(PasswordAuthenticator::new()),
        Ok(AuthProvider::Oauth) => Arc::new(OauthAuthenticator::new()),
        Err(e) => {
            tracing::warn!("{}, using the password provider", e);
            Arc::new(PasswordAuthenticator::new())
        }
    }
}
