//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, info};

use ag_shared::utils::masking::mask_username;

use crate::domain::credentials::Credentials;
use crate::services::notification::Notifier;

use super::traits::Authenticator;

/// Message delivered after a successful login
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login Successful!";

/// Message delivered after a failed login
pub const LOGIN_FAILED_MESSAGE: &str = "Login Failed.";

/// Authentication service for running the login flow
///
/// Composes one credential verification capability and one message
/// delivery capability. Both are bound at construction and never
/// re-wired; the service works identically with any pair of
/// implementations. The `Arc` references are shared handles, so a single
/// capability instance may back several services.
pub struct AuthenticationService {
    /// Credential verification capability
    authenticator: Arc<dyn Authenticator>,
    /// Message delivery capability
    notifier: Arc<dyn Notifier>,
}

impl AuthenticationService {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `authenticator` - Credential verification implementation
    /// * `notifier` - Message delivery implementation
    pub fn new(authenticator: Arc<dyn Authenticator>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            authenticator,
            notifier,
        }
    }

    /// Run one login attempt
    ///
    /// This method:
    /// 1. Verifies the credential pair with the bound authenticator
    /// 2. Delivers the outcome message through the bound notifier
    ///
    /// The authenticator and the notifier are each invoked exactly once
    /// per attempt, whatever the outcome. Attempts are independent of one
    /// another: there are no retries and no intermediate state.
    ///
    /// # Arguments
    ///
    /// * `credentials` - The pair submitted for this attempt
    pub fn login(&self, credentials: &Credentials) {
        debug!(
            username = %mask_username(credentials.username()),
            provider = self.authenticator.provider_name(),
            "verifying credentials"
        );

        let authenticated = self
            .authenticator
            .authenticate(credentials.username(), credentials.password());

        let message = if authenticated {
            LOGIN_SUCCESS_MESSAGE
        } else {
            LOGIN_FAILED_MESSAGE
        };

        info!(
            username = %mask_username(credentials.username()),
            provider = self.authenticator.provider_name(),
            channel = self.notifier.channel_name(),
            authenticated,
            "login attempt completed"
        );

        self.notifier.notify(message);
    }
}
