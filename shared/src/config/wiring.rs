//! Capability wiring configuration for the demo services

use serde::{Deserialize, Serialize};
use std::env;

/// Capability selection for one authentication service instance
///
/// The two strings name an authentication provider and a notification
/// channel. They are resolved to concrete implementations by the
/// infrastructure factories; an unknown name falls back to the stock
/// implementation there, never here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceWiring {
    /// Authentication provider name ("simple", "oauth")
    pub authenticator: String,

    /// Notification channel name ("email", "sms")
    pub notifier: String,
}

impl ServiceWiring {
    /// Create a wiring from explicit provider and channel names
    pub fn new(authenticator: impl Into<String>, notifier: impl Into<String>) -> Self {
        Self {
            authenticator: authenticator.into(),
            notifier: notifier.into(),
        }
    }

    /// Load a wiring from `{prefix}_AUTH_PROVIDER` and `{prefix}_NOTIFIER_CHANNEL`
    ///
    /// Unset variables keep the supplied defaults, so the stock demo
    /// wiring survives a bare environment.
    pub fn from_env(prefix: &str, default_authenticator: &str, default_notifier: &str) -> Self {
        Self {
            authenticator: env::var(format!("{}_AUTH_PROVIDER", prefix))
                .unwrap_or_else(|_| default_authenticator.to_string()),
            notifier: env::var(format!("{}_NOTIFIER_CHANNEL", prefix))
                .unwrap_or_else(|_| default_notifier.to_string()),
        }
    }
}
