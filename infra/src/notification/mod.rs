//! Notification Channel Module
//!
//! This module provides the message delivery implementations behind the
//! core `Notifier` contract.
//!
//! ## Features
//!
//! - **Email channel**: email-tagged lines on the console sink
//! - **SMS channel**: SMS-tagged lines on the console sink
//! - **Factory**: channel selection from configuration with a safe
//!   fallback
//!
//! Real mail or SMS transport is out of scope; the tagged console line
//! is the delivery.

use std::str::FromStr;
use std::sync::Arc;

use ag_core::services::notification::Notifier;
use ag_shared::config::ServiceWiring;

pub mod email;
pub mod sms;

// Re-export commonly used types
pub use email::EmailNotifier;
pub use sms::SmsNotifier;

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Supported notification channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationChannel {
    /// Email-tagged console delivery
    Email,
    /// SMS-tagged console delivery
    Sms,
}

impl FromStr for NotificationChannel {
    type Err = InfrastructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(NotificationChannel::Email),
            "sms" => Ok(NotificationChannel::Sms),
            _ => Err(InfrastructureError::UnknownNotificationChannel(
                s.to_string(),
            )),
        }
    }
}

/// Create a notifier based on configuration
///
/// Returns the channel named by the wiring. An unknown channel name is
/// not an error: the email channel is returned instead, with a warning,
/// so a misconfigured demo still runs.
///
/// # Arguments
///
/// * `wiring` - Capability selection for one service instance
pub fn create_notifier(wiring: &ServiceWiring) -> Arc<dyn Notifier> {
    match wiring.notifier.parse() {
        Ok(NotificationChannel::Email) => Arc::new(EmailNotifier::new()),
        Ok(NotificationChannel::Sms) => Arc::new(SmsNotifier::new()),
        Err(e) => {
            tracing::warn!("{}, using the email channel", e);
            Arc::new(EmailNotifier::new())
        }
    }
}
