//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for AuthGate. It
//! provides the concrete implementations behind the core capability
//! contracts:
//!
//! - **Auth**: credential verification providers (password table,
//!   OAuth-style delegation)
//! - **Notification**: delivery channels (email, SMS) writing tagged
//!   lines to the console sink
//!
//! Implementations are selected from configuration by the `create_*`
//! factories. An unknown selection falls back to the stock implementation
//! with a warning rather than failing the process.

/// Authentication provider module
pub mod auth;

/// Notification channel module
pub mod notification;

pub use auth::{create_authenticator, AuthProvider, OauthAuthenticator, PasswordAuthenticator};
pub use notification::{create_notifier, EmailNotifier, NotificationChannel, SmsNotifier};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Unrecognized authentication provider name
    #[error("Unknown authentication provider: {0}")]
    UnknownAuthProvider(String),

    /// Unrecognized notification channel name
    #[error("Unknown notification channel: {0}")]
    UnknownNotificationChannel(String),
}
