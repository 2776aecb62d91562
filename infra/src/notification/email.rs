//! Email notification channel

use tracing::debug;

use ag_core::services::notification::Notifier;

/// Tag prefixed to every line delivered over the email channel
const EMAIL_TAG: &str = "Email Notification";

/// Email notification channel
///
/// Stateless: delivery writes one tagged line to the console sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotifier;

impl EmailNotifier {
    /// Create a new email notification channel
    pub fn new() -> Self {
        Self
    }

    /// Render the tagged line for a message
    pub fn format_line(&self, message: &str) -> String {
        format!("{}: {}", EMAIL_TAG, message)
    }
}

impl Notifier for EmailNotifier {
    fn notify(&self, message: &str) {
        println!("{}", self.format_line(message));
        debug!(channel = self.channel_name(), "notification delivered");
    }

    fn channel_name(&self) -> &'static str {
        "email"
    }
}
