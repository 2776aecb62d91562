//! SMS notification channel

use tracing::debug;

use ag_core::services::notification::Notifier;

/// Tag prefixed to every line delivered over the SMS channel
const SMS_TAG: &str = "SMS Notification";

/// SMS notification channel
///
/// Stateless: delivery writes one tagged line to the console sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotifier;

impl SmsNotifier {
    /// Create a new SMS notification channel
    pub fn new() -> Self {
        Self
    }

    /// Render the tagged line for a message
    pub fn format_line(&self, message: &str) -> String {
        format!("{}: {}", SMS_TAG, message)
    }
}

impl Notifier for SmsNotifier {
    fn notify(&self, message: &str) {
        println!("{}", self.format_line(message));
        debug!(channel = self.channel_name(), "notification delivered");
    }

    fn channel_name(&self) -> &'static str {
        "sms"
    }
}
