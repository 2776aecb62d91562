//! Trait for message delivery integration

/// Trait for message delivery integration
///
/// Implementations deliver a text message to the user over one concrete
/// channel. Delivery is fire-and-forget: there is no result to inspect
/// and no error condition modeled. Callers must not depend on which
/// channel is bound.
pub trait Notifier: Send + Sync {
    /// Deliver a message to the user
    fn notify(&self, message: &str);

    /// Channel name for diagnostics and logging
    fn channel_name(&self) -> &'static str;
}
