//! Authentication service module
//!
//! Contains the credential verification capability contract and the
//! service composing it with a message delivery channel.

pub mod service;
pub mod traits;

pub use service::{AuthenticationService, LOGIN_FAILED_MESSAGE, LOGIN_SUCCESS_MESSAGE};
pub use traits::Authenticator;

#[cfg(test)]
mod tests;
