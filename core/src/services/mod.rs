//! Business services for the login flow

pub mod auth;
pub mod notification;

pub use auth::{
    AuthenticationService, Authenticator, LOGIN_FAILED_MESSAGE, LOGIN_SUCCESS_MESSAGE,
};
pub use notification::Notifier;
