//! Domain entities for the login flow

pub mod credentials;

pub use credentials::Credentials;
