//! # AuthGate Core
//!
//! Core business logic and domain layer for the AuthGate login flow.
//! This crate contains the domain entities, the capability contracts for
//! credential verification and message delivery, and the authentication
//! service composing one implementation of each.

pub mod domain;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
