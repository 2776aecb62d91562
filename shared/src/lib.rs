//! Shared utilities and common types for the AuthGate workspace
//!
//! This crate provides functionality used across all workspace members:
//! - Configuration types
//! - Utility functions (log masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LoggingConfig, ServiceWiring};
pub use utils::masking;
