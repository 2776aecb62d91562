//! Unit tests for notification channels
