//! Password authentication provider
//!
//! Verifies credentials against the fixed demo account. The check is a
//! literal, case-sensitive string comparison with no normalization and
//! no special handling of empty or malformed input.

use tracing::debug;

use ag_core::services::auth::Authenticator;
use ag_shared::utils::masking::mask_username;

/// Username accepted by the demo account
const DEMO_USERNAME: &str = "admin";

/// Password accepted by the demo account
const DEMO_PASSWORD: &str = "password123";

/// Password authentication provider
///
/// Stateless: the provider carries no fields, and every verification is
/// a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordAuthenticator;

impl PasswordAuthenticator {
    /// Create a new password authentication provider
    pub fn new() -> Self {
        Self
    }
}

impl Authenticator for PasswordAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        let accepted = username == DEMO_USERNAME && password == DEMO_PASSWORD;

        debug!(
            username = %mask_username(username),
            accepted,
            "password verification"
        );

        accepted
    }

    fn provider_name(&self) -> &'static str {
        "password"
    }
}
