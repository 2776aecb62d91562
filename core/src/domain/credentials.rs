//! Credential pair submitted with a login attempt

use std::fmt;

use ag_shared::utils::masking::{mask_secret, mask_username};

/// An ephemeral username/password pair
///
/// Credentials exist only for the duration of one login call. They are
/// never persisted, and the password never appears in debug output or
/// logs. Comparison against a provider's expected pair is exact-match and
/// case-sensitive with no normalization.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create a credential pair from the raw username and password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The submitted username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The submitted password
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &mask_username(&self.username))
            .field("password", &mask_secret(&self.password))
            .finish()
    }
}
