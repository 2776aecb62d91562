//! OAuth-style authentication provider
//!
//! Stands in for credential verification delegated to an external token
//! service. The delegation itself is out of scope: the provider accepts
//! the fixed OAuth demo account with the same literal comparison the
//! password provider uses.

use tracing::debug;

use ag_core::services::auth::Authenticator;
use ag_shared::utils::masking::mask_username;

/// Username of the delegated demo account
const OAUTH_USERNAME: &str = "oauthUser";

/// Password of the delegated demo account
const OAUTH_PASSWORD: &str = "oauthPassword";

/// OAuth-style authentication provider
#[derive(Debug, Clone, Copy, Default)]
pub struct OauthAuthenticator;

impl OauthAuthenticator {
    /// Create a new OAuth-style authentication provider
    pub fn new() -> Self {
        Self
    }
}

impl Authenticator for OauthAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        let accepted = username == OAUTH_USERNAME && password == OAUTH_PASSWORD;

        debug!(
            username = %mask_username(username),
            accepted,
            "delegated verification"
        );

        accepted
    }

    fn provider_name(&self) -> &'static str {
        "oauth"
    }
}
