//! Unit tests for the OAuth-style authentication provider

use ag_core::services::auth::Authenticator;

use crate::auth::OauthAuthenticator;

#[test]
fn test_accepts_exact_delegated_credentials() {
    let provider = OauthAuthenticator::new();
    assert!(provider.authenticate("oauthUser", "oauthPassword"));
}

#[test]
fn test_rejects_all_mismatch_permutations() {
    let provider = OauthAuthenticator::new();

    assert!(!provider.authenticate("oauthUser", "wrong"));
    assert!(!provider.authenticate("wrong", "oauthPassword"));
    assert!(!provider.authenticate("wrong", "wrong"));
    assert!(!provider.authenticate("", ""));
}

#[test]
fn test_rejects_the_other_providers_account() {
    // Substitutability: swapping providers changes which pair succeeds
    let provider = OauthAuthenticator::new();
    assert!(!provider.authenticate("admin", "password123"));
}

#[test]
fn test_comparison_is_case_sensitive() {
    let provider = OauthAuthenticator::new();

    assert!(!provider.authenticate("oauthuser", "oauthPassword"));
    assert!(!provider.authenticate("oauthUser", "oauthpassword"));
}

#[test]
fn test_provider_name() {
    let provider = OauthAuthenticator::new();
    assert_eq!(provider.provider_name(), "oauth");
}
