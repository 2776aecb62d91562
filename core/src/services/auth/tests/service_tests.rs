//! Unit tests for the authentication service

use std::sync::Arc;

use crate::domain::credentials::Credentials;
use crate::services::auth::{AuthenticationService, LOGIN_FAILED_MESSAGE, LOGIN_SUCCESS_MESSAGE};

use super::mocks::{MockAuthenticator, RecordingNotifier};

#[test]
fn test_successful_login_delivers_success_message() {
    let authenticator = Arc::new(MockAuthenticator::accepting());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = AuthenticationService::new(authenticator.clone(), notifier.clone());

    service.login(&Credentials::new("admin", "password123"));

    assert_eq!(notifier.delivered(), vec![LOGIN_SUCCESS_MESSAGE.to_string()]);
}

#[test]
fn test_failed_login_delivers_failure_message() {
    let authenticator = Arc::new(MockAuthenticator::rejecting());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = AuthenticationService::new(authenticator.clone(), notifier.clone());

    service.login(&Credentials::new("admin", "wrong"));

    assert_eq!(notifier.delivered(), vec![LOGIN_FAILED_MESSAGE.to_string()]);
}

#[test]
fn test_login_invokes_each_capability_exactly_once_on_success() {
    let authenticator = Arc::new(MockAuthenticator::accepting());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = AuthenticationService::new(authenticator.clone(), notifier.clone());

    service.login(&Credentials::new("admin", "password123"));

    assert_eq!(authenticator.call_count(), 1);
    assert_eq!(notifier.delivery_count(), 1);
}

#[test]
fn test_login_invokes_each_capability_exactly_once_on_failure() {
    let authenticator = Arc::new(MockAuthenticator::rejecting());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = AuthenticationService::new(authenticator.clone(), notifier.clone());

    service.login(&Credentials::new("nobody", "nothing"));

    assert_eq!(authenticator.call_count(), 1);
    assert_eq!(notifier.delivery_count(), 1);
}

#[test]
fn test_swapping_authenticator_changes_only_the_delivered_message() {
    // Same notifier capability, substituted authenticator: the control
    // flow shape is identical and only the outcome message differs.
    let credentials = Credentials::new("admin", "password123");

    let notifier = Arc::new(RecordingNotifier::new());
    let accepting = AuthenticationService::new(
        Arc::new(MockAuthenticator::accepting()),
        notifier.clone(),
    );
    let rejecting = AuthenticationService::new(
        Arc::new(MockAuthenticator::rejecting()),
        notifier.clone(),
    );

    accepting.login(&credentials);
    rejecting.login(&credentials);

    assert_eq!(
        notifier.delivered(),
        vec![
            LOGIN_SUCCESS_MESSAGE.to_string(),
            LOGIN_FAILED_MESSAGE.to_string(),
        ]
    );
}

#[test]
fn test_repeated_login_attempts_are_independent() {
    let authenticator = Arc::new(MockAuthenticator::accepting());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = AuthenticationService::new(authenticator.clone(), notifier.clone());

    let credentials = Credentials::new("admin", "password123");
    service.login(&credentials);
    service.login(&credentials);

    assert_eq!(authenticator.call_count(), 2);
    assert_eq!(
        notifier.delivered(),
        vec![
            LOGIN_SUCCESS_MESSAGE.to_string(),
            LOGIN_SUCCESS_MESSAGE.to_string(),
        ]
    );
}

#[test]
fn test_one_capability_instance_can_back_several_services() {
    let authenticator = Arc::new(MockAuthenticator::accepting());
    let notifier = Arc::new(RecordingNotifier::new());

    let first = AuthenticationService::new(authenticator.clone(), notifier.clone());
    let second = AuthenticationService::new(authenticator.clone(), notifier.clone());

    first.login(&Credentials::new("admin", "password123"));
    second.login(&Credentials::new("admin", "password123"));

    assert_eq!(authenticator.call_count(), 2);
    assert_eq!(notifier.delivery_count(), 2);
}
