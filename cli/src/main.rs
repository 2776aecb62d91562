//! AuthGate demo binary
//!
//! Wires two independent authentication services from configuration,
//! runs one login attempt on each, and waits for an interactive
//! acknowledgment before exiting. The exit code is always 0: a failed
//! login is an ordinary outcome, not a process failure.

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use ag_core::domain::credentials::Credentials;
use ag_core::services::auth::AuthenticationService;
use ag_infra::{create_authenticator, create_notifier};
use ag_shared::config::AppConfig;

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config);

    info!(environment = %config.environment, "starting AuthGate demo");

    // Wire the two demo services from their configured capabilities
    let primary = AuthenticationService::new(
        create_authenticator(&config.primary),
        create_notifier(&config.primary),
    );
    let secondary = AuthenticationService::new(
        create_authenticator(&config.secondary),
        create_notifier(&config.secondary),
    );

    primary.login(&Credentials::new("admin", "password123"));
    secondary.login(&Credentials::new("oauthUser", "oauthPassword"));

    wait_for_acknowledgment();
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the configured level applies.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Block until the user presses Enter
///
/// Console concern only: the demo holds its output on screen until
/// acknowledged. End of input counts as acknowledgment.
fn wait_for_acknowledgment() {
    print!("Press Enter to exit...");
    let _ = io::stdout().flush();

    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
