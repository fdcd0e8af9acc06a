use crate::config::{AppConfig, CredentialsConfig, WithDefaults};

use super::backend::FakeBackend;

pub const USERNAME: &str = "reviewer";
pub const PASSWORD: &str = "spoiler-pass";

/// Credentials the fake backend accepts
pub fn credentials() -> CredentialsConfig {
    CredentialsConfig {
        username: USERNAME.to_string(),
        password: PASSWORD.to_string(),
    }
}

/// Start a fake backend accepting [`credentials`]
///
/// # Panics
/// Panics if no local port can be bound; tests should fail fast if setup is broken.
pub fn backend() -> FakeBackend {
    FakeBackend::start(credentials()).expect("Failed to start fake backend")
}

/// Suite configuration pointing at `backend`
pub fn config(backend: &FakeBackend) -> AppConfig {
    AppConfig {
        backend: backend.backend_config(),
        credentials: credentials(),
        ..AppConfig::with_defaults()
    }
}
