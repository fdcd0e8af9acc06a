pub mod app;
pub mod backend;
pub mod observability;
pub mod suite;

use thiserror::Error;

pub use app::{AppConfig, AppMetadata};
pub use backend::{BackendConfig, CredentialsConfig};
pub use observability::{LogFormat, ObservabilityConfig};
pub use suite::ScenarioConfig;

/// Prefix for environment variable overrides, e.g. `STORY_SPOILER__BACKEND__BASE_URL`
pub const ENV_PREFIX: &str = "STORY_SPOILER";

/// Configuration loading or validation failure
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was read but is not acceptable
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Checks a configuration section for values the suite cannot work with
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Builds a configuration section populated entirely from defaults
pub trait WithDefaults {
    fn with_defaults() -> Self;
}

/// Load the suite configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
