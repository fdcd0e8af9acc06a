use serde::{Deserialize, Serialize};

use super::{
    BackendConfig, ConfigError, CredentialsConfig, ENV_PREFIX, ObservabilityConfig,
    ScenarioConfig, Validate, WithDefaults,
};

/// Top-level configuration that aggregates all config sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Suite metadata
    #[serde(default)]
    pub app: AppMetadata,
    /// Backend location
    #[serde(default)]
    pub backend: BackendConfig,
    /// Login credentials
    #[serde(default)]
    pub credentials: CredentialsConfig,
    /// Scenario inputs
    #[serde(default)]
    pub scenarios: ScenarioConfig,
    /// Logging
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Suite metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Suite name, used in log spans
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Environment the suite targets (development, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_app_name() -> String {
    "story-spoiler".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            environment: default_environment(),
        }
    }
}

impl Validate for AppMetadata {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError("app.name cannot be empty".to_string()));
        }
        if self.environment.is_empty() {
            return Err(ConfigError::ValidationError("app.environment cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.app.validate()?;
        self.backend.validate()?;
        self.credentials.validate()?;
        self.scenarios.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}

impl WithDefaults for AppConfig {
    fn with_defaults() -> Self {
        Self {
            app: AppMetadata::default(),
            backend: BackendConfig::with_defaults(),
            credentials: CredentialsConfig::with_defaults(),
            scenarios: ScenarioConfig::with_defaults(),
            observability: ObservabilityConfig::with_defaults(),
        }
    }
}

/// Load configuration from files and environment variables
///
/// Configuration loading follows this precedence (highest to lowest):
/// 1. Environment variables: STORY_SPOILER__BACKEND__BASE_URL=http://localhost:5000
/// 2. config/local.toml (git-ignored, developer overrides)
/// 3. config/{APP_ENV}.toml (development/staging/production)
/// 4. config/default.toml (base defaults)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};

    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", env)).required(false))
        .add_source(File::with_name("config/local").required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate()?;

    Ok(app_config)
}
