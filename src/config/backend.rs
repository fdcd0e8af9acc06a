use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate, WithDefaults};

/// Where the story spoiler service lives and how much of a response to read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Maximum response body size in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
}

/// Account used against the authentication endpoint
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

fn default_base_url() -> String {
    "https://d3s5nxhwblsjbi.cloudfront.net".to_string()
}

fn default_body_limit() -> usize {
    4 * 1024 * 1024 // 4 MiB
}

impl BackendConfig {
    /// Join an endpoint path onto the base URL without doubling the slash
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            body_limit: default_body_limit(),
        }
    }
}

// Keep the password out of logs
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

impl Validate for BackendConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::ValidationError("backend.base_url cannot be empty".to_string()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError("backend.base_url must start with http:// or https://".to_string()));
        }
        if self.body_limit == 0 {
            return Err(ConfigError::ValidationError("backend.body_limit must be > 0".to_string()));
        }
        Ok(())
    }
}

impl Validate for CredentialsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.username.is_empty() {
            return Err(ConfigError::ValidationError("credentials.username cannot be empty".to_string()));
        }
        if self.password.is_empty() {
            return Err(ConfigError::ValidationError("credentials.password cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl WithDefaults for BackendConfig {
    fn with_defaults() -> Self {
        Self::default()
    }
}

impl WithDefaults for CredentialsConfig {
    fn with_defaults() -> Self {
        Self::default()
    }
}
