use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate, WithDefaults};

/// Inputs for the negative scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Identifier known not to exist on the backend
    #[serde(default = "default_nonexistent_id")]
    pub nonexistent_id: String,
}

fn default_nonexistent_id() -> String {
    "4312".to_string()
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            nonexistent_id: default_nonexistent_id(),
        }
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.nonexistent_id.trim().is_empty() {
            return Err(ConfigError::ValidationError("scenarios.nonexistent_id cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl WithDefaults for ScenarioConfig {
    fn with_defaults() -> Self {
        Self::default()
    }
}
