use serde::{Deserialize, Serialize};

/// Body of `POST /api/User/Authentication`
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl From<&crate::config::CredentialsConfig> for LoginRequest {
    fn from(credentials: &crate::config::CredentialsConfig) -> Self {
        Self {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }
}
