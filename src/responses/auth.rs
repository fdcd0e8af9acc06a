use serde::{Deserialize, Serialize};

/// Body returned by a successful login
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Authenticated {
    pub access_token: String,
}
