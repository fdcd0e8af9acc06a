use serde::{Deserialize, Serialize};

/// Body of the create and edit story calls
///
/// `url` is optional: `Some("")` sends an empty `Url`, `None` leaves the key
/// out of the JSON entirely.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StoryInput {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl StoryInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: Some(String::new()),
        }
    }

    pub fn without_url(mut self) -> Self {
        self.url = None;
        self
    }
}
