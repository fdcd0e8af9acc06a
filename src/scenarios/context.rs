use crate::client::StoryClient;
use crate::errors::Error;

/// State shared between scenarios of one run
pub struct ScenarioContext {
    client: StoryClient,
    story_id: Option<String>,
    nonexistent_id: String,
}

impl ScenarioContext {
    pub fn new(client: StoryClient, nonexistent_id: impl Into<String>) -> Self {
        Self {
            client,
            story_id: None,
            nonexistent_id: nonexistent_id.into(),
        }
    }

    pub fn client(&self) -> &StoryClient {
        &self.client
    }

    pub fn nonexistent_id(&self) -> &str {
        &self.nonexistent_id
    }

    pub fn store_story_id(&mut self, id: impl Into<String>) {
        self.story_id = Some(id.into());
    }

    /// The id stored by the create scenario, for a scenario named `requester`
    pub fn story_id(&self, requester: &'static str) -> Result<&str, Error> {
        self.story_id
            .as_deref()
            .ok_or(Error::MissingStoryId(requester))
    }

    /// Remove the stored id; once deleted it no longer names a story
    pub fn take_story_id(&mut self, requester: &'static str) -> Result<String, Error> {
        self.story_id.take().ok_or(Error::MissingStoryId(requester))
    }

    /// Drop the client and any stored state
    pub fn release(self) {
        tracing::debug!(
            base_url = %self.client.session().base_url(),
            pending_story = ?self.story_id,
            "Releasing scenario context"
        );
    }
}
