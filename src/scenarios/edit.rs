use async_trait::async_trait;
use awc::http::StatusCode;

use super::{Scenario, ScenarioContext, messages};
use crate::errors::Error;
use crate::requests::StoryInput;

fn edited() -> StoryInput {
    StoryInput::new("Edit Title", "Edit Description")
}

/// Edit the story stored by [`super::create::CreateStory`]
pub struct EditStory;

#[async_trait(?Send)]
impl Scenario for EditStory {
    fn name(&self) -> &'static str {
        "edit_story"
    }

    async fn run(&self, context: &mut ScenarioContext) -> Result<(), Error> {
        let id = context.story_id(self.name())?;
        let response = context.client().edit(id, &edited()).await?;

        response
            .expect_status(StatusCode::OK)?
            .expect_msg(messages::EDITED)?;

        Ok(())
    }
}

/// Edit an id that was never issued
pub struct EditNonexistentStory;

#[async_trait(?Send)]
impl Scenario for EditNonexistentStory {
    fn name(&self) -> &'static str {
        "edit_nonexistent_story"
    }

    async fn run(&self, context: &mut ScenarioContext) -> Result<(), Error> {
        let response = context
            .client()
            .edit(context.nonexistent_id(), &edited())
            .await?;

        response
            .expect_status(StatusCode::NOT_FOUND)?
            .expect_msg(messages::NO_SPOILERS)?;

        Ok(())
    }
}
