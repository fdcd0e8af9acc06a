use async_trait::async_trait;
use awc::http::StatusCode;

use super::{Scenario, ScenarioContext, messages};
use crate::errors::Error;

/// Delete the story stored by [`super::create::CreateStory`]
///
/// The stored id is consumed whatever the outcome.
pub struct DeleteStory;

#[async_trait(?Send)]
impl Scenario for DeleteStory {
    fn name(&self) -> &'static str {
        "delete_story"
    }

    async fn run(&self, context: &mut ScenarioContext) -> Result<(), Error> {
        let id = context.take_story_id(self.name())?;
        let response = context.client().delete(&id).await?;

        response
            .expect_status(StatusCode::OK)?
            .expect_msg(messages::DELETED)?;

        Ok(())
    }
}

/// Delete an id that was never issued
pub struct DeleteNonexistentStory;

#[async_trait(?Send)]
impl Scenario for DeleteNonexistentStory {
    fn name(&self) -> &'static str {
        "delete_nonexistent_story"
    }

    async fn run(&self, context: &mut ScenarioContext) -> Result<(), Error> {
        let response = context.client().delete(context.nonexistent_id()).await?;

        response
            .expect_status(StatusCode::BAD_REQUEST)?
            .expect_msg(messages::UNABLE_TO_DELETE)?;

        Ok(())
    }
}
