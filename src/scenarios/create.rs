use async_trait::async_trait;
use awc::http::StatusCode;

use super::{Scenario, ScenarioContext};
use crate::errors::Error;
use crate::requests::StoryInput;

/// Create a story and remember its id
pub struct CreateStory;

#[async_trait(?Send)]
impl Scenario for CreateStory {
    fn name(&self) -> &'static str {
        "create_story"
    }

    async fn run(&self, context: &mut ScenarioContext) -> Result<(), Error> {
        let input = StoryInput::new("New Story Spoiler", "New Spoiler");
        let response = context.client().create(&input).await?;

        let id = response.expect_status(StatusCode::CREATED)?.story_id()?;

        tracing::info!(story_id = %id, "Story created");
        context.store_story_id(id);

        Ok(())
    }
}

/// Create with empty title and description and no `Url` key
///
/// Fail unless the backend answers 400.
pub struct CreateWithoutRequiredFields;

#[async_trait(?Send)]
impl Scenario for CreateWithoutRequiredFields {
    fn name(&self) -> &'static str {
        "create_story_without_required_fields"
    }

    async fn run(&self, context: &mut ScenarioContext) -> Result<(), Error> {
        let input = StoryInput::new("", "").without_url();
        let response = context.client().create(&input).await?;

        response.expect_status(StatusCode::BAD_REQUEST)?;

        Ok(())
    }
}
