use async_trait::async_trait;
use awc::http::StatusCode;

use super::{Scenario, ScenarioContext};
use crate::errors::Error;

/// List every story; at least the one just created must be there
pub struct ListStories;

#[async_trait(?Send)]
impl Scenario for ListStories {
    fn name(&self) -> &'static str {
        "list_stories"
    }

    async fn run(&self, context: &mut ScenarioContext) -> Result<(), Error> {
        let response = context.client().all().await?;
        let stories = response.expect_status(StatusCode::OK)?.items()?;

        if stories.is_empty() {
            return Err(Error::EmptyList);
        }

        tracing::debug!(count = stories.len(), "Listed stories");

        Ok(())
    }
}
