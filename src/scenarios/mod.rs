//! The ordered story spoiler scenarios
//!
//! [`suite`] returns them in the order they must run: the create scenario
//! stores the story id that edit and delete later read from the
//! [`ScenarioContext`].

mod context;
pub mod create;
pub mod delete;
pub mod edit;
pub mod list;

use async_trait::async_trait;

use crate::errors::Error;

pub use context::ScenarioContext;

/// Literal messages the backend answers with
pub mod messages {
    pub const EDITED: &str = "Successfully edited";
    pub const DELETED: &str = "Deleted successfully!";
    pub const NO_SPOILERS: &str = "No spoilers...";
    pub const UNABLE_TO_DELETE: &str = "Unable to delete this story spoiler!";
}

/// One request against the backend plus the assertions on its answer
#[async_trait(?Send)]
pub trait Scenario {
    fn name(&self) -> &'static str;

    async fn run(&self, context: &mut ScenarioContext) -> Result<(), Error>;
}

/// Every scenario, in execution order
pub fn suite() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(create::CreateStory),
        Box::new(edit::EditStory),
        Box::new(list::ListStories),
        Box::new(delete::DeleteStory),
        Box::new(create::CreateWithoutRequiredFields),
        Box::new(edit::EditNonexistentStory),
        Box::new(delete::DeleteNonexistentStory),
    ]
}
