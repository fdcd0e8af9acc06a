//! Test tooling: an in-memory fake of the story spoiler backend and helpers
//! to point the suite at it

pub mod backend;
pub mod setup;

pub use backend::{FakeBackend, StoryRecord};
