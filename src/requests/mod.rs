pub mod auth;
pub mod story;

pub use auth::LoginRequest;
pub use story::StoryInput;
