pub mod auth;
pub mod envelope;

pub use auth::Authenticated;
pub use envelope::ResponseEnvelope;
