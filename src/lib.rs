#![deny(warnings)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod observability;
pub mod report;
pub mod requests;
pub mod responses;
pub mod runner;
pub mod scenarios;
pub mod tls;

// Testing utilities (always available for integration tests)
pub mod testing;

// Re-export commonly used types for convenience
pub use client::{Session, StoryClient, login};
pub use crate::config::AppConfig;
pub use errors::Error;
pub use report::{Outcome, Report};
pub use runner::Runner;
pub use scenarios::{Scenario, ScenarioContext};
