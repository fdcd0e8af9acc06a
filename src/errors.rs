//! Failures a login or scenario can end with
//!
//! Every variant renders a message that is printed verbatim in the run
//! report, so they carry whatever the backend actually answered.

use awc::http::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a response
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The response body is not valid JSON
    #[error("Response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Expected status {expected}, got {actual}: {body}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },

    /// A field the scenario reads is absent or not a string
    #[error("Response field '{0}' is missing or not a string")]
    MissingField(&'static str),

    #[error("Response field '{field}' is empty")]
    EmptyField { field: &'static str },

    #[error("Expected message \"{expected}\", got \"{actual}\"")]
    UnexpectedMessage { expected: String, actual: String },

    #[error("Expected a JSON array, got: {0}")]
    NotAnArray(String),

    #[error("Expected a non-empty list of stories")]
    EmptyList,

    /// A scenario depends on a story id an earlier scenario did not produce
    #[error("No story id available, '{0}' requires a successful create")]
    MissingStoryId(&'static str),

    /// Login did not yield a token, nothing else can run
    #[error("Login failed: {0}")]
    Login(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
