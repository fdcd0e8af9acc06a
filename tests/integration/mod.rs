//! Integration tests for the runner and the story client

pub mod client_test;
pub mod suite_flow;
