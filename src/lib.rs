// ABOUTME: Library root for massdeploy - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod exec;
pub mod git;
pub mod output;
pub mod prompt;
pub mod registry;
pub mod rollout;
pub mod types;
