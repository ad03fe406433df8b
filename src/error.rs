// ABOUTME: Application-wide error types for massdeploy.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::rollout::RolloutError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("missing required option: --{0} (pass it on the command line or set it in mass.yml)")]
    MissingOption(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Rollout(#[from] RolloutError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Failure category shown in front of the message, when there is one.
    pub fn category(&self) -> Option<String> {
        match self {
            Error::Rollout(e) => Some(e.kind().to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
