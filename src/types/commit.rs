// ABOUTME: Commit identifiers returned by the source-control remote.
// ABOUTME: Accepts any hexadecimal id; git SHA-1 ids are 40 characters.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommitShaError {
    #[error("commit id cannot be empty")]
    Empty,

    #[error("commit id exceeds maximum length of 64 characters")]
    TooLong,

    #[error("invalid character in commit id: '{0}'")]
    InvalidChar(char),
}

/// A resolved commit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitSha(String);

impl CommitSha {
    pub fn parse(value: &str) -> Result<Self, CommitShaError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CommitShaError::Empty);
        }

        // SHA-256 object ids are the longest git produces.
        if value.len() > 64 {
            return Err(CommitShaError::TooLong);
        }

        if let Some(c) = value.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(CommitShaError::InvalidChar(c));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for progress output.
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(12)]
    }
}

impl fmt::Display for CommitSha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
