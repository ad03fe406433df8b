// ABOUTME: Validated keys for runtime configuration patches.
// ABOUTME: Keys are dotted paths such as `image.tag` or `email_pw_joe`.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigKeyError {
    #[error("config key cannot be empty")]
    Empty,

    #[error("config key cannot start or end with '.'")]
    DanglingDot,

    #[error("invalid character in config key: '{0}'")]
    InvalidChar(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    pub fn new(value: &str) -> Result<Self, ConfigKeyError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigKeyError::Empty);
        }

        if trimmed.starts_with('.') || trimmed.ends_with('.') {
            return Err(ConfigKeyError::DanglingDot);
        }

        // Valid characters: alphanumeric, hyphen, underscore, dot
        for c in trimmed.chars() {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '_' && c != '.' {
                return Err(ConfigKeyError::InvalidChar(c));
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The image tag field every app carries.
    pub fn image_tag() -> Self {
        Self("image.tag".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
