// ABOUTME: Wrapper for values that must never appear in logs or terminal output.
// ABOUTME: Debug output is redacted; the raw value is only reachable via expose().

use std::fmt;

/// Placeholder shown wherever a secret would otherwise be printed.
pub const REDACTED: &str = "********";

#[derive(Clone, PartialEq, Eq)]
pub struct SecretValue(String);

impl SecretValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretValue({REDACTED})")
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}
