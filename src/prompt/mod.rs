// ABOUTME: Interactive collection of secret config values.
// ABOUTME: Input is masked and every value is gathered before anything is patched.

use crate::controller::ConfigUpdate;
use crate::types::{ConfigKey, SecretValue};
use dialoguer::Password;
use std::collections::HashSet;
use dialoguer::theme::ColorfulTheme;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read value for {key}: {reason}")]
    Input { key: ConfigKey, reason: String },
}

/// Source of secret values.
pub trait SecretPrompt {
    fn ask(&self, key: &ConfigKey) -> Result<SecretValue, PromptError>;
}

/// Prompts on the controlling terminal without echoing input.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretPrompt for TerminalPrompt {
    fn ask(&self, key: &ConfigKey) -> Result<SecretValue, PromptError> {
        // Blank line keeps consecutive prompts readable.
        eprintln!();
        Password::with_theme(&self.theme)
            .with_prompt(format!("What is the value for {key}?"))
            .allow_empty_password(true)
            .interact()
            .map(SecretValue::from)
            .map_err(|e| PromptError::Input {
                key: key.clone(),
                reason: e.to_string(),
            })
    }
}

/// A config key paired with the value the operator entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: ConfigKey,
    pub value: SecretValue,
}

impl From<ConfigEntry> for ConfigUpdate {
    fn from(entry: ConfigEntry) -> Self {
        ConfigUpdate::secret(entry.key, entry.value)
    }
}

/// Ask for every distinct key in first-seen order. Fails on the first
/// unreadable value, before any caller has issued a mutating call.
pub fn collect_entries(
    keys: &[ConfigKey],
    prompt: &dyn SecretPrompt,
) -> Result<Vec<ConfigEntry>, PromptError> {
    let mut seen = HashSet::new();
    keys.iter()
        .filter(|key| seen.insert(*key))
        .map(|key| {
            prompt.ask(key).map(|value| ConfigEntry {
                key: key.clone(),
                value,
            })
        })
        .collect()
}
