// ABOUTME: Validated domain types shared across the rollout pipeline.
// ABOUTME: Phantom-typed names keep targets and apps from being swapped.

mod commit;
mod config_key;
mod image_tag;
mod name;
mod resource_name;
mod secret;

pub use commit::{CommitSha, CommitShaError};
pub use config_key::{ConfigKey, ConfigKeyError};
pub use image_tag::{IMAGE_TAG_PREFIX, ImageTag};
pub use name::{AppName, Name, NameError, Target};
pub use resource_name::ResourceName;
pub use secret::{REDACTED, SecretValue};
