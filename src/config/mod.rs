// ABOUTME: Configuration defaults loaded from mass.yml.
// ABOUTME: Merges file defaults with CLI flags into validated rollout requests.

mod init;
mod tools;

pub use init::init_config;
pub use tools::Tools;

use crate::error::{Error, Result};
use crate::rollout::{DeployRequest, PatchRequest};
use crate::types::{AppName, ConfigKey, Target};
use nonempty::NonEmpty;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "mass.yml";
pub const CONFIG_FILENAME_ALT: &str = "mass.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".mass/config.yml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Source repository, `owner/name` or a full remote URL.
    #[serde(default)]
    pub repo: Option<String>,

    #[serde(default = "default_ref", rename = "ref")]
    pub reference: String,

    /// Registry repository holding the app images.
    #[serde(default)]
    pub image_repo: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_app")]
    pub migrate_app: Option<AppName>,

    #[serde(default)]
    pub apps: Vec<AppName>,

    #[serde(default)]
    pub tools: Tools,

    /// File this config was read from; None for built-in defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

fn default_ref() -> String {
    "main".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: None,
            reference: default_ref(),
            image_repo: None,
            migrate_app: None,
            apps: Vec::new(),
            tools: Tools::default(),
            source: None,
        }
    }
}

/// Deploy flags as given on the command line. Unset fields fall back to
/// the config file.
#[derive(Debug, Clone, Default)]
pub struct DeployOverrides {
    pub apps: Vec<String>,
    pub reference: Option<String>,
    pub repo: Option<String>,
    pub image_repo: Option<String>,
    pub migrate: bool,
    pub migrate_app: Option<String>,
}

/// Patch flags as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct PatchOverrides {
    pub apps: Vec<String>,
    pub config_keys: Vec<String>,
    pub redeploy: bool,
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means "no overrides".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Load the first config file found in `dir`, or built-in defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading configuration");
                return Self::load(path);
            }
        }

        Ok(Self::default())
    }

    pub fn deploy_request(
        &self,
        target: &str,
        noop: bool,
        overrides: DeployOverrides,
    ) -> Result<DeployRequest> {
        let target = parse_target(target)?;

        let apps = if overrides.apps.is_empty() {
            self.apps.clone()
        } else {
            parse_apps(&overrides.apps)?
        };
        let apps = NonEmpty::from_vec(apps).ok_or(Error::MissingOption("apps"))?;

        let reference = non_empty(overrides.reference)
            .unwrap_or_else(|| self.reference.clone());
        if reference.trim().is_empty() {
            return Err(Error::MissingOption("ref"));
        }

        let repo = non_empty(overrides.repo)
            .or_else(|| non_empty(self.repo.clone()))
            .ok_or(Error::MissingOption("repo"))?;

        let image_repo = non_empty(overrides.image_repo)
            .or_else(|| non_empty(self.image_repo.clone()))
            .ok_or(Error::MissingOption("image-repo"))?;

        let migrate_app = if overrides.migrate {
            let app = match non_empty(overrides.migrate_app) {
                Some(name) => parse_app(&name)?,
                None => self
                    .migrate_app
                    .clone()
                    .ok_or(Error::MissingOption("migrate-app"))?,
            };
            Some(app)
        } else {
            None
        };

        Ok(DeployRequest {
            target,
            apps,
            reference: reference.trim().to_string(),
            repo,
            image_repo,
            migrate_app,
            noop,
        })
    }

    pub fn patch_request(
        &self,
        target: &str,
        noop: bool,
        overrides: PatchOverrides,
    ) -> Result<PatchRequest> {
        let target = parse_target(target)?;

        // Without --apps, every configured app is patched, migration app included.
        let apps = if overrides.apps.is_empty() {
            self.apps
                .iter()
                .chain(self.migrate_app.iter())
                .cloned()
                .collect()
        } else {
            parse_apps(&overrides.apps)?
        };

        let keys = overrides
            .config_keys
            .iter()
            .map(|k| ConfigKey::new(k).map_err(|e| Error::InvalidConfig(format!("{k}: {e}"))))
            .collect::<Result<Vec<_>>>()?;
        let config_keys = NonEmpty::from_vec(keys).ok_or(Error::MissingOption("config-key"))?;

        Ok(PatchRequest {
            target,
            apps,
            config_keys,
            redeploy: overrides.redeploy,
            noop,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_target(value: &str) -> Result<Target> {
    Target::new(value).map_err(|e| Error::InvalidConfig(format!("target '{value}': {e}")))
}

fn parse_app(value: &str) -> Result<AppName> {
    AppName::new(value).map_err(|e| Error::InvalidConfig(format!("app '{value}': {e}")))
}

fn parse_apps(values: &[String]) -> Result<Vec<AppName>> {
    values.iter().map(|v| parse_app(v)).collect()
}

// Custom deserializers

/// Blank strings mean "not configured" rather than an invalid name.
fn deserialize_optional_app<'de, D>(deserializer: D) -> std::result::Result<Option<AppName>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => AppName::new(name).map(Some).map_err(serde::de::Error::custom),
    }
}
