// ABOUTME: Validated inputs for the deploy and patch workflows.
// ABOUTME: Built once per invocation from CLI flags merged over mass.yml defaults.

use crate::types::{AppName, ConfigKey, Target};
use nonempty::NonEmpty;

#[derive(Debug, Clone)]
pub struct DeployRequest {
    pub target: Target,
    pub apps: NonEmpty<AppName>,
    /// Branch, tag, or commit to deploy.
    pub reference: String,
    pub repo: String,
    pub image_repo: String,
    /// Present only when migrations run; deployed before `apps`.
    pub migrate_app: Option<AppName>,
    pub noop: bool,
}

impl DeployRequest {
    pub fn migrate(&self) -> bool {
        self.migrate_app.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct PatchRequest {
    pub target: Target,
    pub apps: Vec<AppName>,
    pub config_keys: NonEmpty<ConfigKey>,
    /// Redeploy each app after patching it.
    pub redeploy: bool,
    pub noop: bool,
}
