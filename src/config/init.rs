// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Creates mass.yml template files.

use std::path::Path;

use crate::error::{Error, Result};

use super::CONFIG_FILENAME;

pub fn init_config(dir: &Path, repo: Option<&str>, image_repo: Option<&str>, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let yaml = generate_template_yaml(
        repo.unwrap_or("my-org/my-app"),
        image_repo.unwrap_or("my-app"),
    );
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(repo: &str, image_repo: &str) -> String {
    format!(
        r#"# Source repository (owner/name on the git host, or a full remote URL)
repo: {repo}
# Ref deployed when --ref is not given
ref: main
# Registry repository holding images tagged sha-<commit>
image_repo: {image_repo}
# Deployed first on every rollout unless --no-migrate is passed
migrate_app: migrator
apps:
  - web
  - worker
# tools:
#   git: git
#   aws: aws
#   mass: mass
#   git_host: github.com
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn template_parses_back() {
        let config = Config::from_yaml(&generate_template_yaml("acme/shop", "shop")).unwrap();
        assert_eq!(config.repo.as_deref(), Some("acme/shop"));
        assert_eq!(config.image_repo.as_deref(), Some("shop"));
        assert_eq!(config.reference, "main");
        assert_eq!(config.migrate_app.unwrap().as_str(), "migrator");
        assert_eq!(config.apps.len(), 2);
    }
}
