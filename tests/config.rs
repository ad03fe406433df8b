// ABOUTME: Integration tests for configuration parsing and request building.
// ABOUTME: Tests mass.yml parsing, file discovery, and CLI flag merging.

use massdeploy::config::*;
use massdeploy::error::Error;

fn shop_config() -> Config {
    Config::from_yaml(
        r#"
repo: acme/shop
ref: main
image_repo: shop
migrate_app: migrator
apps:
  - web
  - worker
"#,
    )
    .unwrap()
}

fn deploy_defaults() -> DeployOverrides {
    DeployOverrides {
        migrate: true,
        ..DeployOverrides::default()
    }
}

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = shop_config();
        assert_eq!(config.repo.as_deref(), Some("acme/shop"));
        assert_eq!(config.reference, "main");
        assert_eq!(config.image_repo.as_deref(), Some("shop"));
        assert_eq!(config.migrate_app.unwrap().as_str(), "migrator");
        assert_eq!(
            config.apps.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
            vec!["web", "worker"]
        );
        assert_eq!(config.tools, Tools::default());
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config = Config::from_yaml("").unwrap();
        assert!(config.repo.is_none());
        assert_eq!(config.reference, "main");
        assert!(config.apps.is_empty());
        assert!(config.migrate_app.is_none());
    }

    #[test]
    fn blank_migrate_app_means_none() {
        let config = Config::from_yaml("migrate_app: \"\"\napps: []\n").unwrap();
        assert!(config.migrate_app.is_none());
    }

    #[test]
    fn invalid_app_name_is_rejected() {
        assert!(Config::from_yaml("apps:\n  - Web_App\n").is_err());
    }

    #[test]
    fn tools_section_overrides_binaries() {
        let config = Config::from_yaml(
            r#"
tools:
  git: /opt/git/bin/git
  git_host: git.example.com
"#,
        )
        .unwrap();
        assert_eq!(config.tools.git, "/opt/git/bin/git");
        assert_eq!(config.tools.git_host, "git.example.com");
        assert_eq!(config.tools.aws, "aws");
        assert_eq!(config.tools.mass, "mass");
    }
}

mod discovery {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert!(config.source.is_none());
        assert!(config.apps.is_empty());
    }

    #[test]
    fn finds_mass_yml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "repo: acme/shop\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.repo.as_deref(), Some("acme/shop"));
        assert_eq!(config.source, Some(dir.path().join(CONFIG_FILENAME)));
    }

    #[test]
    fn prefers_mass_yml_over_alternatives() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "repo: primary/repo\n").unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME_ALT), "repo: other/repo\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.repo.as_deref(), Some("primary/repo"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "apps: [unterminated\n").unwrap();
        assert!(matches!(Config::discover(dir.path()), Err(Error::Yaml(_))));
    }

    #[test]
    fn init_writes_loadable_file_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        init_config(dir.path(), Some("acme/shop"), None, false).unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.repo.as_deref(), Some("acme/shop"));

        let err = init_config(dir.path(), None, None, false).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));
        init_config(dir.path(), None, None, true).unwrap();
    }
}

mod deploy_requests {
    use super::*;

    #[test]
    fn file_values_fill_unset_flags() {
        let request = shop_config()
            .deploy_request("staging", false, deploy_defaults())
            .unwrap();

        assert_eq!(request.target.as_str(), "staging");
        assert_eq!(request.apps.len(), 2);
        assert_eq!(request.reference, "main");
        assert_eq!(request.repo, "acme/shop");
        assert_eq!(request.image_repo, "shop");
        assert_eq!(request.migrate_app.unwrap().as_str(), "migrator");
        assert!(!request.noop);
    }

    #[test]
    fn flags_override_file_values() {
        let request = shop_config()
            .deploy_request(
                "prod",
                true,
                DeployOverrides {
                    apps: vec!["api".to_string()],
                    reference: Some("v2.0.0".to_string()),
                    repo: Some("acme/other".to_string()),
                    image_repo: Some("other".to_string()),
                    migrate: true,
                    migrate_app: Some("schema".to_string()),
                },
            )
            .unwrap();

        assert_eq!(request.apps.head.as_str(), "api");
        assert_eq!(request.apps.len(), 1);
        assert_eq!(request.reference, "v2.0.0");
        assert_eq!(request.repo, "acme/other");
        assert_eq!(request.image_repo, "other");
        assert_eq!(request.migrate_app.unwrap().as_str(), "schema");
        assert!(request.noop);
    }

    #[test]
    fn no_migrate_drops_the_migration_app() {
        let request = shop_config()
            .deploy_request(
                "staging",
                false,
                DeployOverrides {
                    migrate: false,
                    ..DeployOverrides::default()
                },
            )
            .unwrap();
        assert!(request.migrate_app.is_none());
        assert!(!request.migrate());
    }

    #[test]
    fn missing_apps_is_reported() {
        let err = Config::from_yaml("repo: a/b\nimage_repo: b\n")
            .unwrap()
            .deploy_request("staging", false, DeployOverrides::default())
            .unwrap_err();
        assert!(matches!(err, Error::MissingOption("apps")));
    }

    #[test]
    fn missing_repo_is_reported() {
        let err = Config::default()
            .deploy_request(
                "staging",
                false,
                DeployOverrides {
                    apps: vec!["web".to_string()],
                    ..DeployOverrides::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::MissingOption("repo")));
        assert!(err.to_string().contains("--repo"));
    }

    #[test]
    fn migrate_without_migration_app_is_reported() {
        let err = Config::from_yaml("repo: a/b\nimage_repo: b\napps: [web]\n")
            .unwrap()
            .deploy_request("staging", false, deploy_defaults())
            .unwrap_err();
        assert!(matches!(err, Error::MissingOption("migrate-app")));
    }

    #[test]
    fn invalid_target_is_rejected() {
        let err = shop_config()
            .deploy_request("Prod!", false, deploy_defaults())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}

mod patch_requests {
    use super::*;

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn default_apps_include_the_migration_app() {
        let request = shop_config()
            .patch_request(
                "staging",
                false,
                PatchOverrides {
                    apps: vec![],
                    config_keys: keys(&["email_pw_joe"]),
                    redeploy: true,
                },
            )
            .unwrap();

        assert_eq!(
            request.apps.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
            vec!["web", "worker", "migrator"]
        );
        assert_eq!(request.config_keys.head.as_str(), "email_pw_joe");
        assert!(request.redeploy);
    }

    #[test]
    fn explicit_apps_replace_the_defaults() {
        let request = shop_config()
            .patch_request(
                "staging",
                false,
                PatchOverrides {
                    apps: vec!["a".to_string(), "b".to_string()],
                    config_keys: keys(&["k"]),
                    redeploy: false,
                },
            )
            .unwrap();
        assert_eq!(request.apps.len(), 2);
        assert!(!request.redeploy);
    }

    #[test]
    fn at_least_one_key_is_required() {
        let err = shop_config()
            .patch_request("staging", false, PatchOverrides::default())
            .unwrap_err();
        assert!(matches!(err, Error::MissingOption("config-key")));
    }

    #[test]
    fn malformed_key_is_rejected() {
        let err = shop_config()
            .patch_request(
                "staging",
                false,
                PatchOverrides {
                    config_keys: keys(&["bad key"]),
                    ..PatchOverrides::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
