// ABOUTME: Integration tests for validated identifiers and derived names.
// ABOUTME: Tests parsing, validation, and the naming conventions shared with the controller.

use massdeploy::types::*;

mod name_tests {
    use super::*;

    #[test]
    fn accepts_lowercase_alphanumeric_with_hyphens() {
        assert_eq!(AppName::new("shop-tracker2").unwrap().as_str(), "shop-tracker2");
        assert_eq!(Target::new("staging").unwrap().as_str(), "staging");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(AppName::new("  web \n").unwrap().as_str(), "web");
    }

    #[test]
    fn rejects_bad_names() {
        assert_eq!(AppName::new(""), Err(NameError::Empty));
        assert_eq!(AppName::new("-web"), Err(NameError::StartsWithHyphen));
        assert_eq!(AppName::new("web-"), Err(NameError::EndsWithHyphen));
        assert_eq!(AppName::new("Web"), Err(NameError::NotLowercase));
        assert_eq!(AppName::new("web app"), Err(NameError::InvalidChar(' ')));
        assert_eq!(AppName::new(&"a".repeat(64)), Err(NameError::TooLong));
    }

    #[test]
    fn parses_from_str() {
        let target: Target = "prod".parse().unwrap();
        assert_eq!(target.to_string(), "prod");
    }
}

mod resource_name_tests {
    use super::*;

    #[test]
    fn joins_target_and_app_under_infra_prefix() {
        let name = ResourceName::new(
            &Target::new("staging").unwrap(),
            &AppName::new("shoptracker").unwrap(),
        );
        assert_eq!(name.as_str(), "infra-staging-shoptracker");
        assert_eq!(name.to_string(), "infra-staging-shoptracker");
    }
}

mod commit_tests {
    use super::*;

    #[test]
    fn parses_full_sha() {
        let sha = CommitSha::parse("abc1230000000000000000000000000000000def\n").unwrap();
        assert_eq!(sha.as_str(), "abc1230000000000000000000000000000000def");
        assert_eq!(sha.short(), "abc123000000");
    }

    #[test]
    fn keeps_case_as_given() {
        assert_eq!(CommitSha::parse("ABCDEF").unwrap().as_str(), "ABCDEF");
    }

    #[test]
    fn rejects_non_hex_and_empty() {
        assert!(CommitSha::parse("").is_err());
        assert!(CommitSha::parse("not-a-sha").is_err());
    }
}

mod image_tag_tests {
    use super::*;

    #[test]
    fn tag_is_sha_prefixed_commit() {
        let sha = CommitSha::parse("abc123").unwrap();
        assert_eq!(ImageTag::for_commit(&sha).as_str(), "sha-abc123");
        assert_eq!(IMAGE_TAG_PREFIX, "sha-");
    }

    #[test]
    fn embedded_commit_strips_prefix_literally() {
        assert_eq!(ImageTag::embedded_commit("sha-abc123"), Some("abc123"));
        assert_eq!(ImageTag::embedded_commit(" sha-abc123 \n"), Some("abc123"));
        assert_eq!(ImageTag::embedded_commit("shaabc123"), None);
        assert_eq!(ImageTag::embedded_commit("latest"), None);
    }
}

mod config_key_tests {
    use super::*;

    #[test]
    fn accepts_dotted_paths() {
        assert_eq!(ConfigKey::new("smtp.password").unwrap().as_str(), "smtp.password");
        assert_eq!(ConfigKey::image_tag().as_str(), "image.tag");
    }

    #[test]
    fn rejects_unsafe_keys() {
        assert!(ConfigKey::new("").is_err());
        assert!(ConfigKey::new(".leading").is_err());
        assert!(ConfigKey::new("has space").is_err());
        assert!(ConfigKey::new("quote\"").is_err());
    }
}

mod secret_tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let secret = SecretValue::new("hunter2");
        let shown = format!("{secret:?}");
        assert!(!shown.contains("hunter2"));
        assert!(shown.contains(REDACTED));
        assert_eq!(secret.expose(), "hunter2");
    }
}
