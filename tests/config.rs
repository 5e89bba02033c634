#[cfg(test)]
mod tests {
    use jirat::api::JiraConfig;
    use jirat::libs::config::{Config, CONFIG_FILE_NAME};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("jirat").join(CONFIG_FILE_NAME);
            ConfigTestContext { _temp_dir: temp_dir, path }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.jira.is_none());
        assert!(config.jira().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let mut jira = JiraConfig::new("jdoe", "https://jira.example.com");
        jira.start_transition = "11".to_string();
        jira.accept_invalid_certs = true;
        let config = Config { jira: Some(jira) };

        config.save_to(&ctx.path).unwrap();
        let read = Config::read_from(&ctx.path).unwrap();

        assert_eq!(read, config);
        assert_eq!(read.jira().unwrap().login, "jdoe");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_transition_ids_use_defaults(ctx: &mut ConfigTestContext) {
        fs::create_dir_all(ctx.path.parent().unwrap()).unwrap();
        fs::write(&ctx.path, r#"{ "jira": { "login": "jdoe", "api_url": "https://jira.example.com" } }"#).unwrap();

        let config = Config::read_from(&ctx.path).unwrap();
        let jira = config.jira().unwrap();
        assert_eq!(jira.start_transition, "4");
        assert_eq!(jira.stop_transition, "301");
        assert!(!jira.accept_invalid_certs);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_jira_is_omitted_from_file(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.path).unwrap();

        let raw = fs::read_to_string(&ctx.path).unwrap();
        assert!(!raw.contains("jira"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_config_is_an_error(ctx: &mut ConfigTestContext) {
        fs::create_dir_all(ctx.path.parent().unwrap()).unwrap();
        fs::write(&ctx.path, "{ not json").unwrap();

        assert!(Config::read_from(&ctx.path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.path).unwrap();
        Config::delete_at(&ctx.path).unwrap();
        assert!(!ctx.path.exists());

        // Deleting twice is fine.
        Config::delete_at(&ctx.path).unwrap();
    }
}
