#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timesheet::libs::config::{Config, StorageConfig, CONFIG_FILE_NAME};

    /// Temporary directory standing in for the application data directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
        db_file_name: String,
        slot_key: String,
    }

    impl ConfigTestContext {
        fn config_path(&self) -> std::path::PathBuf {
            self.temp_dir.path().join(CONFIG_FILE_NAME)
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                db_file_name: "work.db".to_string(),
                slot_key: "weekA".to_string(),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.storage.is_none());

        let storage = config.storage();
        assert_eq!(storage.db_file_name, "timesheet.db");
        assert_eq!(storage.slot_key, "timesheetData");
        assert_eq!(storage, StorageConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            storage: Some(StorageConfig {
                db_file_name: ctx.db_file_name.clone(),
                slot_key: ctx.slot_key.clone(),
            }),
        };
        config.save_to(ctx.config_path()).unwrap();

        let read_config = Config::read_from(ctx.config_path()).unwrap();
        let storage = read_config.storage();
        assert_eq!(storage.db_file_name, ctx.db_file_name);
        assert_eq!(storage.slot_key, ctx.slot_key);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config_omits_storage_section(ctx: &mut ConfigTestContext) {
        Config::default().save_to(ctx.config_path()).unwrap();
        let text = fs::read_to_string(ctx.config_path()).unwrap();
        assert!(!text.contains("storage"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), "{ storage: ").unwrap();
        assert!(Config::read_from(ctx.config_path()).is_err());
    }
}
