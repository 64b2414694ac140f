//! Configuration management for the timesheet application.
//!
//! Settings live in a JSON file in the platform data directory. Every
//! section is optional so an absent or partial file still yields a working
//! configuration.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\timesheet\config.json`
//! - **macOS**: `~/Library/Application Support/timesheet/config.json`
//! - **Linux**: `~/.local/share/timesheet/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use timesheet::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Database: {}", config.storage().db_file_name);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::libs::snapshot::SLOT_KEY;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Where the week is persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// SQLite database file name, relative to the data directory.
    pub db_file_name: String,

    /// Key of the slot holding the week snapshot.
    ///
    /// Two configurations pointing at the same database with different keys
    /// keep independent weeks.
    pub slot_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            db_file_name: DB_FILE_NAME.to_string(),
            slot_key: SLOT_KEY.to_string(),
        }
    }
}

/// Root configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Storage settings, defaults when the section is absent.
    pub fn storage(&self) -> StorageConfig {
        self.storage.clone().unwrap_or_default()
    }

    /// Reads the configuration from the data directory.
    ///
    /// A missing file is not an error: the default configuration is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(config_file_path)
    }

    /// Reads the configuration from an explicit path.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration to the data directory as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(config_file_path)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard.
    ///
    /// Existing values are offered as defaults, so re-running the wizard and
    /// accepting every prompt leaves the configuration unchanged.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.storage();

        msg_print!(Message::ConfigModuleStorage);
        config.storage = Some(StorageConfig {
            db_file_name: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDbFileName.to_string())
                .default(default.db_file_name)
                .interact_text()?,
            slot_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSlotKey.to_string())
                .default(default.slot_key)
                .interact_text()?,
        });

        Ok(config)
    }
}
