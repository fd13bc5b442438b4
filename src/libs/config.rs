//! Configuration management for the taskdash application.
//!
//! A single JSON file in the platform data directory holds the startup
//! settings, most importantly the reset flag consumed by the `init`
//! command: when set, initialization wipes the database and reloads the
//! seed data instead of keeping what is already there.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// When true, `init` destroys any existing database before
    /// recreating and re-seeding it.
    #[serde(default)]
    pub reset: bool,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup: asks for the reset policy, defaulting to the
    /// currently saved value.
    pub fn init() -> Result<Self> {
        let current = Config::read().unwrap_or_default();
        let reset = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Reset the database on initialization?")
            .default(current.reset)
            .interact()?;
        Ok(Config { reset })
    }
}
