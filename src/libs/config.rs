//! Application configuration management.
//!
//! Settings are stored as JSON in the platform data directory. Everything is
//! optional: a missing or empty configuration file simply means defaults
//! apply everywhere. The interactive wizard behind `tasklite init` fills in
//! the file; `Config::read()` is used by commands that consult it.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::Priority;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// User preferences applied when a command does not say otherwise.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Category name assigned to new tasks created without `--category`.
    pub default_category: Option<String>,

    /// Priority assigned to new tasks created without `--priority`.
    pub default_priority: Option<Priority>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when the file
    /// does not exist yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Writes the configuration file, replacing any previous contents.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive configuration wizard. Empty answers clear the setting.
    pub fn init() -> Result<Self> {
        let current = Self::read()?;

        msg_print!(Message::ConfigWizardHeader, true);

        let category: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultCategory.to_string())
            .default(current.default_category.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let priority: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultPriority.to_string())
            .default(current.default_priority.map(|p| p.to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let default_priority = if priority.is_empty() { None } else { Some(priority.parse::<Priority>()?) };

        Ok(Self {
            default_category: if category.is_empty() { None } else { Some(category) },
            default_priority,
        })
    }
}
