use crate::error::{Result, WeekzError};
use crate::model::DEFAULT_BUTTON_TEXT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for weekz, stored in the data dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekzConfig {
    /// Button text used for a resource when none is given (e.g. "Link")
    #[serde(default = "default_button_text")]
    pub default_button_text: String,

    /// Whether destructive commands prompt before deleting
    #[serde(default = "default_confirm_deletes")]
    pub confirm_deletes: bool,
}

fn default_button_text() -> String {
    DEFAULT_BUTTON_TEXT.to_string()
}

fn default_confirm_deletes() -> bool {
    true
}

impl Default for WeekzConfig {
    fn default() -> Self {
        Self {
            default_button_text: default_button_text(),
            confirm_deletes: default_confirm_deletes(),
        }
    }
}

impl WeekzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WeekzError::Io)?;
        let config: WeekzConfig =
            serde_json::from_str(&content).map_err(WeekzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WeekzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(WeekzError::Serialization)?;
        fs::write(config_path, content).map_err(WeekzError::Io)?;
        Ok(())
    }

    /// The keys understood by `weekz config`, with their current values.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("button-text", self.default_button_text.clone()),
            ("confirm", self.confirm_deletes.to_string()),
        ]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "button-text" => {
                let value = value.trim();
                self.default_button_text = if value.is_empty() {
                    default_button_text()
                } else {
                    value.to_string()
                };
            }
            "confirm" => {
                self.confirm_deletes = value.parse().map_err(|_| {
                    WeekzError::Api(format!("Expected true or false, got '{}'", value))
                })?;
            }
            _ => return Err(WeekzError::Api(format!("Unknown config key '{}'", key))),
        }
        Ok(())
    }
}
