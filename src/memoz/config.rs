use crate::error::{MemozError, Result};
use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for memoz, stored as config.json next to the memo slot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemozConfig {
    /// Category assigned to new memos created without an explicit label
    #[serde(default)]
    pub default_category: Category,
}

impl MemozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MemozError::Io)?;
        let config: MemozConfig =
            serde_json::from_str(&content).map_err(MemozError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MemozError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MemozError::Serialization)?;
        fs::write(config_path, content).map_err(MemozError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-category" => Some(self.default_category.label().to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "default-category" => {
                self.default_category = Category::from_str(value).map_err(|e| e.to_string())?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
