use crate::error::{LinkbookError, Result};
use crate::store::fs_backend::{DEFAULT_CATEGORIES_FILE, DEFAULT_NOTES_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for linkbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkbookConfig {
    /// File name of the category document, relative to the data dir
    #[serde(default = "default_categories_file")]
    pub categories_file: String,

    /// File name of the notes document, relative to the data dir
    #[serde(default = "default_notes_file")]
    pub notes_file: String,
}

fn default_categories_file() -> String {
    DEFAULT_CATEGORIES_FILE.to_string()
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

impl Default for LinkbookConfig {
    fn default() -> Self {
        Self {
            categories_file: default_categories_file(),
            notes_file: default_notes_file(),
        }
    }
}

/// Keys accepted by `linkbook config`.
pub const CONFIG_KEYS: &[&str] = &["categories-file", "notes-file"];

impl LinkbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LinkbookError::Io)?;
        let config: LinkbookConfig =
            serde_json::from_str(&content).map_err(LinkbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LinkbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LinkbookError::Serialization)?;
        fs::write(config_path, content).map_err(LinkbookError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "categories-file" => Some(&self.categories_file),
            "notes-file" => Some(&self.notes_file),
            _ => None,
        }
    }

    /// Sets a key by its CLI name. Document names must be plain file names.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() || value.contains(|c: char| c == '/' || c == '\\') {
            return Err(LinkbookError::Validation(format!(
                "Invalid file name for {}: '{}'",
                key, value
            )));
        }
        match key {
            "categories-file" => self.categories_file = value.to_string(),
            "notes-file" => self.notes_file = value.to_string(),
            other => {
                return Err(LinkbookError::Validation(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}
