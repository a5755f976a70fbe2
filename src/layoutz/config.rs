use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{LayoutError, Result};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_COLUMNS: usize = 2;

/// Configuration for layoutz, stored as config.json in the config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutzConfig {
    /// Columns in the preview grid (the record page renders two-up).
    #[serde(default = "default_columns")]
    pub preview_columns: usize,

    /// Pretty-print exported JSON.
    #[serde(default = "default_pretty")]
    pub pretty_export: bool,

    /// Template used when a session starts without a file.
    #[serde(default = "default_template")]
    pub default_template: String,
}

fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

fn default_pretty() -> bool {
    true
}

fn default_template() -> String {
    crate::template::DEFAULT.to_string()
}

impl Default for LayoutzConfig {
    fn default() -> Self {
        Self {
            preview_columns: DEFAULT_COLUMNS,
            pretty_export: true,
            default_template: default_template(),
        }
    }
}

impl LayoutzConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LayoutError::Io)?;
        let config: LayoutzConfig =
            serde_json::from_str(&content).map_err(LayoutError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LayoutError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LayoutError::Serialization)?;
        fs::write(config_path, content).map_err(LayoutError::Io)?;
        Ok(())
    }

    /// Columns clamp to at least one; a zero-column grid renders nothing.
    pub fn preview_columns(&self) -> usize {
        self.preview_columns.max(1)
    }

    pub fn set_preview_columns(&mut self, columns: usize) {
        self.preview_columns = columns.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LayoutzConfig::default();
        assert_eq!(config.preview_columns, 2);
        assert!(config.pretty_export);
        assert_eq!(config.default_template, "account");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = LayoutzConfig::load(temp.path().join("nope")).unwrap();
        assert_eq!(config, LayoutzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let mut config = LayoutzConfig::default();
        config.set_preview_columns(1);
        config.default_template = "contact".to_string();
        config.save(temp.path()).unwrap();

        let loaded = LayoutzConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_columns_never_zero() {
        let mut config = LayoutzConfig::default();
        config.set_preview_columns(0);
        assert_eq!(config.preview_columns(), 1);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "preview_columns": 3 }"#,
        )
        .unwrap();

        let config = LayoutzConfig::load(temp.path()).unwrap();
        assert_eq!(config.preview_columns, 3);
        assert!(config.pretty_export);
    }
}
