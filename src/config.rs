use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::services::{CSV_FILE, REPORT_FILE, SLOT_FILE};

fn default_rating_labels() -> Vec<String> {
    vec![
        "5 - Excellent".to_string(),
        "4 - Good".to_string(),
        "3 - Average".to_string(),
        "2 - Poor".to_string(),
        "1 - Very poor".to_string(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Override for the slot file path (absolute)
    #[serde(default)]
    pub data_file: Option<String>,
    /// Directory exports are written to; defaults to the current directory
    #[serde(default)]
    pub export_dir: Option<String>,
    /// Labels offered by the rating selector
    #[serde(default = "default_rating_labels")]
    pub rating_labels: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            export_dir: None,
            rating_labels: default_rating_labels(),
        }
    }
}

impl Config {
    /// Application data directory (`~/.local/share/feedback-tui` on Linux).
    pub fn data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("feedback-tui")
    }

    fn config_path() -> PathBuf {
        Self::data_dir().join("config.json")
    }

    /// Load the config file, falling back to defaults when it is missing
    /// or unreadable.
    pub fn load() -> Config {
        let config_path = Self::config_path();
        if !config_path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&config_path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
        {
            Some(config) => config,
            None => {
                tracing::warn!(path = %config_path.display(), "unreadable config, using defaults");
                Config::default()
            }
        }
    }

    /// Path of the persisted slot.
    pub fn slot_path(&self) -> PathBuf {
        match &self.data_file {
            Some(path) => PathBuf::from(path),
            None => Self::data_dir().join(SLOT_FILE),
        }
    }

    fn export_base(&self) -> PathBuf {
        match &self.export_dir {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from("."),
        }
    }

    /// Target path for the CSV export.
    pub fn csv_path(&self) -> PathBuf {
        self.export_base().join(CSV_FILE)
    }

    /// Target path for the HTML report.
    pub fn report_path(&self) -> PathBuf {
        self.export_base().join(REPORT_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_paths() {
        let config = Config::default();
        assert!(config.slot_path().ends_with(SLOT_FILE));
        assert_eq!(config.csv_path(), PathBuf::from("./student-feedback.csv"));
    }

    #[test]
    fn test_overrides_respected() {
        let config = Config {
            data_file: Some("/tmp/custom.json".to_string()),
            export_dir: Some("/tmp/exports".to_string()),
            ..Config::default()
        };
        assert_eq!(config.slot_path(), PathBuf::from("/tmp/custom.json"));
        assert_eq!(
            config.csv_path(),
            PathBuf::from("/tmp/exports/student-feedback.csv")
        );
    }

    #[test]
    fn test_partial_config_gets_default_labels() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.rating_labels.len(), 5);
        assert!(config.rating_labels[0].starts_with('5'));
    }
}
