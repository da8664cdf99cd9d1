use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory scanned for price lists.
    pub price_dir: PathBuf,
    /// Substring a price-list file name must contain.
    pub file_marker: String,
    pub extension: String,
    /// Where the HTML report is written on exit.
    pub report_path: PathBuf,
    /// Display width of the product column in console output.
    pub name_width: usize,
    pub exit_command: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            price_dir: PathBuf::from("./"),
            file_marker: "price".into(),
            extension: "csv".into(),
            report_path: PathBuf::from("output.html"),
            name_width: 30,
            exit_command: "exit".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads the JSON config; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No config at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
