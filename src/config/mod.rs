use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::context::DEFAULT_PATIENT_NAME;
use crate::core::Section;

const APP_DIR: &str = "cardiorehab";
const CONFIG_ENV: &str = "CARDIOREHAB_CONFIG";
const LOG_FILE_NAME: &str = "cardiorehab.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub patient_name: String,
    pub default_section: String,
    pub tick_rate_ms: u64,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patient_name: DEFAULT_PATIENT_NAME.to_string(),
            default_section: Section::Dashboard.id().to_string(),
            tick_rate_ms: 200,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Configured log file, or the default one under the data dir
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| data_dir().map(|dir| dir.join(LOG_FILE_NAME)))
    }
}

/// Load from the first config location; a missing file means defaults
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(config_path) else {
        return Ok(Config::default());
    };
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join(APP_DIR).join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join(APP_DIR).join("config.toml"));
    }

    directories::ProjectDirs::from("io", APP_DIR, APP_DIR)
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join(APP_DIR));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join(APP_DIR));
    }
    directories::ProjectDirs::from("io", APP_DIR, APP_DIR)
        .map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = parse("").expect("empty config");
        assert_eq!(config, Config::default());
        assert_eq!(config.patient_name, "Sarah");
        assert_eq!(config.tick_rate_ms, 200);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = parse("patient_name = \"Ana\"\ndefault_section = \"vitals\"\n")
            .expect("partial config");
        assert_eq!(config.patient_name, "Ana");
        assert_eq!(config.default_section, "vitals");
        assert_eq!(config.log_level, "info");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        assert!(parse("tick_rate_ms = \"fast\"").is_err());
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("cardiorehab-missing-config.toml");
        let config = load_from(&path).expect("missing file falls back");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let config = parse("log_file = \"/tmp/rehab.log\"").expect("config");
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/rehab.log")));
    }
}
