//! Configuration management
//!
//! Optional TOML file at `~/.config/donelog/config.toml`; a missing file
//! means built-in defaults. Priority: CLI argument > config.toml > default.

use super::Result;
use crate::core::sources::{github, linear};
use crate::error::{AppError, CliError, ConfigError, StorageError};
use crate::utils::validation::{validate_date_range, validate_search_query, validate_url};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "donelog";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Directory for exported files; current directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub linear: LinearConfig,
    #[serde(default)]
    pub github: GithubConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LinearConfig {
    pub api_url: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            api_url: linear::LINEAR_API_URL.to_string(),
            start_date: linear::DEFAULT_START_DATE.to_string(),
            end_date: linear::DEFAULT_END_DATE.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GithubConfig {
    pub api_url: String,
    pub search_query: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: github::GITHUB_API_URL.to_string(),
            search_query: github::DEFAULT_SEARCH_QUERY.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(home_dir
            .join(".config")
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }

    /// `<dir>/config.toml`, or the default location when no directory is given.
    pub fn resolve_path(config_dir: Option<&Path>) -> Result<PathBuf> {
        match config_dir {
            Some(dir) => Ok(dir.join(CONFIG_FILE_NAME)),
            None => Self::config_file_path(),
        }
    }

    /// Configured output directory, falling back to the current directory
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .as_deref()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Check the values a run would send to the APIs
    pub fn validate(&self) -> crate::Result<()> {
        let linear = &self.linear;
        let github = &self.github;

        invalid_value("linear.api_url", &linear.api_url, validate_url(&linear.api_url))?;
        invalid_value(
            "linear.start_date..end_date",
            &format!("{}..{}", linear.start_date, linear.end_date),
            validate_date_range(&linear.start_date, &linear.end_date),
        )?;
        invalid_value("github.api_url", &github.api_url, validate_url(&github.api_url))?;
        invalid_value(
            "github.search_query",
            &github.search_query,
            validate_search_query(&github.search_query),
        )?;
        Ok(())
    }
}

// Re-label a validation failure as a bad config value
fn invalid_value(field: &str, value: &str, check: crate::Result<()>) -> crate::Result<()> {
    check.map_err(|e| {
        let reason = match e {
            AppError::Cli(CliError::InvalidArguments(message)) => message,
            other => other.to_string(),
        };
        ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.output_dir.is_none());
        assert_eq!(config.linear.api_url, "https://api.linear.app/graphql");
        assert_eq!(config.linear.start_date, "2025-01-01T00:00:00.000Z");
        assert_eq!(config.github.api_url, "https://api.github.com/graphql");
        assert!(config.github.search_query.contains("is:merged"));
        assert_eq!(config.output_dir(), PathBuf::from("."));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output_dir = Some("reports".to_string());
        config.linear.start_date = "2025-06-01T00:00:00.000Z".to_string();
        config.github.search_query = "is:pr author:@me is:merged".to_string();

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");
        let loaded = Config::load(Some(config_path)).expect("Failed to load config");

        assert_eq!(loaded, config);
        assert_eq!(loaded.output_dir(), PathBuf::from("reports"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[linear]\nend_date = \"2025-03-31T23:59:59.999Z\"\n",
        )
        .unwrap();

        let config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(config.linear.end_date, "2025-03-31T23:59:59.999Z");
        assert_eq!(config.linear.start_date, linear::DEFAULT_START_DATE);
        assert_eq!(config.github, GithubConfig::default());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load(Some(temp_dir.path().join("nonexistent.toml")))
            .expect("Failed to load default config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[linear\napi_url = ").unwrap();

        let result = Config::load(Some(config_path));
        assert!(matches!(result, Err(StorageError::ConfigParseError { .. })));
    }

    #[test]
    fn test_resolve_path_with_dir() {
        let path = Config::resolve_path(Some(Path::new("/tmp/donelog"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/donelog/config.toml"));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut config = Config::default();
        config.linear.start_date = "2026-01-01T00:00:00.000Z".to_string();
        config.linear.end_date = "2025-01-01T00:00:00.000Z".to_string();
        match config.validate() {
            Err(AppError::Config(ConfigError::InvalidValue { field, reason, .. })) => {
                assert_eq!(field, "linear.start_date..end_date");
                assert!(reason.contains("is after end date"));
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }
}
