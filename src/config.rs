//! Configuration management for the MiniApp report generator
//!
//! This module provides configuration loading from TOML files with
//! zero-config defaults. Command-line flags override the loaded values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::ReportConfig;
use crate::constants::{config as paths, corpus, report};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Locations of the test corpus and the implementation reports
    pub paths: PathsConfig,
    /// Report pipeline settings
    pub report: ReportConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Input directories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root of the test corpus, one subdirectory per test
    pub tests_dir: PathBuf,
    /// Directory with one JSON report per implementation
    pub reports_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            tests_dir: PathBuf::from("tests"),
            reports_dir: PathBuf::from("reports"),
        }
    }
}

/// TOML-friendly report configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfigToml {
    /// Directory entries starting with this prefix are skipped
    pub exclude_prefix: String,
    /// Descriptor file name inside each test directory
    pub metadata_file: String,
    /// Maximum number of files read concurrently
    pub max_concurrent_reads: usize,
}

impl Default for ReportConfigToml {
    fn default() -> Self {
        Self {
            exclude_prefix: corpus::EXCLUDE_PREFIX.to_string(),
            metadata_file: corpus::METADATA_FILE.to_string(),
            max_concurrent_reads: report::DEFAULT_MAX_CONCURRENT_READS,
        }
    }
}

impl ReportConfigToml {
    /// Convert to runtime ReportConfig
    pub fn to_runtime_config(&self) -> ConfigResult<ReportConfig> {
        let config = ReportConfig {
            exclude_prefix: self.exclude_prefix.clone(),
            metadata_file: self.metadata_file.clone(),
            max_concurrent_reads: self.max_concurrent_reads,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration with precedence:
    /// 1. Explicit config file (must exist)
    /// 2. First config file found in the standard locations
    /// 3. Default values
    pub async fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        if let Some(path) = config_file_override {
            if !path.exists() {
                return Err(ConfigError::NotFound { path });
            }
            return Self::load_from_file(&path).await;
        }

        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path).await,
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Write a default configuration file, returning its path
    ///
    /// An existing file is only replaced when `force` is set.
    pub async fn initialize(path: Option<PathBuf>, force: bool) -> ConfigResult<PathBuf> {
        let config_path = match path {
            Some(path) => path,
            None => Self::get_default_config_path()?,
        };

        if config_path.exists() && !force {
            info!("Configuration already exists at {}", config_path.display());
            return Ok(config_path);
        }

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| ConfigError::Io {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }
        }

        tokio::fs::write(&config_path, Self::generate_default_config_content())
            .await
            .map_err(|source| ConfigError::Io {
                path: config_path.clone(),
                source,
            })?;

        info!("Created configuration file {}", config_path.display());
        Ok(config_path)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(".").join(paths::LOCAL_CONFIG_FILE)];
        if let Ok(user_path) = Self::get_default_config_path() {
            search_paths.push(user_path);
        }

        search_paths.into_iter().find(|path| {
            let found = path.exists();
            if found {
                debug!("Found config file: {}", path.display());
            }
            found
        })
    }

    /// Get the default config file path for the current user
    pub fn get_default_config_path() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir
            .join(paths::CONFIG_DIR_NAME)
            .join(paths::CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let config: AppConfig = toml::from_str(&content)?;
        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate default configuration content with helpful comments
    fn generate_default_config_content() -> String {
        format!(
            r#"# MiniApp Report Configuration
# Command-line flags take precedence over these settings.

[paths]
# Root of the test corpus (one subdirectory per test)
tests_dir = "tests"

# Directory with one JSON report per implementation
reports_dir = "reports"

[report]
# Entries starting with this prefix are internal or templates and are skipped
exclude_prefix = "{}"

# JSON-LD descriptor inside each test directory
metadata_file = "{}"

# Maximum number of files read concurrently
max_concurrent_reads = {}

[logging]
# Level used without -v/--very-verbose: error, warn, info, debug, trace
level = "warn"
"#,
            corpus::EXCLUDE_PREFIX,
            corpus::METADATA_FILE,
            report::DEFAULT_MAX_CONCURRENT_READS,
        )
    }
}
