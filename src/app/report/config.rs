//! Configuration for the report pipeline

use serde::{Deserialize, Serialize};

use crate::constants::{corpus, report};
use crate::errors::{ConfigError, ConfigResult};

/// Runtime configuration for reading the test corpus and implementation reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory entries starting with this prefix are skipped
    pub exclude_prefix: String,
    /// Name of the JSON-LD descriptor inside each test directory
    pub metadata_file: String,
    /// Maximum number of files read concurrently
    pub max_concurrent_reads: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            exclude_prefix: corpus::EXCLUDE_PREFIX.to_string(),
            metadata_file: corpus::METADATA_FILE.to_string(),
            max_concurrent_reads: report::DEFAULT_MAX_CONCURRENT_READS,
        }
    }
}

impl ReportConfig {
    /// Check that the configuration can drive a run
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_concurrent_reads == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_concurrent_reads".to_string(),
                value: "0".to_string(),
                reason: "At least one concurrent read is required".to_string(),
            });
        }

        if self.metadata_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "metadata_file".to_string(),
                value: self.metadata_file.clone(),
                reason: "Descriptor file name must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Whether a directory entry name is excluded from the run
    pub fn is_excluded(&self, name: &str) -> bool {
        !self.exclude_prefix.is_empty() && name.starts_with(&self.exclude_prefix)
    }

    /// Concurrency limit, never below one
    pub(crate) fn concurrency(&self) -> usize {
        self.max_concurrent_reads.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.metadata_file, "test.jsonld");
        assert!(config.is_excluded("xx-template"));
        assert!(!config.is_excluded("mnf-id-001"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let config = ReportConfig {
            max_concurrent_reads: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.concurrency(), 1);

        let config = ReportConfig {
            exclude_prefix: String::new(),
            ..Default::default()
        };
        assert!(!config.is_excluded("xx-template"));
    }
}
