//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading jurisdiction
//! and payroll configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, JurisdictionConfig, PayrollConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/california/
/// ├── jurisdiction.yaml   # Overtime, break and tier rules
/// └── payroll.yaml        # Pay period length and timecard discovery
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/california").unwrap();
/// println!("Loaded jurisdiction: {}", loader.jurisdiction().jurisdiction.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/california")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `jurisdiction.yaml` is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// A missing `payroll.yaml` falls back to the biweekly defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let jurisdiction = Self::load_yaml::<JurisdictionConfig>(&path.join("jurisdiction.yaml"))?;

        let payroll_path = path.join("payroll.yaml");
        let payroll = if payroll_path.exists() {
            Self::load_yaml::<PayrollConfig>(&payroll_path)?
        } else {
            PayrollConfig::default()
        };

        Ok(Self {
            config: EngineConfig::new(jurisdiction, payroll),
        })
    }

    /// The built-in California configuration.
    pub fn california() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Wraps an already assembled configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the jurisdiction rule set.
    pub fn jurisdiction(&self) -> &JurisdictionConfig {
        self.config.jurisdiction()
    }

    /// Returns the payroll settings.
    pub fn payroll(&self) -> &PayrollConfig {
        self.config.payroll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("timecard-engine-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_shipped_california_config() {
        let loader = ConfigLoader::load("config/california").unwrap();
        assert_eq!(loader.jurisdiction().jurisdiction.code, "us.california");
        assert_eq!(loader.jurisdiction().overtime.daily_regular_hours, Decimal::from(8));
        assert_eq!(loader.jurisdiction().breaks.break_hours, Decimal::new(5, 1));
        assert_eq!(loader.payroll().period_days, 14);
    }

    #[test]
    fn test_shipped_config_matches_builtin() {
        let loaded = ConfigLoader::load("config/california").unwrap();
        let builtin = ConfigLoader::california();
        assert_eq!(loaded.jurisdiction().overtime, builtin.jurisdiction().overtime);
        assert_eq!(loaded.jurisdiction().breaks, builtin.jurisdiction().breaks);
        assert_eq!(loaded.jurisdiction().tiers, builtin.jurisdiction().tiers);
    }

    #[test]
    fn test_missing_directory_is_config_not_found() {
        let result = ConfigLoader::load("/nonexistent/config");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.ends_with("jurisdiction.yaml"));
            }
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = scratch_dir("invalid");
        fs::write(dir.join("jurisdiction.yaml"), "jurisdiction: [unterminated").unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_missing_payroll_file_uses_defaults() {
        let dir = scratch_dir("defaults");
        fs::copy(
            "config/california/jurisdiction.yaml",
            dir.join("jurisdiction.yaml"),
        )
        .unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.payroll(), &PayrollConfig::default());
    }
}
