//! Configuration management for payroll.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::console::ConsoleOptions;
use crate::employee::is_positive;
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "payroll";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "PAYROLL_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PAYROLL_`, sections split by `__`)
/// 2. TOML config file at `~/.config/payroll/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Startup roster configuration.
    pub roster: RosterConfig,
    /// Console display configuration.
    pub display: DisplayConfig,
    /// Prompt input configuration.
    pub input: InputConfig,
}

/// Startup roster configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Start with a placeholder record.
    pub seed_enabled: bool,
    /// Registration number of the placeholder record.
    pub seed_registration: i64,
    /// Salary of the placeholder record.
    pub seed_salary: f64,
}

/// Console display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Emit ANSI colour codes.
    pub color: bool,
    /// Clear the screen between menu iterations.
    pub clear_screen: bool,
}

/// Prompt input configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Invalid answers allowed per prompt before giving up.
    /// Set to 0 for unlimited.
    pub max_attempts: u32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            seed_enabled: true,
            seed_registration: 1,
            seed_salary: 1.0,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a specific file, which must exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigMissing`] if the file does not exist, or a
    /// load/validation error otherwise.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigMissing {
                path: path.to_path_buf(),
            });
        }
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.roster.seed_enabled && !is_positive(self.roster.seed_salary) {
            return Err(Error::ConfigValidation {
                message: format!(
                    "seed_salary ({}) must be greater than 0",
                    self.roster.seed_salary
                ),
            });
        }
        Ok(())
    }

    /// Console options derived from the display and input sections.
    #[must_use]
    pub fn console_options(&self) -> ConsoleOptions {
        ConsoleOptions {
            color: self.display.color,
            clear_screen: self.display.clear_screen,
            max_attempts: self.input.max_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.roster.seed_enabled);
        assert_eq!(config.roster.seed_registration, 1);
        assert!((config.roster.seed_salary - 1.0).abs() < f64::EPSILON);
        assert!(config.display.color);
        assert!(config.display.clear_screen);
        assert_eq!(config.input.max_attempts, 0);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_non_positive_seed_salary() {
        let mut config = Config::default();
        config.roster.seed_salary = -5.0;

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("seed_salary"));
    }

    #[test]
    fn test_validate_ignores_salary_when_seed_disabled() {
        let mut config = Config::default();
        config.roster.seed_enabled = false;
        config.roster.seed_salary = 0.0;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_console_options() {
        let mut config = Config::default();
        config.display.color = false;
        config.input.max_attempts = 3;

        let options = config.console_options();
        assert!(!options.color);
        assert!(options.clear_screen);
        assert_eq!(options.max_attempts, 3);
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("payroll"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/payroll.toml")));
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_file_missing() {
        let result = Config::load_file(Path::new("/nonexistent/payroll.toml"));
        assert!(matches!(result, Err(Error::ConfigMissing { .. })));
    }

    #[test]
    fn test_load_file_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[roster]\nseed_registration = 100\nseed_salary = 2500.0\n\n[display]\ncolor = false"
        )
        .unwrap();

        let config = Config::load_file(file.path()).unwrap();
        assert_eq!(config.roster.seed_registration, 100);
        assert!((config.roster.seed_salary - 2500.0).abs() < f64::EPSILON);
        assert!(!config.display.color);
        assert!(config.display.clear_screen);
    }

    #[test]
    fn test_load_file_rejects_invalid_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[roster]\nseed_salary = 0.0").unwrap();

        let result = Config::load_file(file.path());
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_load_file_rejects_bad_types() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[input]\nmax_attempts = \"many\"").unwrap();

        let result = Config::load_file(file.path());
        assert!(matches!(result, Err(Error::ConfigLoad(_))));
    }

    #[test]
    fn test_roster_config_deserialize() {
        let json = r#"{"seed_enabled": false}"#;
        let roster: RosterConfig = serde_json::from_str(json).unwrap();
        assert!(!roster.seed_enabled);
        assert_eq!(roster.seed_registration, 1);
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("seed_salary"));
        assert!(json.contains("clear_screen"));
        assert!(json.contains("max_attempts"));
    }
}
