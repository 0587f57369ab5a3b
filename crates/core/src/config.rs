//! Application configuration
//!
//! Loaded from `freelo.toml` in the platform config directory. Every section
//! and key is optional; a missing file means defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::i18n::Locale;

pub const CONFIG_FILE_NAME: &str = "freelo.toml";

/// Ten years
pub const MAX_SESSION_HOURS: i64 = 24 * 365 * 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub publish: PublishConfig,
    pub locale: LocaleSettings,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

/// Simulated publish backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Stand-in for the network round trip
    pub delay_ms: u64,
    /// Probability in [0, 1] that a publish attempt fails
    pub failure_rate: f64,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            failure_rate: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    /// Used until the user picks a language
    pub default: Locale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub session_hours: i64,
    /// New accounts must confirm their email before signing in
    pub require_email_confirmation: bool,
    pub min_password_len: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_hours: 24 * 7,
            require_email_confirmation: false,
            min_password_len: 6,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the platform data directory
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load from the platform config directory
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Directory for the database
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::project_dirs()?.data_dir().to_path_buf()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.publish.failure_rate) {
            return Err(Error::Config(format!(
                "publish.failure_rate must be between 0 and 1, got {}",
                self.publish.failure_rate
            )));
        }
        if !(1..=MAX_SESSION_HOURS).contains(&self.auth.session_hours) {
            return Err(Error::Config(format!(
                "auth.session_hours must be between 1 and {}, got {}",
                MAX_SESSION_HOURS, self.auth.session_hours
            )));
        }
        Ok(())
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("dev", "freelo", "freelo").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.publish.delay_ms, 1500);
        assert_eq!(config.locale.default, Locale::En);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[publish]
delay_ms = 0
failure_rate = 0.25

[locale]
default = "he"

[auth]
session_hours = 12
require_email_confirmation = true

[storage]
data_dir = "/tmp/freelo"
"#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.publish.delay_ms, 0);
        assert_eq!(config.publish.failure_rate, 0.25);
        assert_eq!(config.locale.default, Locale::He);
        assert_eq!(config.auth.session_hours, 12);
        assert!(config.auth.require_email_confirmation);
        assert_eq!(config.auth.min_password_len, 6);
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/freelo"));
    }

    #[test]
    fn test_rejects_bad_failure_rate() {
        let err = AppConfig::from_toml("[publish]\nfailure_rate = 1.5\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_out_of_range_session_hours() {
        for hours in ["0", "-3", "9000000000"] {
            let toml = format!("[auth]\nsession_hours = {}\n", hours);
            assert!(matches!(AppConfig::from_toml(&toml), Err(Error::Config(_))), "{hours}");
        }
        let toml = format!("[auth]\nsession_hours = {}\n", MAX_SESSION_HOURS);
        assert!(AppConfig::from_toml(&toml).is_ok());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            AppConfig::from_toml("[publish\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
