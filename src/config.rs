//! Configuration file support for thirdparty-licenses.
//!
//! Provides YAML-based configuration through `thirdparty-licenses.config.yml`
//! files, including data structures, file loading, validation and the merge
//! with command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::adapters::outbound::network::{Backoff, RetryPolicy, DEFAULT_MAX_ATTEMPTS};
use crate::license_report::domain::BsdOverrides;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "thirdparty-licenses.config.yml";

/// Package name prefix of the project's own UI package
pub const DEFAULT_OWN_PACKAGE_PREFIX: &str = "phytofy-ui";

/// Year written into `[year]` placeholders of license templates
pub const DEFAULT_TEMPLATE_YEAR: &str = "2020";

/// User agent accepted by npms.io and creativecommons.org
pub const DEFAULT_USER_AGENT: &str = "curl/7.71.1";

/// Delay used by `fixed` and `exponential` backoff when `retry_delay_ms` is unset
pub const DEFAULT_RETRY_DELAY_MS: u64 = 100;

/// Wait strategy between fetch attempts, as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackoffKind {
    None,
    Fixed,
    Exponential,
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub own_package_prefix: Option<String>,
    pub template_year: Option<String>,
    pub max_attempts: Option<u32>,
    pub retry_backoff: Option<BackoffKind>,
    pub retry_delay_ms: Option<u64>,
    pub bsd_overrides: Option<BTreeMap<String, String>>,
    pub user_agent: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after defaults, config file and CLI flags are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub own_package_prefix: String,
    pub template_year: String,
    pub max_attempts: u32,
    pub backoff: Backoff,
    pub bsd_overrides: BsdOverrides,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            own_package_prefix: DEFAULT_OWN_PACKAGE_PREFIX.to_string(),
            template_year: DEFAULT_TEMPLATE_YEAR.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: Backoff::None,
            bsd_overrides: BsdOverrides::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    /// Layers the config file over the defaults, then the CLI flags over both.
    pub fn resolve(
        config: Option<ConfigFile>,
        own_prefix_flag: Option<String>,
        year_flag: Option<String>,
    ) -> Self {
        let mut settings = Settings::default();

        if let Some(config) = config {
            if let Some(prefix) = config.own_package_prefix {
                settings.own_package_prefix = prefix;
            }
            if let Some(year) = config.template_year {
                settings.template_year = year;
            }
            if let Some(max_attempts) = config.max_attempts {
                settings.max_attempts = max_attempts;
            }
            if let Some(kind) = config.retry_backoff {
                let delay = Duration::from_millis(
                    config.retry_delay_ms.unwrap_or(DEFAULT_RETRY_DELAY_MS),
                );
                settings.backoff = match kind {
                    BackoffKind::None => Backoff::None,
                    BackoffKind::Fixed => Backoff::Fixed(delay),
                    BackoffKind::Exponential => Backoff::Exponential { base: delay },
                };
            }
            if let Some(overrides) = config.bsd_overrides {
                settings.bsd_overrides.extend(overrides);
            }
            if let Some(user_agent) = config.user_agent {
                settings.user_agent = user_agent;
            }
        }

        if let Some(prefix) = own_prefix_flag {
            settings.own_package_prefix = prefix;
        }
        if let Some(year) = year_flag {
            settings.template_year = year;
        }

        settings
    }

    /// Retry policy for every fetch of the run
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, self.backoff)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.max_attempts == Some(0) {
        bail!(
            "Invalid config: max_attempts must be at least 1.\n\n\
             💡 Hint: Every URL is requested at least once; use 1 to disable retries."
        );
    }

    if config.retry_delay_ms == Some(0)
        && matches!(
            config.retry_backoff,
            Some(BackoffKind::Fixed | BackoffKind::Exponential)
        )
    {
        bail!(
            "Invalid config: retry_delay_ms must be at least 1 for fixed or exponential backoff.\n\n\
             💡 Hint: Use retry_backoff: none to retry immediately."
        );
    }

    if let Some(ref overrides) = config.bsd_overrides {
        for (package, identifier) in overrides {
            if identifier.trim().is_empty() {
                bail!(
                    "Invalid config: bsd_overrides.{} must not be empty.\n\n\
                     💡 Hint: Use an SPDX identifier such as \"BSD-2-Clause\" or \"BSD-3-Clause\".",
                    package
                );
            }
        }
    }

    if let Some(ref user_agent) = config.user_agent {
        if user_agent.trim().is_empty() {
            bail!("Invalid config: user_agent must not be empty.");
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
own_package_prefix: my-ui
template_year: "2021"
max_attempts: 3
bsd_overrides:
  left-pad: BSD-3-Clause
user_agent: "Mozilla/5.0"
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.own_package_prefix.as_deref(), Some("my-ui"));
        assert_eq!(config.template_year.as_deref(), Some("2021"));
        assert_eq!(config.max_attempts, Some(3));
        assert_eq!(
            config.bsd_overrides.unwrap().get("left-pad").map(String::as_str),
            Some("BSD-3-Clause")
        );
        assert_eq!(config.user_agent.as_deref(), Some("Mozilla/5.0"));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "template_year: \"2022\"\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().template_year.as_deref(), Some("2022"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_max_attempts_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "max_attempts: 0\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("max_attempts must be at least 1"));
    }

    #[test]
    fn test_empty_bsd_override_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "bsd_overrides:\n  left-pad: \"\"\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("bsd_overrides.left-pad"));
    }

    #[test]
    fn test_unknown_fields_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "template_year: \"2020\"\nformat: json\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("format"));
        assert_eq!(config.unknown_fields.len(), 1);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::resolve(None, None, None);
        assert_eq!(settings.own_package_prefix, "phytofy-ui");
        assert_eq!(settings.template_year, "2020");
        assert_eq!(settings.max_attempts, 10);
        assert_eq!(settings.retry_policy(), RetryPolicy::default());
        assert_eq!(settings.user_agent, "curl/7.71.1");
        assert_eq!(
            settings.bsd_overrides.resolve("glob-to-regexp").unwrap(),
            "BSD-2-Clause"
        );
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let config = ConfigFile {
            own_package_prefix: Some("from-config".to_string()),
            template_year: Some("2019".to_string()),
            max_attempts: Some(4),
            bsd_overrides: Some(BTreeMap::from([(
                "left-pad".to_string(),
                "BSD-3-Clause".to_string(),
            )])),
            ..ConfigFile::default()
        };

        let settings = Settings::resolve(
            Some(config),
            Some("from-cli".to_string()),
            Some("2024".to_string()),
        );

        assert_eq!(settings.own_package_prefix, "from-cli");
        assert_eq!(settings.template_year, "2024");
        assert_eq!(settings.max_attempts, 4);
        assert_eq!(settings.bsd_overrides.resolve("left-pad").unwrap(), "BSD-3-Clause");
        assert_eq!(
            settings.bsd_overrides.resolve("json-schema").unwrap(),
            "BSD-3-Clause"
        );
    }

    #[test]
    fn test_retry_backoff_from_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            "max_attempts: 4\nretry_backoff: exponential\nretry_delay_ms: 250\n",
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        let settings = Settings::resolve(Some(config), None, None);
        assert_eq!(
            settings.retry_policy(),
            RetryPolicy::new(
                4,
                Backoff::Exponential {
                    base: Duration::from_millis(250)
                }
            )
        );
    }

    #[test]
    fn test_fixed_backoff_default_delay() {
        let config = ConfigFile {
            retry_backoff: Some(BackoffKind::Fixed),
            ..ConfigFile::default()
        };
        let settings = Settings::resolve(Some(config), None, None);
        assert_eq!(
            settings.backoff,
            Backoff::Fixed(Duration::from_millis(DEFAULT_RETRY_DELAY_MS))
        );
    }

    #[test]
    fn test_zero_retry_delay_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "retry_backoff: fixed\nretry_delay_ms: 0\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("retry_delay_ms must be at least 1"));
    }

    #[test]
    fn test_unknown_backoff_kind_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "retry_backoff: linear\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Failed to parse config file"));
    }
}
