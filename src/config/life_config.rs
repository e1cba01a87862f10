//! Life Configuration - initialization overrides and display tuning as TOML
//!
//! Every field is optional. An empty file, or no file at all, yields the
//! built-in widget defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;
use super::validation::{validate_ranges, validate_unknown_keys};
use crate::types::{ParameterOverrides, Parameters};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "SOML_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "life_config.toml";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {1}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {1}", .0.display())]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration.
///
/// Load with `LifeConfig::load()` which searches:
/// 1. an explicit path (the `--config` flag)
/// 2. `$SOML_CONFIG`
/// 3. `./life_config.toml`
/// 4. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifeConfig {
    /// Initial parameter values
    #[serde(default)]
    pub parameters: ParameterOverrides,

    /// Rendering options
    #[serde(default)]
    pub display: DisplayConfig,
}

impl LifeConfig {
    /// Load configuration using the standard search order. A file that
    /// exists but fails to load is skipped with a warning.
    pub fn load(explicit: Option<&Path>) -> Self {
        // 1. Explicit path
        if let Some(p) = explicit {
            match Self::load_from_file(p) {
                Ok(config) => {
                    info!(path = %p.display(), "Loaded life config from --config");
                    return config;
                }
                Err(e) => {
                    warn!(path = %p.display(), error = %e, "Failed to load --config, falling back");
                }
            }
        }

        // 2. Env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded life config from {}", CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        // 3. ./life_config.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded life config from ./{}", LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", LOCAL_CONFIG_FILE);
                }
            }
        }

        // 4. Defaults
        info!("No life config found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Parse TOML text, logging unknown keys before deserializing.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        for w in validate_unknown_keys(contents) {
            warn!("{}", w);
        }
        toml::from_str(contents)
    }

    /// Log every advisory range finding. Values are applied regardless.
    pub fn log_range_warnings(&self) {
        for w in validate_ranges(self) {
            warn!(field = %w.field, "{}", w);
        }
    }

    /// Fresh parameter record for a new session.
    pub fn parameters(&self) -> Parameters {
        Parameters::new(&self.parameters)
    }

    /// The same configuration with every parameter spelled out.
    pub fn effective(&self) -> Self {
        let p = self.parameters();
        Self {
            parameters: ParameterOverrides {
                activity_label: Some(p.activity_label),
                minutes_per_day: Some(p.minutes_per_day),
                daily_sleep_hours: Some(p.daily_sleep_hours),
                daily_work_hours: Some(p.daily_work_hours),
                daily_commute_hours: Some(p.daily_commute_hours),
                weekly_work_days: Some(p.weekly_work_days),
                monthly_work_days: Some(p.monthly_work_days),
                holiday_days_per_year: Some(p.holiday_days_per_year),
                show_percent: Some(p.show_percent),
            },
            display: self.display.clone(),
        }
    }

    /// Serialize the config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ============================================================================
// Display Config
// ============================================================================

/// Rendering options of the text widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Characters per segmented bar.
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    /// Working years within the lifetime horizon. Work, commute and
    /// holiday accrue only over these years.
    #[serde(default = "default_lifetime_active_years")]
    pub lifetime_active_years: f64,
}

fn default_bar_width() -> usize { defaults::BAR_WIDTH }
fn default_lifetime_active_years() -> f64 { defaults::LIFETIME_ACTIVE_YEARS }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
            lifetime_active_years: default_lifetime_active_years(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_produces_defaults() {
        let config: LifeConfig = toml::from_str("").expect("empty TOML should parse");
        assert_eq!(config, LifeConfig::default());
        let p = config.parameters();
        assert_eq!(p.minutes_per_day, 193.0);
        assert_eq!(config.display.bar_width, 60);
        assert_eq!(config.display.lifetime_active_years, 40.0);
    }

    #[test]
    fn test_partial_toml_override() {
        let toml_str = r#"
[parameters]
activity_label = "Gaming"
minutes_per_day = 90.0

[display]
bar_width = 40
"#;
        let config = LifeConfig::from_toml_str(toml_str).expect("partial TOML should parse");
        let p = config.parameters();
        // Overridden values
        assert_eq!(p.activity_label, "Gaming");
        assert_eq!(p.minutes_per_day, 90.0);
        assert_eq!(config.display.bar_width, 40);
        // Non-overridden values retain defaults
        assert_eq!(p.daily_sleep_hours, 7.5);
        assert_eq!(config.display.lifetime_active_years, 40.0);
    }

    #[test]
    fn test_wrong_type_is_a_parse_error() {
        let toml_str = r#"
[parameters]
weekly_work_days = "five"
"#;
        assert!(LifeConfig::from_toml_str(toml_str).is_err());
    }

    #[test]
    fn test_effective_spells_out_defaults() {
        let effective = LifeConfig::default().effective();
        assert_eq!(effective.parameters.minutes_per_day, Some(193.0));
        assert_eq!(effective.parameters.activity_label.as_deref(), Some("Mobile usage"));
        assert_eq!(effective.parameters.holiday_days_per_year, Some(25));
    }

    #[test]
    fn test_roundtrip_toml() {
        let original = LifeConfig::default().effective();
        let toml_str = original.to_toml().expect("serialization should work");
        assert!(toml_str.contains("[parameters]"), "Missing [parameters] section");
        assert!(toml_str.contains("[display]"), "Missing [display] section");
        let roundtripped: LifeConfig = toml::from_str(&toml_str).expect("deserialization should work");
        assert_eq!(original, roundtripped);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LifeConfig::load_from_file(Path::new("/definitely/not/here.toml"))
            .expect_err("missing file must fail");
        assert!(matches!(err, ConfigError::Io(_, _)));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
