//! Monitor configuration.
//!
//! `MonitorConfig` is deserialized from TOML. Both intervals are optional in
//! the file and fall back to the defaults the original dashboard used:
//!
//! ```toml
//! vitals_tick_ms = 3000
//! clock_tick_ms = 1000
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use vigil_contracts::{VigilError, VigilResult};

/// Tick intervals for the two recurring timers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Interval between vitals fluctuation ticks, milliseconds.
    #[serde(default = "default_vitals_tick_ms")]
    pub vitals_tick_ms: u64,
    /// Interval between wall-clock refreshes, milliseconds.
    #[serde(default = "default_clock_tick_ms")]
    pub clock_tick_ms: u64,
}

fn default_vitals_tick_ms() -> u64 {
    3000
}

fn default_clock_tick_ms() -> u64 {
    1000
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            vitals_tick_ms: default_vitals_tick_ms(),
            clock_tick_ms: default_clock_tick_ms(),
        }
    }
}

impl MonitorConfig {
    /// Parse `s` as TOML and build a `MonitorConfig`.
    ///
    /// Returns `VigilError::ConfigError` if the TOML is malformed.
    pub fn from_toml_str(s: &str) -> VigilResult<Self> {
        toml::from_str(s).map_err(|e| VigilError::ConfigError {
            reason: format!("failed to parse monitor TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as TOML configuration.
    ///
    /// Returns `VigilError::ConfigError` if the file cannot be read or its
    /// contents are not valid TOML.
    pub fn from_file(path: &Path) -> VigilResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| VigilError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Vitals tick interval as a `Duration`.
    pub fn vitals_interval(&self) -> Duration {
        Duration::from_millis(self.vitals_tick_ms)
    }

    /// Clock tick interval as a `Duration`.
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard_intervals() {
        let config = MonitorConfig::default();
        assert_eq!(config.vitals_tick_ms, 3000);
        assert_eq!(config.clock_tick_ms, 1000);
        assert_eq!(config.vitals_interval(), Duration::from_millis(3000));
    }

    #[test]
    fn parses_a_full_config() {
        let config = MonitorConfig::from_toml_str(
            r#"
            vitals_tick_ms = 500
            clock_tick_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.vitals_tick_ms, 500);
        assert_eq!(config.clock_tick_ms, 250);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = MonitorConfig::from_toml_str("vitals_tick_ms = 1500").unwrap();
        assert_eq!(config.vitals_tick_ms, 1500);
        assert_eq!(config.clock_tick_ms, 1000);

        let empty = MonitorConfig::from_toml_str("").unwrap();
        assert_eq!(empty, MonitorConfig::default());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = MonitorConfig::from_toml_str("vitals_tick_ms = \"soon\"").unwrap_err();
        assert!(err.to_string().contains("configuration error"));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = MonitorConfig::from_file(Path::new("/nonexistent/monitor.toml")).unwrap_err();
        assert!(err.to_string().contains("configuration error"));
    }
}
