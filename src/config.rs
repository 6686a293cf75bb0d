//! Configuration management for Hestia
//!
//! This module handles loading, validation, and management of the application
//! configuration from YAML files.

use crate::error::{HestiaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod defaults;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Planned-outage feed configuration
    pub outages: OutagesConfig,

    /// Moonraker printer API configuration
    pub printer: PrinterConfig,

    /// Pause/resume timing configuration
    pub pause: PauseConfig,

    /// Heater setpoint configuration
    pub heaters: HeatersConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Polling interval in seconds
    pub poll_interval_secs: u64,

    /// IANA timezone the outage windows are published in
    pub timezone: String,
}

/// Planned-outage feed parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutagesConfig {
    /// Base URL of the blackout-service API
    pub api_url: String,

    /// Region identifier in the feed path
    pub region: u32,

    /// Distribution system operator identifier in the feed path
    pub dso: u32,

    /// Outage group the printer's circuit belongs to (e.g. "1.1")
    pub group: String,

    /// Fetch timeout in seconds
    pub fetch_timeout_secs: u64,
}

impl OutagesConfig {
    /// Full planned-outages endpoint for the configured region and operator
    pub fn endpoint(&self) -> String {
        format!(
            "{}/regions/{}/dsos/{}/planned-outages",
            self.api_url.trim_end_matches('/'),
            self.region,
            self.dso
        )
    }
}

/// Moonraker HTTP API parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Moonraker base URL
    pub base_url: String,

    /// Timeout for simple commands in seconds
    pub command_timeout_secs: u64,

    /// Timeout for resume/heater commands in seconds (device-side heat-up)
    pub slow_command_timeout_secs: u64,
}

/// Pause/resume timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PauseConfig {
    /// Minutes to pause ahead of an outage window start
    pub wait_before_minutes: f64,

    /// Minutes to stay paused before attempting resume
    pub wait_after_minutes: f64,
}

/// Heater setpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatersConfig {
    /// Extruder temperature restored before resume (°C)
    pub extruder_temp: f64,

    /// Bed temperature restored before resume (°C)
    pub bed_temp: f64,

    /// Intermediate park temperature held during an outage (°C)
    pub park_temp: f64,

    /// Seconds to wait between issuing setpoints and the resume command
    pub settle_delay_secs: u64,

    /// Seconds to wait between a committed pause and the park command
    pub park_delay_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Optional console-specific level override
    pub console_level: Option<String>,

    /// Optional file-specific level override
    pub file_level: Option<String>,

    /// Path to log file or log directory
    pub file: String,

    /// Number of rotated files to keep
    pub backup_count: u32,

    /// Whether to log to console
    pub console_output: bool,

    /// Whether to use JSON format
    pub json_format: bool,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        let default_paths = [
            "hestia_config.yaml",
            "/data/hestia_config.yaml",
            "/etc/hestia/config.yaml",
        ];

        for path in &default_paths {
            if Path::new(path).exists() {
                return Self::from_file(path);
            }
        }

        // Fall back to default configuration
        Ok(Config::default())
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.outages.api_url.is_empty() {
            return Err(HestiaError::validation(
                "outages.api_url",
                "Feed URL cannot be empty",
            ));
        }

        if self.outages.group.is_empty() {
            return Err(HestiaError::validation(
                "outages.group",
                "Outage group cannot be empty",
            ));
        }

        if self.printer.base_url.is_empty() {
            return Err(HestiaError::validation(
                "printer.base_url",
                "Moonraker URL cannot be empty",
            ));
        }

        if self.pause.wait_before_minutes < 0.0 {
            return Err(HestiaError::validation(
                "pause.wait_before_minutes",
                "Must not be negative",
            ));
        }

        if self.pause.wait_after_minutes <= 0.0 {
            return Err(HestiaError::validation(
                "pause.wait_after_minutes",
                "Must be positive",
            ));
        }

        if self.heaters.park_temp >= self.heaters.extruder_temp {
            return Err(HestiaError::validation(
                "heaters.park_temp",
                "Park temperature must be below the extruder setpoint",
            ));
        }

        // The evaluator flags an imminent pause at most one minute out, so a
        // poll period above 60 s could step over the pause point entirely.
        if self.poll_interval_secs == 0 || self.poll_interval_secs > 60 {
            return Err(HestiaError::validation(
                "poll_interval_secs",
                "Must be between 1 and 60",
            ));
        }

        if self.timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(HestiaError::validation(
                "timezone",
                "Not a valid IANA timezone name",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.outages.group, "1.1");
        assert_eq!(config.printer.command_timeout_secs, 15);
        assert_eq!(config.printer.slow_command_timeout_secs, 90);
        assert_eq!(config.poll_interval_secs, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_outages_endpoint() {
        let config = OutagesConfig::default();
        assert_eq!(
            config.endpoint(),
            "https://app.yasno.ua/api/blackout-service/public/shutdowns/regions/25/dsos/902/planned-outages"
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.outages.group = String::new();
        assert!(config.validate().is_err());

        config = Config::default();
        config.pause.wait_after_minutes = 0.0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.poll_interval_secs = 120;
        assert!(config.validate().is_err());

        config = Config::default();
        config.timezone = "Not/AZone".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let deserialized: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.outages.group, deserialized.outages.group);
        assert_eq!(
            config.pause.wait_before_minutes,
            deserialized.pause.wait_before_minutes
        );
    }
}
