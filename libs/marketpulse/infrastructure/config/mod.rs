use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::domain::Instrument;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Ranges the chart endpoint accepts
const VALID_RANGES: [&str; 11] = [
    "1d", "5d", "1mo", "3mo", "6mo", "1y", "2y", "5y", "10y", "ytd", "max",
];

/// Main monitor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Instruments to monitor, in display order
    pub instruments: Vec<Instrument>,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub tape: TapeConfig,
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Optional log file; logging stays off inside the TUI without one
    #[serde(default)]
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Seconds between fetch passes
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// How far back the series goes (chart API range parameter)
    #[serde(default = "default_range")]
    pub range: String,
    /// Per-request HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            range: default_range(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Chart API endpoint root
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Driver tick in milliseconds (clock, tape and redraw cadence)
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TapeConfig {
    /// Columns the tape advances per tick while scrolling
    #[serde(default = "default_step_cols")]
    pub step_cols: u16,
    /// Seconds the tape stays blank once fully off-screen
    #[serde(default = "default_wait_secs")]
    pub wait_secs: u64,
}

impl Default for TapeConfig {
    fn default() -> Self {
        Self {
            step_cols: default_step_cols(),
            wait_secs: default_wait_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    60
}

fn default_range() -> String {
    "1d".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_base_url() -> String {
    "https://query1.finance.yahoo.com".to_string()
}

fn default_tick_ms() -> u64 {
    50
}

fn default_step_cols() -> u16 {
    2
}

fn default_wait_secs() -> u64 {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

impl MonitorConfig {
    /// Load configuration from YAML file
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let mut config: MonitorConfig = serde_yaml::from_str(&yaml_content)?;

        // Override provider base URL from environment if present
        if let Ok(base_url) = std::env::var("MARKETPULSE_API_URL") {
            info!("Overriding provider base URL from environment variable");
            config.provider.base_url = base_url;
        }

        // Override log file from environment if present
        if let Ok(log_file) = std::env::var("MARKETPULSE_LOG_FILE") {
            config.log_file = Some(log_file);
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.instruments.is_empty() {
            return Err(ConfigError::ValidationError(
                "instruments cannot be empty".to_string(),
            ));
        }

        for instrument in &self.instruments {
            if instrument.name.is_empty() || instrument.symbol.is_empty() {
                return Err(ConfigError::ValidationError(
                    "instrument name and symbol cannot be empty".to_string(),
                ));
            }
        }

        if self.fetch.interval_secs == 0 {
            return Err(ConfigError::ValidationError(
                "fetch.interval_secs must be greater than 0".to_string(),
            ));
        }

        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "fetch.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !VALID_RANGES.contains(&self.fetch.range.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "fetch.range must be one of: {}",
                VALID_RANGES.join(", ")
            )));
        }

        if self.provider.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "provider.base_url cannot be empty".to_string(),
            ));
        }

        if !(10..=1000).contains(&self.ui.tick_ms) {
            return Err(ConfigError::ValidationError(
                "ui.tick_ms must be between 10 and 1000".to_string(),
            ));
        }

        if self.tape.step_cols == 0 {
            return Err(ConfigError::ValidationError(
                "tape.step_cols must be at least 1".to_string(),
            ));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of: {}",
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }

    /// Log configuration summary
    pub fn log(&self) {
        info!("Configuration loaded:");
        for instrument in &self.instruments {
            info!("  Instrument: {} ({})", instrument.name, instrument.symbol);
        }
        info!("  Fetch interval: {} seconds", self.fetch.interval_secs);
        info!("  Fetch range: {}", self.fetch.range);
        info!("  Provider URL: {}", self.provider.base_url);
        info!("  UI tick: {} ms", self.ui.tick_ms);
        info!(
            "  Tape: {} cols/tick, {} s wait",
            self.tape.step_cols, self.tape.wait_secs
        );
        info!("  Log level: {}", self.log_level);
    }
}
