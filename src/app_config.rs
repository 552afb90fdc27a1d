use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::subtitle_processor::{SubtitleFormat, DEFAULT_FRAME_RATE};
use crate::timing::TimingAdjustment;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language of the segment text (ISO code), used in output file names
    #[serde(default = "default_language")]
    pub language: String,

    /// Formats written for every processed file
    #[serde(default = "default_output_formats")]
    pub output_formats: Vec<SubtitleFormat>,

    /// Frame rate for MicroDVD output
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,

    /// Timing adjustment applied before rendering
    #[serde(default)]
    pub timing: TimingAdjustment,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_output_formats() -> Vec<SubtitleFormat> {
    vec![SubtitleFormat::Srt, SubtitleFormat::Vtt]
}

fn default_frame_rate() -> f64 {
    DEFAULT_FRAME_RATE
}

impl Config {
    /// Load configuration from a JSON file, creating it with defaults if missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let _language_name = crate::language_utils::get_language_name(&self.language)?;

        if self.output_formats.is_empty() {
            return Err(anyhow!("At least one output format is required"));
        }

        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(anyhow!("Frame rate must be a positive number, got {}", self.frame_rate));
        }

        self.timing.validate()?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            output_formats: default_output_formats(),
            frame_rate: default_frame_rate(),
            timing: TimingAdjustment::default(),
            log_level: LogLevel::default(),
        }
    }
}
