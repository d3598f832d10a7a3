// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::drivers::ChartError;

pub const DEFAULT_CONFIG_FILE: &str = "livechart.json";

/// How the series buffers are populated before the first tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialFill {
    Random,
    Zeros,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "livechart".to_owned(),
            width: 800.0,
            height: 680.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sample_count: usize,
    pub series_count: usize,
    pub tick_interval_ms: u64,
    pub initial_fill: InitialFill,
    pub seed: Option<u64>,
    pub export_dir: PathBuf,
    pub window: WindowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sample_count: 256,
            series_count: 2,
            tick_interval_ms: 10,
            initial_fill: InitialFill::Random,
            seed: None,
            export_dir: PathBuf::from("."),
            window: WindowConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ChartError> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ChartError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Missing file means defaults; a malformed one is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ChartError> {
        if !path.exists() {
            info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        info!("loading config from {}", path.display());
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.sample_count == 0 {
            return Err(ChartError::InvalidSampleCount);
        }
        if self.series_count == 0 {
            return Err(ChartError::InvalidSeriesCount);
        }
        if self.tick_interval_ms == 0 {
            return Err(ChartError::InvalidTickInterval);
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
