//! Demo configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) is a
//! valid configuration. Widget settings live under `[kit]`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use uikit::KitConfig;

use crate::error::DemoError;
use crate::paths;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Period of the telemetry readout refresh while connected.
    pub telemetry_interval_ms: u64,

    /// Period of one job progress step.
    pub job_interval_ms: u64,

    /// Percent added per job step.
    pub job_step: f64,

    /// How long the connect button stays busy before the link comes up.
    pub connect_delay_ms: u64,

    /// Clock granularity in real-time mode.
    pub tick_ms: u64,

    /// Seed for the telemetry generator. Random when unset.
    pub seed: Option<u64>,

    /// Log to this file instead of stderr.
    pub log_file: Option<PathBuf>,

    pub log_level: String,

    pub kit: KitConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            telemetry_interval_ms: 1500,
            job_interval_ms: 800,
            job_step: 7.0,
            connect_delay_ms: 700,
            tick_ms: 50,
            seed: None,
            log_file: None,
            log_level: "info".to_string(),
            kit: KitConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Load `path`, or the default config file if it exists, or defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, DemoError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match paths::config_file().filter(|p| p.is_file()) {
                Some(path) => path,
                None => {
                    log::debug!("[config] no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = fs::read_to_string(&path).map_err(|source| DemoError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| DemoError::Config { path, source })
    }

    pub fn telemetry_interval(&self) -> Duration {
        Duration::from_millis(self.telemetry_interval_ms)
    }

    pub fn job_interval(&self) -> Duration {
        Duration::from_millis(self.job_interval_ms)
    }

    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }

    /// Real-time tick, never zero.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}
