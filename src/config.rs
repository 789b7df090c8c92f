use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::pipeline::TableParams;
use crate::risk::{RiskThresholds, RiskWeights};
use crate::sim::generate::{DEFAULT_NUM_RESOURCES, DEFAULT_NUM_TASKS, DEFAULT_SEED};
use crate::sim::NoiseConfig;
use crate::{slog_debug, Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub seed: u64,
    pub num_tasks: usize,
    pub num_resources: usize,
    pub max_days: u32,
    pub noise: NoiseConfig,
    pub risk_weights: RiskWeights,
    pub risk_thresholds: RiskThresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            num_tasks: DEFAULT_NUM_TASKS,
            num_resources: DEFAULT_NUM_RESOURCES,
            max_days: 200,
            noise: NoiseConfig::default(),
            risk_weights: RiskWeights::default(),
            risk_thresholds: RiskThresholds::default(),
        }
    }
}

impl Config {
    pub fn slip_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".slip"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::slip_dir()?.join("config.toml"))
    }

    /// Simulation knobs as pipeline parameters.
    pub fn table_params(&self) -> TableParams {
        TableParams {
            num_tasks: self.num_tasks,
            num_resources: self.num_resources,
            seed: self.seed,
            max_days: self.max_days,
            noise: self.noise,
        }
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        slog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            slog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(&path)?)?;
        config.noise.validate()?;
        slog_debug!(
            "Config loaded: seed={}, num_tasks={}, num_resources={}, max_days={}",
            config.seed,
            config.num_tasks,
            config.num_resources,
            config.max_days
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let slip_dir = Self::slip_dir()?;
        slog_debug!("Config::save slip_dir={}", slip_dir.display());
        if !slip_dir.exists() {
            slog_debug!("Creating slip directory");
            fs::create_dir_all(&slip_dir)?;
        }
        let path = Self::config_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        slog_debug!("Config saved to {}", path.display());
        Ok(())
    }

    pub fn ensure_dirs() -> Result<()> {
        let slip_dir = Self::slip_dir()?;
        slog_debug!("Config::ensure_dirs slip={}", slip_dir.display());
        if !slip_dir.exists() {
            slog_debug!("Creating slip directory: {}", slip_dir.display());
            fs::create_dir_all(&slip_dir)?;
        }
        Ok(())
    }
}
