use serde::Deserialize;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::category::{default_categories, CategoryScore};
use crate::error::{Error, Result};
use crate::ring::RingGeometry;

pub const CONFIG_FILE_NAME: &str = "humanage.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Patient dataset (JSON), relative to the config directory
    pub data: Option<PathBuf>,
    pub ring: RingConfig,
    pub scoring: ScoringConfig,
    pub categories: Vec<CategoryScore>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub size: f64,
    pub thickness: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub default_intensity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: None,
            ring: RingConfig::default(),
            scoring: ScoringConfig::default(),
            categories: default_categories(),
        }
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        let geometry = RingGeometry::default();
        RingConfig {
            size: geometry.size,
            thickness: geometry.thickness,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            default_intensity: 50,
        }
    }
}

impl Config {
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(&config_path).map_err(|e| Error::Config {
            path: config_path.clone(),
            message: format!("Failed to read config: {e}"),
        })?;
        let mut config: Config = toml::from_str(&contents).map_err(|e| Error::Config {
            path: config_path.clone(),
            message: format!("Failed to parse config: {e}"),
        })?;

        config.ring.validate().map_err(|message| Error::Config {
            path: config_path.clone(),
            message,
        })?;

        // an explicit empty list means "use the defaults", not "draw nothing"
        if config.categories.is_empty() {
            config.categories = default_categories();
        }
        if let Some(data) = &config.data {
            if data.is_relative() {
                config.data = Some(config_dir.join(data));
            }
        }
        debug!(path = %config_path.display(), categories = config.categories.len(), "loaded config");
        Ok(config)
    }

    /// Layout numbers for the renderers. Values set in code rather than
    /// loaded from a file are clamped instead of rejected.
    pub fn geometry(&self) -> RingGeometry {
        RingGeometry::clamped(self.ring.size, self.ring.thickness)
    }
}

impl RingConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(format!("Invalid ring size: {}", self.size));
        }
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(format!("Invalid ring thickness: {}", self.thickness));
        }
        if self.thickness > self.size {
            return Err(format!(
                "Ring thickness {} exceeds ring size {}",
                self.thickness, self.size
            ));
        }
        Ok(())
    }
}
