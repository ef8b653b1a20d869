//! Configuration management for fueleco
//!
//! Config stored at: ~/.config/fueleco/config.json

use fueleco_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dataset file; the bundled dataset is used when unset
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Fractional digits shown for averages
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

/// Largest number of fractional digits accepted for averages
pub const MAX_DECIMALS: usize = 6;

fn default_decimals() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            output_format: OutputFormat::default(),
            decimals: default_decimals(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fueleco");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        if config.decimals > MAX_DECIMALS {
            return Err(ConfigError::ParseError(format!(
                "{}: decimals must be at most {}, got {}",
                path.display(),
                MAX_DECIMALS,
                config.decimals
            ))
            .into());
        }
        Ok(config)
    }

    /// Set the fractional digits shown for averages, rejecting values above [`MAX_DECIMALS`]
    pub fn set_decimals(&mut self, decimals: usize) -> Result<()> {
        if decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidValue(format!(
                "decimals must be at most {}, got {}",
                MAX_DECIMALS, decimals
            ))
            .into());
        }
        self.decimals = decimals;
        Ok(())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fueleco Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Dataset:        {}",
            self.dataset_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(bundled)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Decimals:       {}", self.decimals)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
