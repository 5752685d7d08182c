//! Configuration management for carseek
//!
//! Config stored at: ~/.config/carseek/config.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use carseek_domain::catalog::{MaintenanceCatalog, VehicleCatalog};
use carseek_infra::catalog_loader;
use carseek_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Odometer limit for the maintenance-due flag
    #[serde(default = "default_maintenance_limit_km")]
    pub maintenance_limit_km: u32,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Vehicle catalog TOML override (built-in catalog when absent)
    #[serde(default)]
    pub vehicle_catalog: Option<PathBuf>,

    /// Maintenance catalog TOML override (built-in catalog when absent)
    #[serde(default)]
    pub maintenance_catalog: Option<PathBuf>,
}

fn default_maintenance_limit_km() -> u32 {
    120_000
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maintenance_limit_km: default_maintenance_limit_km(),
            output_format: default_output_format(),
            vehicle_catalog: None,
            maintenance_catalog: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("carseek");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Resolve the catalogs: file overrides when configured, built-ins otherwise
    pub fn load_catalogs(&self) -> Result<(VehicleCatalog, MaintenanceCatalog)> {
        let vehicles = match &self.vehicle_catalog {
            Some(path) => catalog_loader::load_vehicles_from_file(path)?,
            None => VehicleCatalog::builtin(),
        };
        let specs = match &self.maintenance_catalog {
            Some(path) => catalog_loader::load_specs_from_file(path)?,
            None => MaintenanceCatalog::builtin(),
        };
        Ok((vehicles, specs))
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Carseek Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(f, "Maintenance limit:   {} km", self.maintenance_limit_km)?;
        writeln!(f, "Output format:       {}", self.output_format)?;
        writeln!(
            f,
            "Vehicle catalog:     {}",
            self.vehicle_catalog
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Maintenance catalog: {}",
            self.maintenance_catalog
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:         {}", path.display())?;
        }

        Ok(())
    }
}
