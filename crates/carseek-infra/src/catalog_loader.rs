//! Catalog loaders from TOML configuration
//!
//! Lets deployments override the built-in vehicle and maintenance catalogs
//! with `[[vehicles]]` / `[[specs]]` TOML files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use carseek_domain::catalog::{MaintenanceCatalog, VehicleCatalog};
use carseek_types::{ConfigError, Error, MaintenanceSpec, Result, VehicleRecord};

/// Container for parsing a vehicles TOML file
#[derive(Debug, Deserialize)]
struct VehicleCatalogFile {
    vehicles: Vec<VehicleRecord>,
}

/// Container for parsing a maintenance TOML file
#[derive(Debug, Deserialize)]
struct MaintenanceCatalogFile {
    specs: Vec<MaintenanceSpec>,
}

/// Load a vehicle catalog from a TOML file
pub fn load_vehicles_from_file(path: &Path) -> Result<VehicleCatalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read vehicle catalog file: {}",
            e
        )))
    })?;
    load_vehicles_from_str(&content)
}

/// Load a vehicle catalog from a TOML string
pub fn load_vehicles_from_str(toml_content: &str) -> Result<VehicleCatalog> {
    let parsed: VehicleCatalogFile = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse vehicle catalog TOML: {}",
            e
        )))
    })?;
    Ok(VehicleCatalog::from_records(parsed.vehicles))
}

/// Load a maintenance catalog from a TOML file
pub fn load_specs_from_file(path: &Path) -> Result<MaintenanceCatalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read maintenance catalog file: {}",
            e
        )))
    })?;
    load_specs_from_str(&content)
}

/// Load a maintenance catalog from a TOML string
///
/// Catalog order in the file is preserved; the resolver's first-match-wins
/// rule follows it.
pub fn load_specs_from_str(toml_content: &str) -> Result<MaintenanceCatalog> {
    let parsed: MaintenanceCatalogFile = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse maintenance catalog TOML: {}",
            e
        )))
    })?;
    Ok(MaintenanceCatalog::from_specs(parsed.specs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TEST_VEHICLES_TOML: &str = r#"
[[vehicles]]
vin = "VF1AAAAA551000000"
license_plate = "AB12CDE"
brand = "Renault"
model = "Clio"
year = 2017

[[vehicles]]
vin = "WVWZZZ1JZXW000001"
license_plate = "CD34EFG"
brand = "Volkswagen"
model = "Golf"
year = 2019
"#;

    const TEST_SPECS_TOML: &str = r#"
[[specs]]
brand = "Renault"
model = "Clio"
from_year = 2015
to_year = 2020
oil_type = "5W-40"
oil_capacity = "4.5L"
gearbox_type = "Manual 5-Speed"
differential_oil = "1.0L"
service_interval_km = 15000
"#;

    #[test]
    fn test_load_vehicles_from_str() {
        let catalog = load_vehicles_from_str(TEST_VEHICLES_TOML).unwrap();
        assert_eq!(catalog.len(), 2);
        let clio = catalog.find_by_plate("ab12cde").unwrap();
        assert_eq!(clio.brand, "Renault");
        assert_eq!(clio.year, 2017);
    }

    #[test]
    fn test_load_specs_from_str() {
        let catalog = load_specs_from_str(TEST_SPECS_TOML).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.specs()[0].oil_capacity, "4.5L");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("vehicles.toml");
        fs::write(&path, TEST_VEHICLES_TOML).unwrap();
        let catalog = load_vehicles_from_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let result = load_vehicles_from_str("vehicles = 3");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_specs_from_file(Path::new("/nonexistent/specs.toml"));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }
}
