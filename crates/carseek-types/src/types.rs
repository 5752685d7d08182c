//! Data model for vehicle lookup

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the current result was searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// By vehicle identification number
    Vin,
    /// By license plate
    Plate,
    /// By brand/model/year triple
    Model,
}

impl SearchType {
    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            SearchType::Vin => "vin",
            SearchType::Plate => "plate",
            SearchType::Model => "model",
        }
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Immutable vehicle catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Vehicle identification number (e.g., "19UUA66531L000100")
    pub vin: String,
    /// License plate (e.g., "B311XYZ")
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
}

/// A resolved (or synthesized) search result
///
/// VIN and plate are absent for brand/model/year searches, which never
/// consult the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchedVehicle {
    #[serde(default)]
    pub vin: Option<String>,
    #[serde(default)]
    pub license_plate: Option<String>,
    pub brand: String,
    pub model: String,
    pub year: i32,
    /// When the search produced this result
    pub searched_at: DateTime<Utc>,
}

impl SearchedVehicle {
    /// Build a result from a catalog record, stamped now
    pub fn from_record(record: &VehicleRecord) -> Self {
        Self {
            vin: Some(record.vin.clone()),
            license_plate: Some(record.license_plate.clone()),
            brand: record.brand.clone(),
            model: record.model.clone(),
            year: record.year,
            searched_at: Utc::now(),
        }
    }

    /// Build a result from a brand/model/year triple, stamped now
    pub fn from_triple(brand: String, model: String, year: i32) -> Self {
        Self {
            vin: None,
            license_plate: None,
            brand,
            model,
            year,
            searched_at: Utc::now(),
        }
    }

    /// Display name, e.g. "Audi A4"
    pub fn name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// Maintenance recommendation for a brand/model over a year range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceSpec {
    pub brand: String,
    pub model: String,
    /// First model year covered (inclusive)
    pub from_year: i32,
    /// Last model year covered (inclusive)
    pub to_year: i32,
    /// Engine oil grade (e.g., "0W-30")
    pub oil_type: String,
    /// Engine oil capacity (e.g., "5.2L")
    pub oil_capacity: String,
    pub gearbox_type: String,
    pub differential_oil: String,
    pub service_interval_km: u32,
}

impl MaintenanceSpec {
    /// Whether this spec covers the given brand/model/year
    pub fn covers(&self, brand: &str, model: &str, year: i32) -> bool {
        self.brand == brand && self.model == model && year >= self.from_year && year <= self.to_year
    }
}
