//! Static reference catalogs for vehicles and maintenance specs
//!
//! Catalogs are loaded once at startup and never mutated.

use carseek_types::{MaintenanceSpec, VehicleRecord};

/// Lookup table of known vehicles
#[derive(Debug, Clone)]
pub struct VehicleCatalog {
    records: Vec<VehicleRecord>,
}

impl VehicleCatalog {
    /// Build a catalog from explicit records
    pub fn from_records(records: Vec<VehicleRecord>) -> Self {
        Self { records }
    }

    /// The built-in reference dataset
    pub fn builtin() -> Self {
        let rec = |vin: &str, plate: &str, brand: &str, model: &str, year: i32| VehicleRecord {
            vin: vin.to_string(),
            license_plate: plate.to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            year,
        };
        Self::from_records(vec![
            rec("19UUA66531L000100", "B311XYZ", "Audi", "A4", 2019),
            rec("12345ABCDE6789012", "HD52EDI", "BMW", "X3", 2020),
            rec("55BMX77D55E555555", "AR10GZU", "BMW", "X5", 2021),
            rec("WBADH1KL3MG000001", "BH33SMI", "Mercedes", "C-Class", 2019),
            rec("JTDKN3AU0J9000001", "CJ99TCR", "Toyota", "Corolla", 2020),
            rec("JT2BF10K910033851", "TM04SUS", "Nissan", "Rogue", 2021),
        ])
    }

    /// Find by VIN, case-insensitively
    pub fn find_by_vin(&self, vin: &str) -> Option<&VehicleRecord> {
        self.records.iter().find(|r| r.vin.eq_ignore_ascii_case(vin))
    }

    /// Find by license plate, case-insensitively
    pub fn find_by_plate(&self, plate: &str) -> Option<&VehicleRecord> {
        self.records
            .iter()
            .find(|r| r.license_plate.eq_ignore_ascii_case(plate))
    }

    /// All records in catalog order
    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for VehicleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Lookup table of maintenance specs keyed by brand/model/year-range
#[derive(Debug, Clone)]
pub struct MaintenanceCatalog {
    specs: Vec<MaintenanceSpec>,
}

impl MaintenanceCatalog {
    /// Build a catalog from explicit specs
    pub fn from_specs(specs: Vec<MaintenanceSpec>) -> Self {
        Self { specs }
    }

    /// The built-in reference dataset
    pub fn builtin() -> Self {
        let spec = |brand: &str,
                    model: &str,
                    from_year: i32,
                    to_year: i32,
                    oil_type: &str,
                    oil_capacity: &str,
                    gearbox_type: &str,
                    differential_oil: &str,
                    service_interval_km: u32| MaintenanceSpec {
            brand: brand.to_string(),
            model: model.to_string(),
            from_year,
            to_year,
            oil_type: oil_type.to_string(),
            oil_capacity: oil_capacity.to_string(),
            gearbox_type: gearbox_type.to_string(),
            differential_oil: differential_oil.to_string(),
            service_interval_km,
        };
        Self::from_specs(vec![
            spec("BMW", "X3", 2018, 2026, "5W-30", "6.5L", "Automatic 8-Speed", "1.5L", 15000),
            spec("BMW", "X5", 2013, 2023, "5W-40", "6.5L", "Automatic 8-Speed", "1.5L", 12000),
            spec("Audi", "A4", 2018, 2026, "0W-30", "5.2L", "Automatic CVT", "1.2L", 15000),
            spec("Mercedes", "C-Class", 2019, 2026, "0W-30", "5.5L", "Automatic 9-Speed", "1.4L", 20000),
            spec("Toyota", "Corolla", 2019, 2023, "0W-20", "4.2L", "Manual 6-Speed", "0.9L", 10000),
            spec("Nissan", "Rogue", 2019, 2024, "5W-30", "5.1L", "CVT", "1.1L", 12000),
        ])
    }

    /// All specs in catalog order
    pub fn specs(&self) -> &[MaintenanceSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for MaintenanceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
