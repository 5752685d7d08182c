//! Maintenance spec resolution
//!
//! Derived lookup over the maintenance catalog; recomputed on demand, never
//! stored.

use carseek_types::{MaintenanceSpec, SearchedVehicle};

use crate::catalog::MaintenanceCatalog;

/// Resolve the maintenance spec for a searched vehicle
///
/// Returns the first spec in catalog order whose brand and model equal the
/// vehicle's and whose [from_year, to_year] range contains the vehicle year
/// (inclusive both ends). When ranges overlap for the same brand/model, the
/// first match wins.
pub fn resolve_spec<'a>(
    catalog: &'a MaintenanceCatalog,
    vehicle: &SearchedVehicle,
) -> Option<&'a MaintenanceSpec> {
    catalog
        .specs()
        .iter()
        .find(|s| s.covers(&vehicle.brand, &vehicle.model, vehicle.year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::search_by_model;
    use carseek_types::MaintenanceSpec;

    fn spec(brand: &str, model: &str, from_year: i32, to_year: i32, oil_type: &str) -> MaintenanceSpec {
        MaintenanceSpec {
            brand: brand.to_string(),
            model: model.to_string(),
            from_year,
            to_year,
            oil_type: oil_type.to_string(),
            oil_capacity: "5.0L".to_string(),
            gearbox_type: "Manual".to_string(),
            differential_oil: "1.0L".to_string(),
            service_interval_km: 10000,
        }
    }

    #[test]
    fn test_resolve_within_range() {
        let catalog = MaintenanceCatalog::builtin();
        let vehicle = search_by_model("Audi", "A4", 2019);
        let resolved = resolve_spec(&catalog, &vehicle).expect("spec not resolved");
        assert_eq!(resolved.oil_capacity, "5.2L");
        assert_eq!(resolved.from_year, 2018);
        assert_eq!(resolved.to_year, 2026);
    }

    #[test]
    fn test_resolve_outside_all_ranges() {
        let catalog = MaintenanceCatalog::builtin();
        let vehicle = search_by_model("Toyota", "Corolla", 2010);
        assert!(resolve_spec(&catalog, &vehicle).is_none());
    }

    #[test]
    fn test_resolve_unknown_model() {
        let catalog = MaintenanceCatalog::builtin();
        let vehicle = search_by_model("Lada", "Niva", 2020);
        assert!(resolve_spec(&catalog, &vehicle).is_none());
    }

    #[test]
    fn test_overlapping_ranges_first_match_wins() {
        let catalog = MaintenanceCatalog::from_specs(vec![
            spec("Audi", "A4", 2015, 2020, "5W-30"),
            spec("Audi", "A4", 2018, 2026, "0W-30"),
        ]);
        let vehicle = search_by_model("Audi", "A4", 2019);
        let resolved = resolve_spec(&catalog, &vehicle).expect("spec not resolved");
        assert_eq!(resolved.oil_type, "5W-30");
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let catalog = MaintenanceCatalog::from_specs(vec![spec("Audi", "A4", 2018, 2020, "0W-30")]);
        assert!(resolve_spec(&catalog, &search_by_model("Audi", "A4", 2018)).is_some());
        assert!(resolve_spec(&catalog, &search_by_model("Audi", "A4", 2020)).is_some());
        assert!(resolve_spec(&catalog, &search_by_model("Audi", "A4", 2017)).is_none());
        assert!(resolve_spec(&catalog, &search_by_model("Audi", "A4", 2021)).is_none());
    }
}
