//! Catalog search service
//!
//! Lookup misses are represented as `None`, never as errors.

use carseek_types::SearchedVehicle;

use crate::catalog::VehicleCatalog;

/// Search the catalog by VIN (case-insensitive exact match)
pub fn search_by_vin(catalog: &VehicleCatalog, vin: &str) -> Option<SearchedVehicle> {
    catalog.find_by_vin(vin).map(SearchedVehicle::from_record)
}

/// Search the catalog by license plate (case-insensitive exact match)
pub fn search_by_plate(catalog: &VehicleCatalog, plate: &str) -> Option<SearchedVehicle> {
    catalog.find_by_plate(plate).map(SearchedVehicle::from_record)
}

/// Synthesize a result from a brand/model/year triple
///
/// This path never consults the catalog and never fails; the result carries
/// no VIN or plate.
pub fn search_by_model(brand: &str, model: &str, year: i32) -> SearchedVehicle {
    SearchedVehicle::from_triple(brand.to_string(), model.to_string(), year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vin_hit_copies_catalog_fields() {
        let catalog = VehicleCatalog::builtin();
        let result = search_by_vin(&catalog, "12345abcde6789012").expect("BMW X3 not found");
        assert_eq!(result.brand, "BMW");
        assert_eq!(result.model, "X3");
        assert_eq!(result.year, 2020);
        assert_eq!(result.vin.as_deref(), Some("12345ABCDE6789012"));
        assert_eq!(result.license_plate.as_deref(), Some("HD52EDI"));
    }

    #[test]
    fn test_vin_miss_is_none() {
        let catalog = VehicleCatalog::builtin();
        assert!(search_by_vin(&catalog, "nonexistent").is_none());
    }

    #[test]
    fn test_plate_hit_any_casing() {
        let catalog = VehicleCatalog::builtin();
        for query in ["B311XYZ", "b311xyz", "B311xyz"] {
            let result = search_by_plate(&catalog, query).expect("Audi A4 not found");
            assert_eq!(result.brand, "Audi");
            assert_eq!(result.model, "A4");
            assert_eq!(result.year, 2019);
        }
    }

    #[test]
    fn test_model_search_never_fails() {
        let result = search_by_model("Fiat", "Panda", 2005);
        assert_eq!(result.brand, "Fiat");
        assert_eq!(result.model, "Panda");
        assert_eq!(result.year, 2005);
        assert!(result.vin.is_none());
        assert!(result.license_plate.is_none());
    }
}
