//! The vehicle lookup session store

use carseek_types::{MaintenanceSpec, SearchType, SearchedVehicle};
use chrono::{Datelike, Utc};

use carseek_domain::catalog::{MaintenanceCatalog, VehicleCatalog};
use carseek_domain::service;

use crate::ring::HistoryRing;

/// Recent-searches ring capacity
pub const RECENT_CAP: usize = 5;
/// Full-history ring capacity
pub const HISTORY_CAP: usize = 50;
/// Default odometer limit for the maintenance-due flag
pub const DEFAULT_MAINTENANCE_LIMIT_KM: u32 = 120_000;

/// In-memory session store for vehicle searches
///
/// Owns the current result, the two bounded rings, and the loading/error
/// flags. Ring entries are `Option<SearchedVehicle>`: a lookup miss is
/// recorded as `None` so the history still grows by one.
#[derive(Debug)]
pub struct CarStore {
    vehicles: VehicleCatalog,
    maintenance: MaintenanceCatalog,
    current: Option<SearchedVehicle>,
    recent: HistoryRing<Option<SearchedVehicle>>,
    history: HistoryRing<Option<SearchedVehicle>>,
    search_type: Option<SearchType>,
    user_km: u32,
    maintenance_limit_km: u32,
    loading: bool,
    error: Option<String>,
}

impl CarStore {
    /// Create a store over the given catalogs
    pub fn new(vehicles: VehicleCatalog, maintenance: MaintenanceCatalog) -> Self {
        Self {
            vehicles,
            maintenance,
            current: None,
            recent: HistoryRing::new(RECENT_CAP),
            history: HistoryRing::new(HISTORY_CAP),
            search_type: None,
            user_km: 0,
            maintenance_limit_km: DEFAULT_MAINTENANCE_LIMIT_KM,
            loading: false,
            error: None,
        }
    }

    /// Create a store over the built-in catalogs
    pub fn with_builtin_catalogs() -> Self {
        Self::new(VehicleCatalog::builtin(), MaintenanceCatalog::builtin())
    }

    /// Override the maintenance-due odometer limit
    pub fn set_maintenance_limit(&mut self, limit_km: u32) {
        self.maintenance_limit_km = limit_km;
    }

    // ------------------------------------------------------------------
    // Search actions
    // ------------------------------------------------------------------

    /// Search by VIN; a miss sets the current result to `None`
    ///
    /// The outcome, hit or miss, is recorded on both rings.
    pub fn search_by_vin(&mut self, vin: &str) {
        self.search_type = Some(SearchType::Vin);
        self.current = service::search_by_vin(&self.vehicles, vin);
        self.record_outcome();
    }

    /// Search by license plate; a miss sets the current result to `None`
    pub fn search_by_plate(&mut self, plate: &str) {
        self.search_type = Some(SearchType::Plate);
        self.current = service::search_by_plate(&self.vehicles, plate);
        self.record_outcome();
    }

    /// Search by brand/model/year; never fails
    pub fn search_by_model(&mut self, brand: &str, model: &str, year: i32) {
        self.search_type = Some(SearchType::Model);
        self.current = Some(service::search_by_model(brand, model, year));
        self.record_outcome();
    }

    fn record_outcome(&mut self) {
        self.recent.push(self.current.clone());
        self.history.push(self.current.clone());
    }

    // ------------------------------------------------------------------
    // History actions
    // ------------------------------------------------------------------

    /// Empty only the recent ring
    pub fn clear_recent(&mut self) {
        self.recent.clear();
    }

    /// Empty only the full history ring
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Set the current result from a past entry without re-recording it
    pub fn restore_from_history(&mut self, entry: SearchedVehicle) {
        self.current = Some(entry);
    }

    // ------------------------------------------------------------------
    // Flag actions
    // ------------------------------------------------------------------

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    pub fn set_user_km(&mut self, km: u32) {
        self.user_km = km;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // ------------------------------------------------------------------
    // Derived accessors (computed on read, never stored)
    // ------------------------------------------------------------------

    pub fn current(&self) -> Option<&SearchedVehicle> {
        self.current.as_ref()
    }

    pub fn has_vehicle(&self) -> bool {
        self.current.is_some()
    }

    /// Brand of the current vehicle, empty when absent
    pub fn brand(&self) -> &str {
        self.current.as_ref().map(|c| c.brand.as_str()).unwrap_or("")
    }

    /// Model of the current vehicle, empty when absent
    pub fn model(&self) -> &str {
        self.current.as_ref().map(|c| c.model.as_str()).unwrap_or("")
    }

    /// Year of the current vehicle, 0 when absent
    pub fn year(&self) -> i32 {
        self.current.as_ref().map(|c| c.year).unwrap_or(0)
    }

    /// Display name of the current vehicle, empty when absent
    pub fn name(&self) -> String {
        self.current.as_ref().map(|c| c.name()).unwrap_or_default()
    }

    /// Current calendar year minus vehicle year, 0 when absent
    pub fn age_years(&self) -> i32 {
        self.current
            .as_ref()
            .map(|c| Utc::now().year() - c.year)
            .unwrap_or(0)
    }

    pub fn recent(&self) -> &HistoryRing<Option<SearchedVehicle>> {
        &self.recent
    }

    pub fn history(&self) -> &HistoryRing<Option<SearchedVehicle>> {
        &self.history
    }

    pub fn recent_count(&self) -> usize {
        self.recent.len()
    }

    pub fn history_count(&self) -> usize {
        self.history.len()
    }

    pub fn last_search_type(&self) -> Option<SearchType> {
        self.search_type
    }

    pub fn user_km(&self) -> u32 {
        self.user_km
    }

    pub fn maintenance_limit_km(&self) -> u32 {
        self.maintenance_limit_km
    }

    /// Whether the odometer reading has reached the maintenance limit
    pub fn maintenance_due(&self) -> bool {
        self.user_km >= self.maintenance_limit_km
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Resolve the maintenance spec for the current vehicle
    pub fn maintenance_info(&self) -> Option<&MaintenanceSpec> {
        let current = self.current.as_ref()?;
        service::resolve_spec(&self.maintenance, current)
    }

    pub fn vehicle_catalog(&self) -> &VehicleCatalog {
        &self.vehicles
    }

    pub fn maintenance_catalog(&self) -> &MaintenanceCatalog {
        &self.maintenance
    }
}

impl Default for CarStore {
    fn default() -> Self {
        Self::with_builtin_catalogs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vin_hit_sets_current() {
        let mut store = CarStore::with_builtin_catalogs();
        store.search_by_vin("19uua66531l000100");
        assert!(store.has_vehicle());
        assert_eq!(store.brand(), "Audi");
        assert_eq!(store.model(), "A4");
        assert_eq!(store.year(), 2019);
        assert_eq!(store.last_search_type(), Some(SearchType::Vin));
    }

    #[test]
    fn test_miss_clears_current_but_records_history() {
        let mut store = CarStore::with_builtin_catalogs();
        store.search_by_vin("nonexistent");
        assert!(!store.has_vehicle());
        assert_eq!(store.recent_count(), 1);
        assert_eq!(store.history_count(), 1);
        assert_eq!(store.recent().get(0), Some(&None));
    }

    #[test]
    fn test_miss_after_hit_replaces_current() {
        let mut store = CarStore::with_builtin_catalogs();
        store.search_by_plate("B311XYZ");
        assert!(store.has_vehicle());
        store.search_by_plate("ZZ99ZZZ");
        assert!(!store.has_vehicle());
        assert_eq!(store.history_count(), 2);
    }

    #[test]
    fn test_recent_keeps_five_newest() {
        let mut store = CarStore::with_builtin_catalogs();
        for year in 2000..2007 {
            store.search_by_model("Brand", "Model", year);
        }
        assert_eq!(store.recent_count(), 5);
        let years: Vec<i32> = store
            .recent()
            .iter()
            .map(|e| e.as_ref().map(|v| v.year).unwrap_or(0))
            .collect();
        assert_eq!(years, vec![2006, 2005, 2004, 2003, 2002]);
    }

    #[test]
    fn test_history_keeps_fifty_newest() {
        let mut store = CarStore::with_builtin_catalogs();
        for year in 1900..1955 {
            store.search_by_model("Brand", "Model", year);
        }
        assert_eq!(store.history_count(), 50);
        let newest = store.history().get(0).and_then(|e| e.as_ref());
        let oldest = store.history().get(49).and_then(|e| e.as_ref());
        assert_eq!(newest.map(|v| v.year), Some(1954));
        assert_eq!(oldest.map(|v| v.year), Some(1905));
    }

    #[test]
    fn test_clear_recent_leaves_history() {
        let mut store = CarStore::with_builtin_catalogs();
        store.search_by_model("A", "B", 2020);
        store.search_by_model("C", "D", 2021);
        store.clear_recent();
        assert_eq!(store.recent_count(), 0);
        assert_eq!(store.history_count(), 2);
    }

    #[test]
    fn test_clear_history_leaves_recent() {
        let mut store = CarStore::with_builtin_catalogs();
        store.search_by_model("A", "B", 2020);
        store.clear_history();
        assert_eq!(store.history_count(), 0);
        assert_eq!(store.recent_count(), 1);
    }

    #[test]
    fn test_restore_does_not_record() {
        let mut store = CarStore::with_builtin_catalogs();
        store.search_by_plate("HD52EDI");
        let entry = store
            .history()
            .get(0)
            .and_then(|e| e.clone())
            .expect("entry missing");
        store.clear_current();
        store.restore_from_history(entry);
        assert!(store.has_vehicle());
        assert_eq!(store.brand(), "BMW");
        assert_eq!(store.history_count(), 1);
        assert_eq!(store.recent_count(), 1);
    }

    #[test]
    fn test_accessor_defaults_when_absent() {
        let store = CarStore::with_builtin_catalogs();
        assert!(!store.has_vehicle());
        assert_eq!(store.brand(), "");
        assert_eq!(store.model(), "");
        assert_eq!(store.year(), 0);
        assert_eq!(store.name(), "");
        assert_eq!(store.age_years(), 0);
        assert!(store.last_search_type().is_none());
        assert!(store.maintenance_info().is_none());
    }

    #[test]
    fn test_age_years() {
        let mut store = CarStore::with_builtin_catalogs();
        store.search_by_plate("B311XYZ");
        assert_eq!(store.age_years(), Utc::now().year() - 2019);
    }

    #[test]
    fn test_maintenance_due_flag() {
        let mut store = CarStore::with_builtin_catalogs();
        assert!(!store.maintenance_due());
        store.set_user_km(119_999);
        assert!(!store.maintenance_due());
        store.set_user_km(120_000);
        assert!(store.maintenance_due());
        store.set_maintenance_limit(150_000);
        assert!(!store.maintenance_due());
    }

    #[test]
    fn test_maintenance_info_for_plate_example() {
        let mut store = CarStore::with_builtin_catalogs();
        store.search_by_plate("b311xyz");
        let spec = store.maintenance_info().expect("spec not resolved");
        assert_eq!(spec.brand, "Audi");
        assert_eq!(spec.model, "A4");
        assert_eq!(spec.oil_capacity, "5.2L");
    }

    #[test]
    fn test_loading_and_error_flags() {
        let mut store = CarStore::with_builtin_catalogs();
        assert!(!store.is_loading());
        store.set_loading(true);
        assert!(store.is_loading());
        store.set_error("plate format looked odd");
        assert_eq!(store.last_error(), Some("plate format looked odd"));
        store.clear_error();
        assert!(store.last_error().is_none());
    }
}
