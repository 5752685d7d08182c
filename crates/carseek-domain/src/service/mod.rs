//! Domain services

pub mod maintenance;
pub mod search;

pub use maintenance::resolve_spec;
pub use search::{search_by_model, search_by_plate, search_by_vin};
