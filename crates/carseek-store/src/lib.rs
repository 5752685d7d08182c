//! Session state for vehicle lookup
//!
//! The store owns all mutable state: the current search result, the two
//! bounded history rings, and the simple loading/error flags. Mutation goes
//! through explicit actions; everything else is derived on read.

mod auth;
mod ring;
mod session;

pub use auth::AuthStore;
pub use ring::HistoryRing;
pub use session::{CarStore, DEFAULT_MAINTENANCE_LIMIT_KM, HISTORY_CAP, RECENT_CAP};
