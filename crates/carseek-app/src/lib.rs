//! Application layer: configuration and the route table

pub mod config;
pub mod routes;
