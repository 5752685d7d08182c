//! Domain layer: catalogs, search and maintenance services

pub mod catalog;
pub mod repository;
pub mod service;
