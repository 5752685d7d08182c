//! Infrastructure layer: file persistence and catalog loaders

pub mod catalog_loader;
pub mod persistence;
