//! Application service layer - catalog navigation, config, dataset wiring

pub mod catalog;
pub mod config;
pub mod repository;

pub use catalog::{Catalog, CatalogSummary, TrimListing};
pub use config::{Config, MAX_DECIMALS};
pub use repository::{open_catalog, open_catalog_at, BUNDLED_DATASET};
