//! Dataset source adapters for the catalog

use std::path::Path;

use fueleco_domain::repository::VehicleSource;
use fueleco_infra::{JsonFileSource, JsonStrSource};
use fueleco_types::DecodeError;

use crate::catalog::Catalog;
use crate::config::Config;

/// Dataset shipped with the binary
pub const BUNDLED_DATASET: &str = include_str!("../data/vehicles.json");

/// Source selected by the config: the configured file, else the bundled dataset
pub fn dataset_source(config: &Config) -> Box<dyn VehicleSource> {
    match config.dataset_path {
        Some(ref path) => Box::new(JsonFileSource::new(path.clone())),
        None => Box::new(JsonStrSource::named("bundled dataset", BUNDLED_DATASET)),
    }
}

/// Open the catalog described by `config`
pub fn open_catalog(config: &Config) -> Result<Catalog, DecodeError> {
    let source = dataset_source(config);
    Catalog::load(source.as_ref())
}

/// Open a catalog from a JSON file at a custom path
pub fn open_catalog_at(path: &Path) -> Result<Catalog, DecodeError> {
    Catalog::load(&JsonFileSource::new(path))
}
