//! In-memory implementation of VehicleSource

use tracing::info;

use fueleco_domain::repository::VehicleSource;
use fueleco_types::{DecodeError, Vehicle};

use crate::decoder::decode_str;

/// Vehicle records held as JSON text (bundled datasets, fixtures)
#[derive(Debug, Clone, Copy)]
pub struct JsonStrSource<'a> {
    name: &'a str,
    content: &'a str,
}

impl<'a> JsonStrSource<'a> {
    pub fn new(content: &'a str) -> Self {
        Self::named("inline JSON", content)
    }

    pub fn named(name: &'a str, content: &'a str) -> Self {
        Self { name, content }
    }
}

impl VehicleSource for JsonStrSource<'_> {
    fn describe(&self) -> String {
        self.name.to_string()
    }

    fn load_vehicles(&self) -> Result<Vec<Vehicle>, DecodeError> {
        let vehicles = decode_str(self.content)?;
        info!(source = self.name, count = vehicles.len(), "Decoded vehicle records");
        Ok(vehicles)
    }
}
