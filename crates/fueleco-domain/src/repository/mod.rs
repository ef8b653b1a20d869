//! Source trait definitions for loading the catalog

use fueleco_types::{DecodeError, Vehicle};

/// Where the catalog's vehicle records come from
///
/// Implementations decode the whole source or fail; they never hand back a
/// partial record set.
pub trait VehicleSource {
    /// Short human-readable description, used in logs
    fn describe(&self) -> String;

    /// Read and decode every record in the source
    fn load_vehicles(&self) -> Result<Vec<Vehicle>, DecodeError>;
}
