//! File-based implementation of VehicleSource

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use fueleco_domain::repository::VehicleSource;
use fueleco_types::{DecodeError, Vehicle};

use crate::decoder::decode_reader;

/// Vehicle records stored as a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VehicleSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load_vehicles(&self) -> Result<Vec<Vehicle>, DecodeError> {
        debug!(path = %self.path.display(), "Opening vehicle dataset");
        let file = File::open(&self.path).map_err(|e| {
            DecodeError::SourceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let vehicles = decode_reader(BufReader::new(file))?;
        info!(path = %self.path.display(), count = vehicles.len(), "Decoded vehicle records");
        Ok(vehicles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let source = JsonFileSource::new("/nonexistent/fueleco/vehicles.json");
        assert!(matches!(
            source.load_vehicles(),
            Err(DecodeError::SourceUnavailable(_))
        ));
    }

    #[test]
    fn test_loads_records_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"Year": 2024, "Manufacturer": "Toyota", "Model": "Mirai", "Trim": "XLE",
                "Configuration (trans, eng size, cyl)": "Auto (A1)", "City MPG": 76,
                "Highway MPG": 71, "Combined MPG": 74, "Annual Fuel Cost": "$4,250",
                "GHG Rating": 10, "Notes": "FCV"}}]"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let vehicles = source.load_vehicles().unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].notes.as_deref(), Some("FCV"));
        assert_eq!(source.describe(), file.path().display().to_string());
    }
}
