//! CSV export of vehicle records

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;
use tracing::info;

use fueleco_types::{Result, Vehicle};

/// One CSV row; notes always occupy a column so rows stay rectangular
#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Manufacturer")]
    manufacturer: &'a str,
    #[serde(rename = "Model")]
    model: &'a str,
    #[serde(rename = "Trim")]
    trim: &'a str,
    #[serde(rename = "Configuration (trans, eng size, cyl)")]
    configuration: &'a str,
    #[serde(rename = "City MPG")]
    city_mpg: u32,
    #[serde(rename = "Highway MPG")]
    highway_mpg: u32,
    #[serde(rename = "Combined MPG")]
    combined_mpg: u32,
    #[serde(rename = "Annual Fuel Cost")]
    annual_fuel_cost: &'a str,
    #[serde(rename = "GHG Rating")]
    ghg_rating: i32,
    #[serde(rename = "Notes")]
    notes: &'a str,
}

impl<'a> From<&'a Vehicle> for CsvRow<'a> {
    fn from(v: &'a Vehicle) -> Self {
        Self {
            year: v.year,
            manufacturer: &v.manufacturer,
            model: &v.model,
            trim: &v.trim,
            configuration: &v.configuration,
            city_mpg: v.city_mpg,
            highway_mpg: v.highway_mpg,
            combined_mpg: v.combined_mpg,
            annual_fuel_cost: &v.annual_fuel_cost,
            ghg_rating: v.ghg_rating,
            notes: v.notes.as_deref().unwrap_or(""),
        }
    }
}

/// Write vehicles as CSV with a header row
pub fn write_vehicles_csv<'a, W, I>(writer: W, vehicles: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Vehicle>,
{
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);
    let mut count = 0;
    for vehicle in vehicles {
        writer.serialize(CsvRow::from(vehicle))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Export vehicles to a CSV file, replacing any existing file
pub fn export_vehicles_csv<'a, I>(path: &Path, vehicles: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    let file = File::create(path)?;
    let count = write_vehicles_csv(file, vehicles)?;
    info!(path = %path.display(), count, "Exported vehicles to CSV");
    Ok(count)
}
