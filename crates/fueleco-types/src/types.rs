//! Core types for the fuel economy catalog

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Label shown in place of an empty trim
pub const BASE_TRIM_LABEL: &str = "(base)";

/// Display form of a trim key; the empty trim is the base trim
pub fn display_trim(trim: &str) -> &str {
    if trim.is_empty() {
        BASE_TRIM_LABEL
    } else {
        trim
    }
}

/// Per-run list identity for a vehicle record.
///
/// Generated at decode time and never persisted. Carries no domain meaning:
/// do not use it for lookups or joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(Uuid);

impl VehicleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VehicleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One fuel economy record
///
/// Field names on the wire follow the bundled dataset schema.
#[derive(Debug, Clone, Serialize)]
pub struct Vehicle {
    #[serde(skip)]
    pub id: VehicleId,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "Model")]
    pub model: String,
    /// Empty string is the base trim, a real grouping key
    #[serde(rename = "Trim")]
    pub trim: String,
    /// Transmission, engine size, cylinders
    #[serde(rename = "Configuration (trans, eng size, cyl)")]
    pub configuration: String,
    #[serde(rename = "City MPG")]
    pub city_mpg: u32,
    #[serde(rename = "Highway MPG")]
    pub highway_mpg: u32,
    #[serde(rename = "Combined MPG")]
    pub combined_mpg: u32,
    #[serde(rename = "Annual Fuel Cost")]
    pub annual_fuel_cost: String,
    #[serde(rename = "GHG Rating")]
    pub ghg_rating: i32,
    #[serde(rename = "Notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Vehicle {
    pub fn new(
        year: i32,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        trim: impl Into<String>,
    ) -> Self {
        Self {
            id: VehicleId::new(),
            year,
            manufacturer: manufacturer.into(),
            model: model.into(),
            trim: trim.into(),
            configuration: String::new(),
            city_mpg: 0,
            highway_mpg: 0,
            combined_mpg: 0,
            annual_fuel_cost: String::new(),
            ghg_rating: 0,
            notes: None,
        }
    }

    pub fn with_mpg(mut self, city: u32, highway: u32, combined: u32) -> Self {
        self.city_mpg = city;
        self.highway_mpg = highway;
        self.combined_mpg = combined;
        self
    }

    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = configuration.into();
        self
    }

    pub fn with_annual_fuel_cost(mut self, cost: impl Into<String>) -> Self {
        self.annual_fuel_cost = cost.into();
        self
    }

    pub fn with_ghg_rating(mut self, rating: i32) -> Self {
        self.ghg_rating = rating;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn trim_display(&self) -> &str {
        display_trim(&self.trim)
    }
}

/// Equality over record content; `id` is ignored
impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year
            && self.manufacturer == other.manufacturer
            && self.model == other.model
            && self.trim == other.trim
            && self.configuration == other.configuration
            && self.city_mpg == other.city_mpg
            && self.highway_mpg == other.highway_mpg
            && self.combined_mpg == other.combined_mpg
            && self.annual_fuel_cost == other.annual_fuel_cost
            && self.ghg_rating == other.ghg_rating
            && self.notes == other.notes
    }
}

/// Average fuel economy over a group of vehicles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub avg_city: f64,
    pub avg_highway: f64,
    pub avg_combined: f64,
}

impl Stats {
    /// Render the three averages with `decimals` fractional digits
    pub fn format(&self, decimals: usize) -> String {
        format!(
            "city {:.*}, highway {:.*}, combined {:.*}",
            decimals, self.avg_city, decimals, self.avg_highway, decimals, self.avg_combined
        )
    }
}

/// Location in the Year → Model → Trim hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationPath {
    pub year: i32,
    pub model: Option<String>,
    pub trim: Option<String>,
}

impl NavigationPath {
    pub fn year(year: i32) -> Self {
        Self {
            year,
            model: None,
            trim: None,
        }
    }

    pub fn model(year: i32, model: impl Into<String>) -> Self {
        Self {
            year,
            model: Some(model.into()),
            trim: None,
        }
    }

    pub fn trim(year: i32, model: impl Into<String>, trim: impl Into<String>) -> Self {
        Self {
            year,
            model: Some(model.into()),
            trim: Some(trim.into()),
        }
    }
}

impl fmt::Display for NavigationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year)?;
        if let Some(ref model) = self.model {
            write!(f, " / {}", model)?;
        }
        if let Some(ref trim) = self.trim {
            write!(f, " / {}", display_trim(trim))?;
        }
        Ok(())
    }
}
