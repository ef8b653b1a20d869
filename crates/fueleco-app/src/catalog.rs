//! Catalog navigation
//!
//! `Catalog` is the single entry point presentation code calls. It owns the
//! immutable record set loaded at startup and answers Year → Model → Trim →
//! Vehicle queries, attaching group averages and unit labels where a screen
//! needs them. Groupings are recomputed per call.
//!
//! Paths that do not exist in the catalog are reported as
//! [`NavigationError::NotFound`] rather than as empty lists.

use serde::Serialize;
use tracing::{debug, info};

use fueleco_domain::repository::VehicleSource;
use fueleco_domain::service::{
    aggregate, group_is_equivalent_energy, hierarchy, is_equivalent_energy, EconomyUnit,
};
use fueleco_types::{DecodeError, NavigationError, NavigationPath, Stats, Vehicle};

type NavResult<T> = std::result::Result<T, NavigationError>;

/// Trims of one model plus the model-wide averages shown alongside them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrimListing {
    pub year: i32,
    pub model: String,
    pub trims: Vec<String>,
    /// Averages over every vehicle of the model, all trims included
    pub stats: Stats,
    /// True if any vehicle of the model is an FCV
    pub is_equivalent_energy: bool,
    pub unit: EconomyUnit,
    pub vehicle_count: usize,
}

/// Overview counts for the loaded catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub vehicle_count: usize,
    pub year_count: usize,
    /// Distinct (year, model) groups
    pub model_count: usize,
    pub fcv_count: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

/// Immutable vehicle catalog for one session
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    /// Load every record from `source`; nothing is kept if any record fails
    pub fn load(source: &dyn VehicleSource) -> std::result::Result<Self, DecodeError> {
        let vehicles = source.load_vehicles()?;
        info!(source = %source.describe(), count = vehicles.len(), "Catalog loaded");
        Ok(Self::from_vehicles(vehicles))
    }

    pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// Catalog with no records, used as the error state after a failed load
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// All model years, ascending
    pub fn list_years(&self) -> Vec<i32> {
        let years = hierarchy::years(&self.vehicles);
        debug!(count = years.len(), "Listed years");
        years
    }

    /// Models offered in `year`, sorted
    pub fn list_models(&self, year: i32) -> NavResult<Vec<String>> {
        let models = hierarchy::models(&self.vehicles, year);
        if models.is_empty() {
            return Err(NavigationError::NotFound(NavigationPath::year(year)));
        }
        debug!(year, count = models.len(), "Listed models");
        Ok(models)
    }

    /// Trims of `model` in `year`, with averages and unit over the whole model
    pub fn list_trims_with_stats(&self, year: i32, model: &str) -> NavResult<TrimListing> {
        let group: Vec<&Vehicle> = hierarchy::in_model(&self.vehicles, year, model).collect();
        if group.is_empty() {
            return Err(self.not_found(year, Some(model), None));
        }

        let trims = hierarchy::trims(&self.vehicles, year, model);
        let stats = aggregate(group.iter().copied())?;
        let is_equivalent_energy = group_is_equivalent_energy(group.iter().copied());
        debug!(year, model, trims = trims.len(), vehicles = group.len(), "Listed trims");

        Ok(TrimListing {
            year,
            model: model.to_string(),
            trims,
            stats,
            is_equivalent_energy,
            unit: EconomyUnit::from_equivalent_energy(is_equivalent_energy),
            vehicle_count: group.len(),
        })
    }

    /// Every configuration sharing `year`, `model` and `trim`.
    ///
    /// Units are labeled per row: call [`Catalog::is_fcv`] or
    /// [`Catalog::unit_for`] on each returned vehicle.
    pub fn list_vehicles(&self, year: i32, model: &str, trim: &str) -> NavResult<Vec<&Vehicle>> {
        let vehicles: Vec<&Vehicle> =
            hierarchy::in_trim(&self.vehicles, year, model, trim).collect();
        if vehicles.is_empty() {
            return Err(self.not_found(year, Some(model), Some(trim)));
        }
        debug!(year, model, trim, count = vehicles.len(), "Listed vehicles");
        Ok(vehicles)
    }

    /// Vehicles under any level of the hierarchy
    pub fn vehicles_at(&self, path: &NavigationPath) -> NavResult<Vec<&Vehicle>> {
        let vehicles: Vec<&Vehicle> = match (path.model.as_deref(), path.trim.as_deref()) {
            (None, _) => hierarchy::in_year(&self.vehicles, path.year).collect(),
            (Some(model), None) => hierarchy::in_model(&self.vehicles, path.year, model).collect(),
            (Some(model), Some(trim)) => {
                hierarchy::in_trim(&self.vehicles, path.year, model, trim).collect()
            }
        };
        if vehicles.is_empty() {
            return Err(NavigationError::NotFound(path.clone()));
        }
        Ok(vehicles)
    }

    /// Per-vehicle FCV check
    pub fn is_fcv(&self, vehicle: &Vehicle) -> bool {
        is_equivalent_energy(vehicle)
    }

    /// Unit label for a single vehicle row
    pub fn unit_for(&self, vehicle: &Vehicle) -> EconomyUnit {
        EconomyUnit::for_vehicle(vehicle)
    }

    pub fn summary(&self) -> CatalogSummary {
        let years = hierarchy::years(&self.vehicles);
        let model_count = years
            .iter()
            .map(|&year| hierarchy::models(&self.vehicles, year).len())
            .sum();

        CatalogSummary {
            vehicle_count: self.vehicles.len(),
            year_count: years.len(),
            model_count,
            fcv_count: self.vehicles.iter().filter(|v| is_equivalent_energy(v)).count(),
            first_year: years.first().copied(),
            last_year: years.last().copied(),
        }
    }

    /// Report the shallowest level of the path that is missing
    fn not_found(&self, year: i32, model: Option<&str>, trim: Option<&str>) -> NavigationError {
        let path = if hierarchy::in_year(&self.vehicles, year).next().is_none() {
            NavigationPath::year(year)
        } else {
            match (model, trim) {
                (Some(model), Some(trim))
                    if hierarchy::in_model(&self.vehicles, year, model).next().is_some() =>
                {
                    NavigationPath::trim(year, model, trim)
                }
                (Some(model), _) => NavigationPath::model(year, model),
                (None, _) => NavigationPath::year(year),
            }
        };
        NavigationError::NotFound(path)
    }
}
