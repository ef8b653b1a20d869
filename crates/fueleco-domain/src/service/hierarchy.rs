//! Year → Model → Trim grouping over the catalog
//!
//! Every query derives its groups from the record slice it is given. Results
//! are duplicate-free and sorted: years numerically, models and trims by
//! byte-wise string order (so the empty base trim always comes first).
//! A filter that matches nothing yields an empty list.

use std::collections::BTreeSet;

use fueleco_types::Vehicle;

fn distinct_sorted<T: Ord>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    values.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Vehicles of one model year
pub fn in_year(vehicles: &[Vehicle], year: i32) -> impl Iterator<Item = &Vehicle> {
    vehicles.iter().filter(move |v| v.year == year)
}

/// Vehicles of one model within a year
pub fn in_model<'a: 'k, 'k>(
    vehicles: &'a [Vehicle],
    year: i32,
    model: &'k str,
) -> impl Iterator<Item = &'a Vehicle> + 'k {
    in_year(vehicles, year).filter(move |v| v.model == model)
}

/// Vehicles of one trim within a year and model
pub fn in_trim<'a: 'k, 'k>(
    vehicles: &'a [Vehicle],
    year: i32,
    model: &'k str,
    trim: &'k str,
) -> impl Iterator<Item = &'a Vehicle> + 'k {
    in_model(vehicles, year, model).filter(move |v| v.trim == trim)
}

/// Distinct model years, ascending
pub fn years(vehicles: &[Vehicle]) -> Vec<i32> {
    distinct_sorted(vehicles.iter().map(|v| v.year))
}

/// Distinct model names offered in `year`
pub fn models(vehicles: &[Vehicle], year: i32) -> Vec<String> {
    distinct_sorted(in_year(vehicles, year).map(|v| v.model.as_str()))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct trims offered for `model` in `year`
pub fn trims(vehicles: &[Vehicle], year: i32, model: &str) -> Vec<String> {
    distinct_sorted(in_model(vehicles, year, model).map(|v| v.trim.as_str()))
        .into_iter()
        .map(str::to_string)
        .collect()
}
