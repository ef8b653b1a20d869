//! Output formatting module

use serde::Serialize;

use fueleco_app::{CatalogSummary, TrimListing};
use fueleco_domain::service::EconomyUnit;
use fueleco_types::{display_trim, OutputFormat, Result, Vehicle};

/// A vehicle row with its own unit label attached
#[derive(Serialize)]
struct VehicleRow<'a> {
    #[serde(flatten)]
    vehicle: &'a Vehicle,
    unit: EconomyUnit,
    unit_label: &'static str,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Heading line with an `=` underline of the same character width
fn underlined(heading: &str) -> String {
    format!("{}\n{}\n", heading, "=".repeat(heading.chars().count()))
}

pub fn render_years(format: OutputFormat, years: &[i32]) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(years);
    }

    let mut out = String::from("Model Years\n===========\n");
    for year in years {
        out.push_str(&format!("  {}\n", year));
    }
    if years.is_empty() {
        out.push_str("  (no vehicles)\n");
    }
    Ok(out)
}

pub fn render_models(format: OutputFormat, year: i32, models: &[String]) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(models);
    }

    let mut out = underlined(&format!("Models for {}", year));
    for model in models {
        out.push_str(&format!("  {}\n", model));
    }
    Ok(out)
}

pub fn render_trims(format: OutputFormat, listing: &TrimListing, decimals: usize) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(listing);
    }

    let unit = listing.unit.label();
    let mut out = underlined(&format!("{} {}", listing.year, listing.model));
    out.push_str(&format!(
        "Average city:      {:.*} {}\n",
        decimals, listing.stats.avg_city, unit
    ));
    out.push_str(&format!(
        "Average highway:   {:.*} {}\n",
        decimals, listing.stats.avg_highway, unit
    ));
    out.push_str(&format!(
        "Average combined:  {:.*} {}\n",
        decimals, listing.stats.avg_combined, unit
    ));
    out.push_str(&format!("Vehicles:          {}\n", listing.vehicle_count));
    out.push_str("\nTrims:\n");
    for trim in &listing.trims {
        out.push_str(&format!("  {}\n", display_trim(trim)));
    }
    Ok(out)
}

pub fn render_vehicles(format: OutputFormat, vehicles: &[&Vehicle]) -> Result<String> {
    if format == OutputFormat::Json {
        let rows: Vec<VehicleRow> = vehicles
            .iter()
            .map(|&vehicle| {
                let unit = EconomyUnit::for_vehicle(vehicle);
                VehicleRow {
                    vehicle,
                    unit,
                    unit_label: unit.label(),
                }
            })
            .collect();
        return to_json(&rows);
    }

    let mut out = String::new();
    for vehicle in vehicles {
        // Labels are chosen per row, not per group
        let unit = EconomyUnit::for_vehicle(vehicle).label();
        out.push_str(&format!(
            "\n{} {} {} {}\n",
            vehicle.year,
            vehicle.manufacturer,
            vehicle.model,
            vehicle.trim_display()
        ));
        out.push_str("---------------------------------------\n");
        out.push_str(&format!("Configuration:     {}\n", vehicle.configuration));
        out.push_str(&format!("City:              {} {}\n", vehicle.city_mpg, unit));
        out.push_str(&format!("Highway:           {} {}\n", vehicle.highway_mpg, unit));
        out.push_str(&format!("Combined:          {} {}\n", vehicle.combined_mpg, unit));
        out.push_str(&format!("Annual fuel cost:  {}\n", vehicle.annual_fuel_cost));
        out.push_str(&format!("GHG rating:        {}\n", vehicle.ghg_rating));
        if let Some(ref notes) = vehicle.notes {
            if !notes.is_empty() {
                out.push_str(&format!("Notes:             {}\n", notes));
            }
        }
    }
    Ok(out)
}

pub fn render_summary(format: OutputFormat, summary: &CatalogSummary) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(summary);
    }

    let span = match (summary.first_year, summary.last_year) {
        (Some(first), Some(last)) => format!("{} - {}", first, last),
        _ => "-".to_string(),
    };

    let mut out = String::from("Catalog Summary\n===============\n");
    out.push_str(&format!("Vehicles:          {}\n", summary.vehicle_count));
    out.push_str(&format!("Model years:       {} ({})\n", summary.year_count, span));
    out.push_str(&format!("Models:            {}\n", summary.model_count));
    out.push_str(&format!("Fuel-cell (MPGe):  {}\n", summary.fcv_count));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fueleco_types::Stats;

    fn listing(unit: EconomyUnit) -> TrimListing {
        TrimListing {
            year: 2024,
            model: "Prius".to_string(),
            trims: vec!["".to_string(), "LE".to_string()],
            stats: Stats {
                avg_city: 52.0,
                avg_highway: 49.0,
                avg_combined: 51.0,
            },
            is_equivalent_energy: unit == EconomyUnit::Mpge,
            unit,
            vehicle_count: 2,
        }
    }

    #[test]
    fn test_years_table() {
        let out = render_years(OutputFormat::Table, &[2023, 2024]).unwrap();
        assert!(out.contains("  2023\n  2024\n"));
    }

    #[test]
    fn test_years_json() {
        let out = render_years(OutputFormat::Json, &[2023, 2024]).unwrap();
        let parsed: Vec<i32> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec![2023, 2024]);
    }

    #[test]
    fn test_models_heading_underline() {
        let out = render_models(OutputFormat::Table, 2024, &["Prius".to_string()]).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Models for 2024");
        assert_eq!(lines[1].len(), lines[0].len());
        assert_eq!(lines[2], "  Prius");
    }

    #[test]
    fn test_trims_table_shows_group_unit_and_base() {
        let out = render_trims(OutputFormat::Table, &listing(EconomyUnit::Mpg), 2).unwrap();
        assert!(out.contains("Average city:      52.00 MPG\n"));
        assert!(out.contains("  (base)\n  LE\n"));

        let out = render_trims(OutputFormat::Table, &listing(EconomyUnit::Mpge), 1).unwrap();
        assert!(out.contains("Average combined:  51.0 MPG Equivalent (MPGe)\n"));
    }

    #[test]
    fn test_underline_counts_characters() {
        let mut citroen = listing(EconomyUnit::Mpg);
        citroen.model = "Citroën".to_string();
        let out = render_trims(OutputFormat::Table, &citroen, 2).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "2024 Citroën");
        assert_eq!(lines[1], "============");
    }

    #[test]
    fn test_trims_json_keeps_empty_trim() {
        let out = render_trims(OutputFormat::Json, &listing(EconomyUnit::Mpg), 2).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["trims"][0], "");
        assert_eq!(value["stats"]["avg_city"], 52.0);
        assert_eq!(value["unit"], "mpg");
    }

    #[test]
    fn test_vehicle_rows_labeled_individually() {
        let gas = Vehicle::new(2024, "Toyota", "Mirai", "Limited").with_mpg(67, 64, 65);
        let fcv = Vehicle::new(2024, "Toyota", "Mirai", "XLE")
            .with_mpg(76, 71, 74)
            .with_notes("FCV");

        let out = render_vehicles(OutputFormat::Table, &[&gas, &fcv]).unwrap();
        assert!(out.contains("City:              67 MPG\n"));
        assert!(out.contains("City:              76 MPG Equivalent (MPGe)\n"));
        assert!(out.contains("Notes:             FCV\n"));

        let json = render_vehicles(OutputFormat::Json, &[&gas, &fcv]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["unit"], "mpg");
        assert_eq!(value[1]["unit"], "mpge");
        assert_eq!(value[1]["Notes"], "FCV");
        assert_eq!(value[1]["Trim"], "XLE");
    }

    #[test]
    fn test_summary_table() {
        let summary = CatalogSummary {
            vehicle_count: 20,
            year_count: 3,
            model_count: 12,
            fcv_count: 5,
            first_year: Some(2022),
            last_year: Some(2024),
        };
        let out = render_summary(OutputFormat::Table, &summary).unwrap();
        assert!(out.contains("Model years:       3 (2022 - 2024)\n"));
        assert!(out.contains("Fuel-cell (MPGe):  5\n"));
    }
}
