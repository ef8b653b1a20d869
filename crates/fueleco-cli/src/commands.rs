//! Command handlers

use std::path::PathBuf;

use tracing::{info, warn};

use crate::cli::{Cli, Commands};
use crate::output::{render_models, render_summary, render_trims, render_vehicles, render_years};
use fueleco_app::{open_catalog, open_catalog_at, Catalog, Config};
use fueleco_infra::export::export_vehicles_csv;
use fueleco_types::{Error, NavigationPath, OutputFormat, Result};

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);
    let decimals = config.decimals;
    let data = cli.data;

    match cli.command {
        Commands::Config {
            show,
            set_dataset,
            clear_dataset,
            set_format,
            set_decimals,
            reset,
        } => handle_config(
            config,
            ConfigUpdate {
                show,
                set_dataset,
                clear_dataset,
                set_format,
                set_decimals,
                reset,
            },
        ),
        Commands::Years => {
            let catalog = load_catalog(&config, data)?;
            println!("{}", render_years(format, &catalog.list_years())?);
            Ok(())
        }
        Commands::Models { year } => {
            let catalog = load_catalog(&config, data)?;
            let models = catalog.list_models(year)?;
            println!("{}", render_models(format, year, &models)?);
            Ok(())
        }
        Commands::Trims { year, model } => {
            let catalog = load_catalog(&config, data)?;
            let listing = catalog.list_trims_with_stats(year, &model)?;
            println!("{}", render_trims(format, &listing, decimals)?);
            Ok(())
        }
        Commands::Vehicles { year, model, trim } => {
            let catalog = load_catalog(&config, data)?;
            let trim = trim.unwrap_or_default();
            let vehicles = catalog.list_vehicles(year, &model, &trim)?;
            println!("{}", render_vehicles(format, &vehicles)?);
            Ok(())
        }
        Commands::Summary => {
            let catalog = load_catalog(&config, data)?;
            println!("{}", render_summary(format, &catalog.summary())?);
            Ok(())
        }
        Commands::Export {
            year,
            model,
            trim,
            output,
        } => {
            let catalog = load_catalog(&config, data)?;
            handle_export(&catalog, year, model, trim, output, format)
        }
    }
}

/// Open the dataset named by `--data`, else the configured one.
///
/// All-or-nothing: a dataset that fails to decode is never shown in part.
fn load_catalog(config: &Config, data: Option<PathBuf>) -> Result<Catalog> {
    let opened = match data {
        Some(path) => open_catalog_at(&path),
        None => open_catalog(config),
    };
    opened.map_err(|e| {
        warn!(error = %e, "Failed to load vehicle dataset");
        Error::from(e)
    })
}

fn handle_export(
    catalog: &Catalog,
    year: i32,
    model: Option<String>,
    trim: Option<String>,
    output: PathBuf,
    format: OutputFormat,
) -> Result<()> {
    let path = NavigationPath { year, model, trim };
    let vehicles = catalog.vehicles_at(&path)?;
    let count = export_vehicles_csv(&output, vehicles.iter().copied())?;
    info!(path = %path, count, "Export finished");

    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::json!({
                "path": path.to_string(),
                "output": output.display().to_string(),
                "count": count,
            })
        );
    } else {
        println!("Exported {} vehicles ({}) to {}", count, path, output.display());
    }
    Ok(())
}

struct ConfigUpdate {
    show: bool,
    set_dataset: Option<PathBuf>,
    clear_dataset: bool,
    set_format: Option<OutputFormat>,
    set_decimals: Option<usize>,
    reset: bool,
}

fn handle_config(mut config: Config, update: ConfigUpdate) -> Result<()> {
    if update.reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut changed = false;

    if let Some(path) = update.set_dataset {
        config.dataset_path = Some(path);
        changed = true;
    }

    if update.clear_dataset {
        config.dataset_path = None;
        changed = true;
    }

    if let Some(format) = update.set_format {
        config.output_format = format;
        changed = true;
    }

    if let Some(decimals) = update.set_decimals {
        config.set_decimals(decimals)?;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }

    if update.show || !changed {
        println!("{}", config);
    }

    Ok(())
}
