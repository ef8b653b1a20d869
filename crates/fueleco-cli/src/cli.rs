//! CLI definition using clap

use clap::{Parser, Subcommand};
use fueleco_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fueleco")]
#[command(version)]
#[command(about = "Browse vehicle fuel economy by year, model and trim")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vehicle dataset (JSON). Uses config value, then the bundled dataset.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List model years
    Years,

    /// List models offered in a year
    Models {
        year: i32,
    },

    /// List trims of a model with model-wide averages
    Trims {
        year: i32,
        model: String,
    },

    /// Show every configuration of a trim
    Vehicles {
        year: i32,
        model: String,

        /// Trim name; omit for the base trim
        trim: Option<String>,
    },

    /// Show catalog overview counts
    Summary,

    /// Export the vehicles under a year, model or trim to CSV
    Export {
        year: i32,
        model: Option<String>,
        trim: Option<String>,

        /// Output CSV file path
        #[arg(long, short = 'o')]
        output: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set dataset file
        #[arg(long)]
        set_dataset: Option<PathBuf>,

        /// Go back to the bundled dataset
        #[arg(long)]
        clear_dataset: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set fractional digits for averages
        #[arg(long)]
        set_decimals: Option<usize>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicles_trim_is_optional() {
        let cli = Cli::try_parse_from(["fueleco", "vehicles", "2024", "Prius"]).unwrap();
        match cli.command {
            Commands::Vehicles { year, model, trim } => {
                assert_eq!(year, 2024);
                assert_eq!(model, "Prius");
                assert_eq!(trim, None);
            }
            _ => panic!("expected vehicles command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["fueleco", "trims", "2024", "Prius", "-f", "json", "-v"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
    }

    #[test]
    fn test_export_optional_levels() {
        let cli =
            Cli::try_parse_from(["fueleco", "export", "2024", "Prius", "-o", "out.csv"]).unwrap();
        match cli.command {
            Commands::Export {
                year,
                model,
                trim,
                output,
            } => {
                assert_eq!(year, 2024);
                assert_eq!(model.as_deref(), Some("Prius"));
                assert_eq!(trim, None);
                assert_eq!(output, PathBuf::from("out.csv"));
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_year_must_be_numeric() {
        assert!(Cli::try_parse_from(["fueleco", "models", "twenty"]).is_err());
    }
}
