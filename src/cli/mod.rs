//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use indicatif::ProgressBar;

#[derive(Parser, Debug)]
#[command(version, about, verbatim_doc_comment)]
/// NWIS data compilation tools for RKRM analysis.
///
/// Use subcommands to compile specific data types:
///
///   nwis swe --output data         # Snow Water Equivalent data
///   nwis prism --verbose           # PRISM climate data
///   nwis climate_indx              # Climate index data
///   nwis ukr_inflow --output tmp   # Upper Klamath River inflow data
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a bundled dataset
    Dataset {
        /// Name of the dataset, e.g. `swe_stations`
        dataset: String,
        /// Where to send the dataset
        #[arg(short, long, default_value = command::STDOUT)]
        destination: String,
    },
    /// Compile Snow Water Equivalent (SWE) data from NWIS stations
    Swe(CompileArgs),
    /// Compile PRISM climate data for the RKRM region
    Prism(CompileArgs),
    /// Compile climate index data (PDO, ENSO, etc.) for RKRM analysis
    #[command(name = "climate_indx")]
    ClimateIndx(CompileArgs),
    /// Compile Upper Klamath River inflow data from NWIS stations
    #[command(name = "ukr_inflow")]
    UkrInflow(CompileArgs),
}

impl Commands {
    pub fn is_verbose(&self) -> bool {
        match self {
            Commands::Dataset { .. } => false,
            Commands::Swe(args)
            | Commands::Prism(args)
            | Commands::ClimateIndx(args)
            | Commands::UkrInflow(args) => args.verbose,
        }
    }
}

#[derive(Args, Debug)]
/// Options shared by the compilation commands.
pub struct CompileArgs {
    /// Output directory for the compiled data
    #[arg(short, long, default_value = "./output")]
    pub output: PathBuf,
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_snake_case_subcommands() {
        let cli = Cli::try_parse_from(["nwis", "climate_indx", "-o", "indices", "-v"]).unwrap();
        match cli.command {
            Commands::ClimateIndx(args) => {
                assert_eq!(args.output, PathBuf::from("indices"));
                assert!(args.verbose);
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["nwis", "ukr_inflow"]).unwrap();
        assert!(matches!(cli.command, Commands::UkrInflow(_)));
    }

    #[test]
    fn should_default_output_directory() {
        let cli = Cli::try_parse_from(["nwis", "swe"]).unwrap();
        match cli.command {
            Commands::Swe(args) => {
                assert_eq!(args.output, PathBuf::from("./output"));
                assert!(!args.verbose);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn should_accept_long_flags() {
        let cli = Cli::try_parse_from(["nwis", "prism", "--output", "grids", "--verbose"]).unwrap();
        assert!(cli.command.is_verbose());
    }

    #[test]
    fn should_parse_dataset_command() {
        let cli = Cli::try_parse_from(["nwis", "dataset", "swe_stations"]).unwrap();
        match cli.command {
            Commands::Dataset {
                dataset,
                destination,
            } => {
                assert_eq!(dataset, "swe_stations");
                assert_eq!(destination, "stdout");
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["nwis", "dataset", "swe_stations", "-d", "stations.csv"]).unwrap();
        assert!(matches!(cli.command, Commands::Dataset { ref destination, .. } if destination == "stations.csv"));
    }

    #[test]
    fn should_reject_kebab_case_names() {
        assert!(Cli::try_parse_from(["nwis", "climate-indx"]).is_err());
    }
}
