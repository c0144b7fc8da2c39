use std::io;

use anyhow::{Error, Result};
use clap::Parser;
use rkrmnwis::{
    cli::{
        command::{self, Compilation},
        Cli, Commands,
    },
    datasets::DataLoader,
};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    setup_logging(cli.command.is_verbose());

    let loader = DataLoader::bundled();
    let mut stdout = io::stdout().lock();

    let result = match &cli.command {
        Commands::Dataset {
            dataset,
            destination,
        } => command::dataset(&loader, dataset, destination, &mut stdout),
        Commands::Swe(args) => command::compile(Compilation::Swe, &args.output, args.verbose, &mut stdout),
        Commands::Prism(args) => command::compile(Compilation::Prism, &args.output, args.verbose, &mut stdout),
        Commands::ClimateIndx(args) => {
            command::compile(Compilation::ClimateIndex, &args.output, args.verbose, &mut stdout)
        }
        Commands::UkrInflow(args) => {
            command::compile(Compilation::UkrInflow, &args.output, args.verbose, &mut stdout)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output.
fn setup_logging(verbose: bool) {
    let log_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rkrmnwis={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}
