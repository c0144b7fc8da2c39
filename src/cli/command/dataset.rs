//! Print a named dataset.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use tracing::warn;

use crate::{
    cli::create_spinner,
    datasets::{DataLoader, Dataset},
};

use super::STDOUT;

/// Loads `name` and writes it to `out` when `destination` is stdout.
///
/// An unknown name is reported on `out` and is not an error.
pub fn dataset(loader: &DataLoader, name: &str, destination: &str, out: &mut impl Write) -> Result<()> {
    let dataset = Dataset::from_name(name);

    if let Dataset::Unknown(_) = dataset {
        writeln!(out, "{}", format!("no dataset was found for {}", name).red())?;
        writeln!(out, "Available datasets: {}", available_names())?;
        return Ok(());
    }

    let bar = create_spinner(format!("Loading {}...", dataset.name()));
    let loaded = dataset.load(loader);
    bar.finish_and_clear();

    let Some(table) = loaded.transpose()? else {
        return Ok(());
    };

    if table.is_empty() {
        warn!("Dataset `{}` has no rows", dataset.name());
    }

    if destination == STDOUT {
        writeln!(out, "{}", table)?;
    } else {
        warn!(
            "Destination `{}` is not supported; only `{}` is",
            destination, STDOUT
        );
    }

    Ok(())
}

fn available_names() -> String {
    Dataset::KNOWN
        .iter()
        .map(|d| d.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str, destination: &str) -> String {
        let loader = DataLoader::bundled();
        let mut out = Vec::new();
        dataset(&loader, name, destination, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn should_print_swe_stations() {
        let text = run("swe_stations", "stdout");

        assert!(!text.trim().is_empty());
        assert!(text.contains("station_triplet"));
        assert!(text.contains("Annie Springs"));
    }

    #[test]
    fn should_report_unknown_dataset() {
        let text = run("not_a_real_dataset", "stdout");

        assert!(text.contains("no dataset was found for not_a_real_dataset"));
        assert!(text.contains("Available datasets: swe_stations"));
    }

    #[test]
    fn should_print_nothing_for_other_destinations() {
        let text = run("swe_stations", "stations.csv");
        assert!(text.is_empty());
    }

    #[test]
    fn should_reuse_loaded_table() {
        let loader = DataLoader::bundled();
        let mut out = Vec::new();

        dataset(&loader, "swe_stations", "stdout", &mut out).unwrap();
        assert!(loader.is_cached("station_triplets.csv"));

        let first = String::from_utf8(std::mem::take(&mut out)).unwrap();
        dataset(&loader, "swe_stations", "stdout", &mut out).unwrap();
        assert_eq!(first, String::from_utf8(out).unwrap());
    }
}
