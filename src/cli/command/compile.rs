//! Placeholder compilation commands.
//!
//! Each command prepares its output directory and reports the stages it will
//! run. Nothing is fetched or written yet.

use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
/// The kinds of data the tool compiles.
pub enum Compilation {
    Swe,
    Prism,
    ClimateIndex,
    UkrInflow,
}

impl Compilation {
    /// Name used at the start of a sentence.
    pub fn title(&self) -> &'static str {
        match self {
            Compilation::Swe => "SWE",
            Compilation::Prism => "PRISM",
            Compilation::ClimateIndex => "Climate index",
            Compilation::UkrInflow => "UKR inflow",
        }
    }

    /// Name used mid-sentence.
    pub fn noun(&self) -> &'static str {
        match self {
            Compilation::ClimateIndex => "climate index",
            _ => self.title(),
        }
    }

    /// Fetch, process and save messages, in order.
    pub fn stages(&self) -> [&'static str; 3] {
        match self {
            Compilation::Swe => [
                "Fetching SWE data from NWIS...",
                "Processing snow measurement stations...",
                "Saving SWE data...",
            ],
            Compilation::Prism => [
                "Fetching PRISM climate data...",
                "Processing temperature and precipitation...",
                "Saving PRISM data...",
            ],
            Compilation::ClimateIndex => [
                "Fetching climate index data...",
                "Processing PDO, ENSO, and other indices...",
                "Saving climate index data...",
            ],
            Compilation::UkrInflow => [
                "Fetching UKR inflow data from NWIS...",
                "Processing streamflow stations...",
                "Saving inflow data...",
            ],
        }
    }
}

/// Ensures `output` exists and writes the progress text for `kind` to `out`.
pub fn compile(kind: Compilation, output: &Path, verbose: bool, out: &mut impl Write) -> Result<()> {
    if verbose {
        writeln!(out, "Starting {} data compilation...", kind.noun())?;
        writeln!(out, "Output directory: {}", output.display())?;
    }

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory `{}`", output.display()))?;
    info!("Output directory ready: {}", output.display());

    for stage in kind.stages() {
        writeln!(out, "{}", stage)?;
    }

    if verbose {
        writeln!(out, "{} data compilation completed!", kind.title())?;
    } else {
        writeln!(out, "{} data compiled successfully!", kind.title())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const ALL: [Compilation; 4] = [
        Compilation::Swe,
        Compilation::Prism,
        Compilation::ClimateIndex,
        Compilation::UkrInflow,
    ];

    fn run(kind: Compilation, output: &Path, verbose: bool) -> String {
        let mut out = Vec::new();
        compile(kind, output, verbose, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn should_create_fresh_output_directory() {
        for kind in ALL {
            let tmp_dir = TempDir::new().unwrap();
            let output = tmp_dir.path().join("nested").join("output");
            assert!(!output.exists());

            run(kind, &output, false);

            assert!(output.is_dir(), "{:?} did not create its directory", kind);
        }
    }

    #[test]
    fn should_accept_existing_output_directory() {
        for kind in ALL {
            let tmp_dir = TempDir::new().unwrap();

            run(kind, tmp_dir.path(), false);

            assert!(tmp_dir.path().is_dir());
        }
    }

    #[test]
    fn should_fail_when_output_is_a_file() {
        let tmp_dir = TempDir::new().unwrap();
        let output = tmp_dir.path().join("output");
        fs::write(&output, "not a directory").unwrap();

        let mut out = Vec::new();
        let e = compile(Compilation::Swe, &output, false, &mut out).unwrap_err();
        assert!(e.to_string().starts_with("Failed to create output directory"));
    }

    #[test]
    fn should_print_quiet_progress() {
        let tmp_dir = TempDir::new().unwrap();
        let text = run(Compilation::Swe, tmp_dir.path(), false);

        assert_eq!(
            text,
            "Fetching SWE data from NWIS...\n\
             Processing snow measurement stations...\n\
             Saving SWE data...\n\
             SWE data compiled successfully!\n"
        );
    }

    #[test]
    fn should_print_verbose_progress() {
        let tmp_dir = TempDir::new().unwrap();
        let text = run(Compilation::ClimateIndex, tmp_dir.path(), true);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Starting climate index data compilation...");
        assert_eq!(lines[1], format!("Output directory: {}", tmp_dir.path().display()));
        assert_eq!(lines[3], "Processing PDO, ENSO, and other indices...");
        assert_eq!(lines[5], "Climate index data compilation completed!");
        assert_eq!(lines.len(), 6);
    }
}
