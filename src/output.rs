//! GitHub Actions output surface
//!
//! This module provides:
//! - The `version` output, appended to the file named by GITHUB_OUTPUT
//!   (with the legacy `::set-output` workflow command as fallback)
//! - `::error::` annotations for every failure message
//! - A short colored human-readable summary

use crate::orchestrator::RunOutcome;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Reporter emitting run results in the GitHub Actions format
pub struct ActionReporter {
    /// Target of the `version=` output line; legacy workflow command
    /// when absent
    output_file: Option<PathBuf>,
    /// Suppress informational output
    quiet: bool,
}

impl ActionReporter {
    /// Create a reporter wired to the GITHUB_OUTPUT file from the environment
    pub fn from_env(quiet: bool) -> Self {
        Self {
            output_file: std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
            quiet,
        }
    }

    /// Create a reporter with an explicit output file (for testing)
    pub fn with_output_file(output_file: Option<PathBuf>, quiet: bool) -> Self {
        Self { output_file, quiet }
    }

    /// Emit the full outcome: notices, the version output and failure
    /// annotations
    pub fn report(&self, outcome: &RunOutcome, out: &mut impl Write) -> io::Result<()> {
        if !self.quiet {
            for notice in &outcome.notices {
                writeln!(out, "{}", notice)?;
            }
        }

        if let Some(version) = &outcome.version {
            self.set_output("version", version, out)?;
            if !self.quiet {
                writeln!(out, "{} version: {}", "✓".green(), version.bold())?;
            }
        }

        for failure in &outcome.failures {
            writeln!(out, "::error::{}", failure)?;
            if !self.quiet {
                writeln!(out, "{} {}", "✗".red(), failure)?;
            }
        }

        Ok(())
    }

    /// Set a named step output
    fn set_output(&self, name: &str, value: &str, out: &mut impl Write) -> io::Result<()> {
        match &self.output_file {
            Some(path) => {
                let mut file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)?;
                writeln!(file, "{}={}", name, value)
            }
            None => writeln!(out, "::set-output name={}::{}", name, value),
        }
    }
}
