//! Command-line interface for sample-reconcile.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **match**: Suggest a candidate for every unmatched name and write a CSV report
//! - **score**: Show how a single pair of names would be compared
//!
//! ## Usage
//!
//! ```text
//! # Use the default file names in the current directory
//! sample-reconcile match
//!
//! # Explicit inputs and output, stricter fuzzy cutoff
//! sample-reconcile match --bad NotInSNPs.csv --candidates NotInData.csv \
//!     --output Suggested_Matches.csv --cutoff 0.8
//!
//! # Machine-readable summary
//! sample-reconcile match --format json
//!
//! # Inspect one pair
//! sample-reconcile score Sample_01 sample-1
//! ```

use clap::{Parser, Subcommand};

use crate::matching::cleaning::{CleaningRule, DEFAULT_STRIP_PATTERN};
use crate::matching::engine::MatchingConfig;

pub mod matches;
pub mod score;

#[derive(Parser)]
#[command(name = "sample-reconcile")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Suggest matches between sample identifiers from two sources")]
#[command(
    long_about = "sample-reconcile links sample names from one source to the closest name in another.\n\nEach unmatched name is tried against every candidate with three tiers:\n- Exact match ignoring case (confidence 1.00)\n- Match after removing punctuation and separators (confidence 0.95)\n- Fuzzy match by similarity ratio, if above a cutoff (confidence = ratio)\n\nMatches are suggestions only: review the report before applying changes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match unmatched names against candidates and write a report
    Match(matches::MatchArgs),

    /// Compare a single pair of names
    Score(score::ScoreArgs),
}

/// Options controlling the matching tiers, shared by all commands
#[derive(clap::Args, Debug, Clone)]
pub struct MatchingOptions {
    /// Minimum similarity ratio (0.0-1.0) for a fuzzy match
    #[arg(long, default_value = "0.6", value_parser = parse_cutoff)]
    pub cutoff: f64,

    /// Regular expression for characters removed before the cleaned comparison
    #[arg(long, default_value = DEFAULT_STRIP_PATTERN)]
    pub strip_pattern: String,
}

impl MatchingOptions {
    /// Build the engine configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the strip pattern is not a valid regular expression.
    pub fn to_config(&self) -> anyhow::Result<MatchingConfig> {
        let cleaning = CleaningRule::new(&self.strip_pattern).map_err(|e| {
            anyhow::anyhow!("Invalid strip pattern '{}': {e}", self.strip_pattern)
        })?;

        Ok(MatchingConfig {
            fuzzy_cutoff: self.cutoff,
            cleaning,
        })
    }
}

fn parse_cutoff(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("cutoff must be between 0.0 and 1.0, got {value}"))
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
