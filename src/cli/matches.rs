use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{MatchingOptions, OutputFormat};
use crate::config::{RunConfig, DEFAULT_BAD_NAMES, DEFAULT_OUTPUT, DEFAULT_VALID_NAMES};
use crate::core::types::{MatchReason, MatchRecord};
use crate::matching::engine::MatchingEngine;
use crate::parsing::names::load_names;
use crate::report::summary::MatchSummary;
use crate::report::writer::{write_records_tsv, write_report};

#[derive(Args)]
pub struct MatchArgs {
    /// Names lacking a counterpart (one per line, first line is a header)
    #[arg(long = "bad", default_value = DEFAULT_BAD_NAMES)]
    pub input_bad_names: PathBuf,

    /// Candidate names to link to (one per line, first line is a header)
    #[arg(long = "candidates", default_value = DEFAULT_VALID_NAMES)]
    pub input_valid_names: PathBuf,

    /// Destination for the CSV match report
    #[arg(short, long = "output", default_value = DEFAULT_OUTPUT)]
    pub output_file: PathBuf,

    #[command(flatten)]
    pub matching: MatchingOptions,
}

impl MatchArgs {
    /// Resolve the arguments into a run configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the matching options are invalid.
    pub fn to_config(&self) -> anyhow::Result<RunConfig> {
        Ok(RunConfig {
            input_bad_names: self.input_bad_names.clone(),
            input_valid_names: self.input_valid_names.clone(),
            output_file: self.output_file.clone(),
            matching: self.matching.to_config()?,
        })
    }
}

/// Execute the match command
///
/// # Errors
///
/// Returns an error if an input cannot be read or the report cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: MatchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.to_config()?;

    if verbose {
        eprintln!(
            "Fuzzy cutoff: {:.2}, strip pattern: {}",
            config.matching.fuzzy_cutoff,
            config.matching.cleaning.pattern()
        );
    }

    execute(&config, format)?;
    Ok(())
}

/// Load both name lists, match them, and write the report.
///
/// Progress is printed to stdout in text mode. The CSV report is written to
/// `config.output_file` in every format.
///
/// # Errors
///
/// Returns an error if either input file cannot be read or the report cannot
/// be written. Nothing is written when loading fails.
pub fn execute(config: &RunConfig, format: OutputFormat) -> anyhow::Result<MatchSummary> {
    let text = matches!(format, OutputFormat::Text);

    if text {
        println!("Loading files...");
    }

    let candidates = load_names(&config.input_valid_names).with_context(|| {
        format!(
            "Failed to read candidate names from {}",
            config.input_valid_names.display()
        )
    })?;
    let bad_names = load_names(&config.input_bad_names).with_context(|| {
        format!(
            "Failed to read unmatched names from {}",
            config.input_bad_names.display()
        )
    })?;

    if text {
        println!(
            "Comparing {} unmatched samples against {} available candidates...",
            bad_names.len(),
            candidates.len()
        );
    }

    let engine = MatchingEngine::with_config(&candidates, config.matching.clone());
    let records = engine.match_all(&bad_names);

    write_report(&config.output_file, &records).with_context(|| {
        format!(
            "Failed to write report to {}",
            config.output_file.display()
        )
    })?;

    let summary = MatchSummary::new(bad_names.len(), candidates.len(), &records);

    match format {
        OutputFormat::Text => print_text_summary(config, &summary),
        OutputFormat::Json => print_json_summary(config, &summary, &records)?,
        OutputFormat::Tsv => write_records_tsv(std::io::stdout().lock(), &records)?,
    }

    Ok(summary)
}

fn print_text_summary(config: &RunConfig, summary: &MatchSummary) {
    println!("{}", "-".repeat(48));
    println!("Done! Found {} potential matches.", summary.matched);
    for reason in MatchReason::ALL {
        println!(
            "  {}: {}",
            reason.description(),
            summary.count_for(reason)
        );
    }
    if summary.low_confidence > 0 {
        println!("  ({} with low confidence)", summary.low_confidence);
    }
    println!("  No match: {}", summary.unmatched);
    println!(
        "Please review '{}' before applying changes.",
        config.output_file.display()
    );
}

fn print_json_summary(
    config: &RunConfig,
    summary: &MatchSummary,
    records: &[MatchRecord],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input_bad_names": config.input_bad_names.display().to_string(),
        "input_valid_names": config.input_valid_names.display().to_string(),
        "output_file": config.output_file.display().to_string(),
        "fuzzy_cutoff": config.matching.fuzzy_cutoff,
        "summary": summary,
        "records": records,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
