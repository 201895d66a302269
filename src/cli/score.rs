//! Score command - show how one pair of names fares in each tier.
//!
//! Useful for understanding why a suggestion was (or was not) made, or for
//! choosing a fuzzy cutoff.

use clap::Args;

use crate::cli::{MatchingOptions, OutputFormat};
use crate::core::names::NameList;
use crate::core::types::MatchRecord;
use crate::matching::engine::{MatchingConfig, MatchingEngine};
use crate::matching::similarity;

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Name needing resolution
    #[arg(required = true)]
    pub name: String,

    /// Candidate to compare it with
    #[arg(required = true)]
    pub candidate: String,

    #[command(flatten)]
    pub matching: MatchingOptions,
}

/// Per-tier view of a single comparison
struct PairScore {
    lowered: (String, String),
    cleaned: (String, String),
    ratio: f64,
    verdict: Option<MatchRecord>,
}

impl PairScore {
    fn compute(name: &str, candidate: &str, config: MatchingConfig) -> Self {
        let lowered = (name.to_lowercase(), candidate.to_lowercase());
        let cleaned = (config.cleaning.clean(name), config.cleaning.clean(candidate));
        let ratio = similarity::ratio(name, candidate);

        let candidates = NameList::new(vec![candidate.to_string()]);
        let verdict = MatchingEngine::with_config(&candidates, config).match_one(name);

        Self {
            lowered,
            cleaned,
            ratio,
            verdict,
        }
    }
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if the matching options are invalid.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.matching.to_config()?;
    let cutoff = config.fuzzy_cutoff;

    if verbose {
        eprintln!(
            "Length bound: {:.4}, multiset bound: {:.4}",
            similarity::length_bound(&args.name, &args.candidate),
            similarity::multiset_bound(&args.name, &args.candidate),
        );
    }

    let score = PairScore::compute(&args.name, &args.candidate, config);

    match format {
        OutputFormat::Text => print_text_score(&args, &score, cutoff),
        OutputFormat::Json => print_json_score(&args, &score, cutoff)?,
        OutputFormat::Tsv => print_tsv_score(&args, &score),
    }

    Ok(())
}

fn print_text_score(args: &ScoreArgs, score: &PairScore, cutoff: f64) {
    println!("Pair Comparison");
    println!("{}", "=".repeat(60));

    println!("\nName:      {}", args.name);
    println!("Candidate: {}", args.candidate);

    println!("\nTiers:");
    println!(
        "  Lower-cased: {} / {} ({})",
        score.lowered.0,
        score.lowered.1,
        equal_label(&score.lowered)
    );
    println!(
        "  Cleaned:     {} / {} ({})",
        score.cleaned.0,
        score.cleaned.1,
        equal_label(&score.cleaned)
    );
    println!(
        "  Similarity:  {:.4} (cutoff {:.2})",
        score.ratio, cutoff
    );

    match &score.verdict {
        Some(record) => println!(
            "\nResult: {} ({}), confidence {}",
            record.reason,
            record.reason.description(),
            record.confidence_label()
        ),
        None => println!("\nResult: no match"),
    }
}

fn equal_label(pair: &(String, String)) -> &'static str {
    if pair.0 == pair.1 {
        "equal"
    } else {
        "different"
    }
}

fn print_json_score(args: &ScoreArgs, score: &PairScore, cutoff: f64) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "name": args.name,
        "candidate": args.candidate,
        "lowered": [score.lowered.0, score.lowered.1],
        "cleaned": [score.cleaned.0, score.cleaned.1],
        "ratio": score.ratio,
        "cutoff": cutoff,
        "match": score.verdict,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_score(args: &ScoreArgs, score: &PairScore) {
    println!("name\tcandidate\tratio\treason\tconfidence");
    let (reason, confidence) = match &score.verdict {
        Some(record) => (record.reason.as_str(), record.confidence_label()),
        None => ("none", String::new()),
    };
    println!(
        "{}\t{}\t{:.4}\t{}\t{}",
        args.name, args.candidate, score.ratio, reason, confidence
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::MatchReason;

    #[test]
    fn test_pair_score_cleaned() {
        let score = PairScore::compute("Sample_01", "sample01", MatchingConfig::default());
        assert_eq!(score.lowered.0, "sample_01");
        assert_eq!(score.cleaned, ("sample01".to_string(), "sample01".to_string()));
        assert_eq!(
            score.verdict.map(|r| r.reason),
            Some(MatchReason::CleanedPunctuation)
        );
    }

    #[test]
    fn test_pair_score_no_match() {
        let score = PairScore::compute("Zzqx", "Abcdef", MatchingConfig::default());
        assert!(score.ratio < 0.6);
        assert!(score.verdict.is_none());
    }
}
