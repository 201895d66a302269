//! # sample-reconcile
//!
//! A library for linking sample identifiers between two data sources whose
//! naming has drifted apart.
//!
//! Genotype tables and VCF files describing the same samples often disagree on
//! spelling: `Sample_01` in one, `sample01` or `SAMPLE-1` in the other, plus the
//! occasional typo. `sample-reconcile` takes the names that failed to match
//! exactly and proposes, for each one, the most plausible counterpart among
//! the names left over on the other side.
//!
//! ## Features
//!
//! - **Case-insensitive matching**: `SAMPLE_A` links to `sample_a` (confidence 1.00)
//! - **Punctuation-insensitive matching**: `Sample_01` links to `sample01` (confidence 0.95)
//! - **Fuzzy matching**: Ratcliff/Obershelp similarity with a configurable cutoff
//! - **Deterministic output**: Results follow input order; ties go to the earliest candidate
//!
//! Every suggestion is advisory. No match is applied automatically, and a
//! candidate may be suggested for more than one name.
//!
//! ## Example
//!
//! ```rust
//! use sample_reconcile::{match_names, MatchReason, MatchingConfig, NameList};
//!
//! let bad: NameList = ["Sample_01", "SAMPLE_A", "Smith", "Zzqx"].into_iter().collect();
//! let candidates: NameList = ["sample01", "sample_a", "Smyth"].into_iter().collect();
//!
//! let records = match_names(&bad, &candidates, MatchingConfig::default());
//!
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[0].reason, MatchReason::CleanedPunctuation);
//! assert_eq!(records[1].reason, MatchReason::ExactCaseInsensitive);
//! assert_eq!(records[2].reason, MatchReason::Fuzzy);
//! assert_eq!(records[2].confidence_label(), "0.80");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Name lists and match records
//! - [`matching`]: The tier cascade and similarity scoring
//! - [`parsing`]: Loading name lists from text files
//! - [`report`]: Writing the CSV match report
//! - [`config`]: Run configuration
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod report;

// Re-export commonly used types for convenience
pub use crate::config::RunConfig;
pub use crate::core::names::NameList;
pub use crate::core::types::*;
pub use crate::matching::engine::{match_names, MatchingConfig, MatchingEngine};
