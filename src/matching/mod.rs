//! Matching engine and similarity scoring.
//!
//! This module provides the core matching functionality:
//!
//! - [`MatchingEngine`]: Runs the tier cascade for each bad name
//! - [`CleaningRule`]: The normalization used by the cleaned tier
//! - [`similarity::ratio`]: Ratcliff/Obershelp similarity used by the fuzzy tier
//!
//! ## Matching Algorithm
//!
//! Each bad name is tried against the full candidate list with three tiers,
//! in order. The first tier that hits decides the match:
//!
//! 1. **Exact, case-insensitive**: lower-cased strings are equal (confidence 1.00)
//! 2. **Cleaned**: strings are equal after the cleaning rule (confidence 0.95)
//! 3. **Fuzzy**: the highest similarity ratio, if it reaches the cutoff
//!    (confidence = the ratio)
//!
//! Within a tier, the earliest candidate wins ties. Candidates are never
//! consumed, so two bad names may be linked to the same candidate.
//!
//! ## Example
//!
//! ```
//! use sample_reconcile::matching::engine::MatchingEngine;
//! use sample_reconcile::{MatchReason, NameList};
//!
//! let candidates: NameList = ["sample01", "Sample-02"].into_iter().collect();
//! let engine = MatchingEngine::new(&candidates);
//!
//! let record = engine.match_one("Sample_01").unwrap();
//! assert_eq!(record.target, "sample01");
//! assert_eq!(record.reason, MatchReason::CleanedPunctuation);
//! ```
//!
//! [`MatchingEngine`]: engine::MatchingEngine
//! [`CleaningRule`]: cleaning::CleaningRule

pub mod cleaning;
pub mod engine;
pub mod similarity;
