use serde::Serialize;

use crate::core::types::{Confidence, MatchReason, MatchRecord};

/// Counts describing one matching run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub bad_names: usize,
    pub candidates: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub exact_case_insensitive: usize,
    pub cleaned_punctuation: usize,
    pub fuzzy: usize,
    /// Fuzzy matches in the `Low` confidence band
    pub low_confidence: usize,
}

impl MatchSummary {
    #[must_use]
    pub fn new(bad_names: usize, candidates: usize, records: &[MatchRecord]) -> Self {
        let count = |reason: MatchReason| records.iter().filter(|r| r.reason == reason).count();

        Self {
            bad_names,
            candidates,
            matched: records.len(),
            unmatched: bad_names.saturating_sub(records.len()),
            exact_case_insensitive: count(MatchReason::ExactCaseInsensitive),
            cleaned_punctuation: count(MatchReason::CleanedPunctuation),
            fuzzy: count(MatchReason::Fuzzy),
            low_confidence: records
                .iter()
                .filter(|r| r.confidence_band() == Confidence::Low)
                .count(),
        }
    }

    /// Number of records produced by the given tier
    #[must_use]
    pub fn count_for(&self, reason: MatchReason) -> usize {
        match reason {
            MatchReason::ExactCaseInsensitive => self.exact_case_insensitive,
            MatchReason::CleanedPunctuation => self.cleaned_punctuation,
            MatchReason::Fuzzy => self.fuzzy,
        }
    }
}
