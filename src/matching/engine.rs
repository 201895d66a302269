use tracing::{debug, warn};

use crate::core::names::NameList;
use crate::core::types::{MatchReason, MatchRecord};
use crate::matching::cleaning::CleaningRule;
use crate::matching::similarity;

/// Default minimum similarity ratio for a fuzzy match
pub const DEFAULT_FUZZY_CUTOFF: f64 = 0.6;

/// Confidence reported for a case-insensitive exact match
pub const EXACT_CONFIDENCE: f64 = 1.0;

/// Confidence reported for a match after cleaning
pub const CLEANED_CONFIDENCE: f64 = 0.95;

/// Configuration for the matching engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Fuzzy matches with a ratio strictly below this are discarded
    pub fuzzy_cutoff: f64,
    /// Normalization used by the cleaned-match tier
    pub cleaning: CleaningRule,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fuzzy_cutoff: DEFAULT_FUZZY_CUTOFF,
            cleaning: CleaningRule::default(),
        }
    }
}

/// A tier's answer: which candidate, and how sure
#[derive(Debug, Clone, Copy, PartialEq)]
struct Hit {
    index: usize,
    reason: MatchReason,
    confidence: f64,
}

type Tier = fn(&MatchingEngine<'_>, &str) -> Option<Hit>;

/// Tiers in order of decreasing confidence; the first hit wins.
const TIERS: [Tier; 3] = [exact_tier, cleaned_tier, fuzzy_tier];

/// Links bad names to candidates through the tier cascade
///
/// Candidates are borrowed read-only; their lower-cased and cleaned forms are
/// computed once up front.
pub struct MatchingEngine<'a> {
    candidates: &'a NameList,
    config: MatchingConfig,
    lowered: Vec<String>,
    cleaned: Vec<String>,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(candidates: &'a NameList) -> Self {
        Self::with_config(candidates, MatchingConfig::default())
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(candidates: &'a NameList, config: MatchingConfig) -> Self {
        if candidates.is_empty() {
            warn!("Candidate list is empty; no names can be matched");
        }

        let lowered = candidates.iter().map(str::to_lowercase).collect();
        let cleaned = candidates.iter().map(|c| config.cleaning.clean(c)).collect();

        Self {
            candidates,
            config,
            lowered,
            cleaned,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Match every bad name, in input order.
    ///
    /// Each bad name yields at most one record; names with no qualifying
    /// candidate are left out. A candidate may be claimed by any number of
    /// bad names.
    #[must_use]
    pub fn match_all(&self, bad_names: &NameList) -> Vec<MatchRecord> {
        bad_names.iter().filter_map(|bad| self.match_one(bad)).collect()
    }

    /// Run the cascade for a single bad name
    #[must_use]
    pub fn match_one(&self, bad: &str) -> Option<MatchRecord> {
        let hit = TIERS.iter().find_map(|tier| tier(self, bad));

        let Some(hit) = hit else {
            debug!(bad, "No match");
            return None;
        };

        let target = self.candidates.get(hit.index)?;
        debug!(
            bad,
            candidate = target,
            reason = hit.reason.as_str(),
            confidence = hit.confidence,
            "Matched"
        );

        Some(MatchRecord::new(bad, target, hit.reason, hit.confidence))
    }
}

/// Match every bad name against the candidates with the given configuration.
///
/// Convenience wrapper around [`MatchingEngine::match_all`].
#[must_use]
pub fn match_names(
    bad_names: &NameList,
    candidates: &NameList,
    config: MatchingConfig,
) -> Vec<MatchRecord> {
    MatchingEngine::with_config(candidates, config).match_all(bad_names)
}

fn exact_tier(engine: &MatchingEngine<'_>, bad: &str) -> Option<Hit> {
    let bad = bad.to_lowercase();
    let index = engine.lowered.iter().position(|c| *c == bad)?;
    Some(Hit {
        index,
        reason: MatchReason::ExactCaseInsensitive,
        confidence: EXACT_CONFIDENCE,
    })
}

fn cleaned_tier(engine: &MatchingEngine<'_>, bad: &str) -> Option<Hit> {
    let bad = engine.config.cleaning.clean(bad);
    let index = engine.cleaned.iter().position(|c| *c == bad)?;
    Some(Hit {
        index,
        reason: MatchReason::CleanedPunctuation,
        confidence: CLEANED_CONFIDENCE,
    })
}

fn fuzzy_tier(engine: &MatchingEngine<'_>, bad: &str) -> Option<Hit> {
    let cutoff = engine.config.fuzzy_cutoff;
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in engine.candidates.iter().enumerate() {
        // A candidate can only replace the current best by beating it strictly
        let cannot_win =
            |bound: f64| bound < cutoff || best.is_some_and(|(_, score)| bound <= score);

        if cannot_win(similarity::length_bound(bad, candidate))
            || cannot_win(similarity::multiset_bound(bad, candidate))
        {
            continue;
        }

        let score = similarity::ratio(bad, candidate);
        if !cannot_win(score) {
            best = Some((index, score));
        }
    }

    best.map(|(index, confidence)| Hit {
        index,
        reason: MatchReason::Fuzzy,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> NameList {
        items.iter().copied().collect()
    }

    fn match_single(bad: &str, candidates: &[&str]) -> Option<MatchRecord> {
        let candidates = names(candidates);
        MatchingEngine::new(&candidates).match_one(bad)
    }

    #[test]
    fn test_exact_case_insensitive() {
        let record = match_single("SAMPLE_A", &["sample_a"]).unwrap();
        assert_eq!(record.target, "sample_a");
        assert_eq!(record.reason, MatchReason::ExactCaseInsensitive);
        assert_eq!(record.confidence_label(), "1.00");
    }

    #[test]
    fn test_cleaned_match() {
        let record = match_single("Sample_01", &["sample01", "Sample-02"]).unwrap();
        assert_eq!(record.source, "Sample_01");
        assert_eq!(record.target, "sample01");
        assert_eq!(record.reason, MatchReason::CleanedPunctuation);
        assert_eq!(record.confidence_label(), "0.95");
    }

    #[test]
    fn test_fuzzy_match() {
        let record = match_single("Smith", &["Smyth", "Jones"]).unwrap();
        assert_eq!(record.target, "Smyth");
        assert_eq!(record.reason, MatchReason::Fuzzy);
        assert_eq!(record.confidence_label(), "0.80");
    }

    #[test]
    fn test_below_cutoff_is_unmatched() {
        assert!(match_single("Zzqx", &["Abcdef"]).is_none());
    }

    #[test]
    fn test_empty_candidates() {
        assert!(match_single("anything", &[]).is_none());
    }

    #[test]
    fn test_exact_beats_earlier_cleaned_candidate() {
        // "sample01" is an earlier cleaned match, but the exact tier runs first
        let record = match_single("Sample-01", &["sample01", "SAMPLE-01"]).unwrap();
        assert_eq!(record.target, "SAMPLE-01");
        assert_eq!(record.reason, MatchReason::ExactCaseInsensitive);
    }

    #[test]
    fn test_cleaned_beats_better_fuzzy_candidate() {
        let record = match_single("ab_c", &["ab_d", "A.B.C"]).unwrap();
        assert_eq!(record.target, "A.B.C");
        assert_eq!(record.reason, MatchReason::CleanedPunctuation);
    }

    #[test]
    fn test_first_candidate_wins_ties_in_every_tier() {
        let record = match_single("abc", &["ABC", "abc"]).unwrap();
        assert_eq!(record.target, "ABC");

        let record = match_single("a_b", &["a-b-", "a.b"]).unwrap();
        assert_eq!(record.target, "a-b-");

        // Both candidates score 0.75 against "abcd"
        let record = match_single("abcd", &["abcx", "abcy"]).unwrap();
        assert_eq!(record.target, "abcx");
        assert_eq!(record.reason, MatchReason::Fuzzy);
    }

    #[test]
    fn test_fuzzy_picks_highest_ratio() {
        let record = match_single("Smith", &["Smit", "Smithe", "Smyth"]).unwrap();
        // "Smit" = 8/9, "Smithe" = 10/11
        assert_eq!(record.target, "Smithe");
    }

    #[test]
    fn test_fuzzy_cutoff_is_inclusive() {
        // ratio("abc", "abd") = 4/6, ratio("ab", "ax") = 0.5
        let candidates = names(&["abd"]);
        let config = MatchingConfig {
            fuzzy_cutoff: 4.0 / 6.0,
            ..MatchingConfig::default()
        };
        let engine = MatchingEngine::with_config(&candidates, config);
        assert!(engine.match_one("abc").is_some());
        assert!(match_single("ab", &["ax"]).is_none());
    }

    #[test]
    fn test_candidates_can_be_claimed_repeatedly() {
        let bad = names(&["SAMPLE", "sample_", "Sampel"]);
        let candidates = names(&["sample"]);
        let records = match_names(&bad, &candidates, MatchingConfig::default());

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.target == "sample"));
        assert_eq!(records[0].reason, MatchReason::ExactCaseInsensitive);
        assert_eq!(records[1].reason, MatchReason::CleanedPunctuation);
        assert_eq!(records[2].reason, MatchReason::Fuzzy);
    }

    #[test]
    fn test_output_order_follows_bad_names() {
        let bad = names(&["zzzz", "B", "A", "nothing-like-it"]);
        let candidates = names(&["a", "b"]);
        let records = match_names(&bad, &candidates, MatchingConfig::default());

        let sources: Vec<&str> = records.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["B", "A"]);
        assert!(records.len() <= bad.len());
    }

    #[test]
    fn test_duplicate_bad_names_each_get_a_record() {
        let bad = names(&["S1", "S1"]);
        let candidates = names(&["s1"]);
        let records = match_names(&bad, &candidates, MatchingConfig::default());
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_deterministic() {
        let bad = names(&["Smith", "Sample_01", "SAMPLE_A", "Zzqx"]);
        let candidates = names(&["Smyth", "sample01", "sample_a", "Jones"]);
        let first = match_names(&bad, &candidates, MatchingConfig::default());
        let second = match_names(&bad, &candidates, MatchingConfig::default());
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_custom_cleaning_rule() {
        let candidates = names(&["sample.01"]);
        let config = MatchingConfig {
            cleaning: CleaningRule::new("_").unwrap(),
            ..MatchingConfig::default()
        };
        let engine = MatchingEngine::with_config(&candidates, config);

        // "_" is stripped but "." is kept, so these no longer clean equal
        let record = engine.match_one("sample_01").unwrap();
        assert_eq!(record.reason, MatchReason::Fuzzy);
    }
}
