use serde::{Deserialize, Serialize};

/// Which tier of the cascade produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchReason {
    /// Names are equal once both are lower-cased
    ExactCaseInsensitive,
    /// Names are equal once the cleaning rule is applied to both
    CleanedPunctuation,
    /// Best similarity ratio at or above the cutoff
    Fuzzy,
}

impl MatchReason {
    /// All reasons in cascade order
    pub const ALL: [MatchReason; 3] = [
        MatchReason::ExactCaseInsensitive,
        MatchReason::CleanedPunctuation,
        MatchReason::Fuzzy,
    ];

    /// Tag written to the `Reason` column of the report
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExactCaseInsensitive => "ExactCaseInsensitive",
            Self::CleanedPunctuation => "CleanedPunctuation",
            Self::Fuzzy => "Fuzzy",
        }
    }

    /// Human-readable explanation for terminal output
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::ExactCaseInsensitive => "Case Difference",
            Self::CleanedPunctuation => "Format Difference (e.g. _ or -)",
            Self::Fuzzy => "Fuzzy Match",
        }
    }
}

impl std::fmt::Display for MatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single suggested correspondence between a bad name and a candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The unresolved name, as it appeared in the input
    pub source: String,

    /// The candidate it was linked to, as it appeared in the input
    pub target: String,

    pub reason: MatchReason,

    /// Score in `[0, 1]`; unrounded, the reporter formats it to 2 decimals
    pub confidence: f64,
}

impl MatchRecord {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        reason: MatchReason,
        confidence: f64,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            reason,
            confidence,
        }
    }

    /// Confidence as reported: fixed-point with exactly 2 decimal places
    #[must_use]
    pub fn confidence_label(&self) -> String {
        format!("{:.2}", self.confidence)
    }

    #[must_use]
    pub fn confidence_band(&self) -> Confidence {
        Confidence::from_score(self.confidence)
    }
}

/// Coarse confidence band for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
    Exact,
}

impl Confidence {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 1.0 {
            Self::Exact
        } else if score >= 0.95 {
            Self::High
        } else if score >= 0.80 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_tags() {
        assert_eq!(
            MatchReason::ExactCaseInsensitive.to_string(),
            "ExactCaseInsensitive"
        );
        assert_eq!(MatchReason::CleanedPunctuation.as_str(), "CleanedPunctuation");
        assert_eq!(MatchReason::Fuzzy.description(), "Fuzzy Match");
    }

    #[test]
    fn test_confidence_label_rounds_to_two_places() {
        let record = MatchRecord::new("Smith", "Smyth", MatchReason::Fuzzy, 0.8);
        assert_eq!(record.confidence_label(), "0.80");

        let record = MatchRecord::new("a", "b", MatchReason::Fuzzy, 2.0 / 3.0);
        assert_eq!(record.confidence_label(), "0.67");
    }

    #[test]
    fn test_confidence_bands() {
        assert_eq!(Confidence::from_score(1.0), Confidence::Exact);
        assert_eq!(Confidence::from_score(0.95), Confidence::High);
        assert_eq!(Confidence::from_score(0.8), Confidence::Medium);
        assert_eq!(Confidence::from_score(0.61), Confidence::Low);
        assert!(Confidence::Exact > Confidence::Low);
    }
}
