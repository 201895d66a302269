use regex::Regex;

/// Characters removed by the default cleaning rule: anything that is not an
/// ASCII letter or digit.
pub const DEFAULT_STRIP_PATTERN: &str = "[^a-zA-Z0-9]";

/// The single normalization applied before the cleaned-match tier.
///
/// Every match of the strip pattern is removed, then the remainder is
/// lower-cased.
#[derive(Debug, Clone)]
pub struct CleaningRule {
    strip: Regex,
}

impl CleaningRule {
    /// Build a rule from a custom strip pattern
    ///
    /// # Errors
    ///
    /// Returns `regex::Error` if the pattern is not a valid regular expression.
    pub fn new(strip_pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            strip: Regex::new(strip_pattern)?,
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.strip.as_str()
    }

    #[must_use]
    pub fn clean(&self, s: &str) -> String {
        self.strip.replace_all(s, "").to_lowercase()
    }
}

impl Default for CleaningRule {
    fn default() -> Self {
        Self {
            strip: Regex::new(DEFAULT_STRIP_PATTERN).expect("default strip pattern is valid"),
        }
    }
}
