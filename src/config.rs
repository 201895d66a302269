//! Run configuration.
//!
//! A [`RunConfig`] carries everything a matching run needs: where the two
//! name lists live, where the report goes, and how matching behaves. The CLI
//! builds one from its flags; library callers can start from
//! [`RunConfig::default`] and override fields.

use std::path::PathBuf;

use crate::matching::engine::MatchingConfig;

/// Default list of names lacking a counterpart
pub const DEFAULT_BAD_NAMES: &str = "NotInSNPs.csv";

/// Default list of candidate names
pub const DEFAULT_VALID_NAMES: &str = "NotInData.csv";

/// Default destination for the match report
pub const DEFAULT_OUTPUT: &str = "Suggested_Matches.csv";

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Names that need resolving (one per line after a header)
    pub input_bad_names: PathBuf,
    /// Pool of candidate names (one per line after a header)
    pub input_valid_names: PathBuf,
    /// Where the CSV match report is written
    pub output_file: PathBuf,
    pub matching: MatchingConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_bad_names: PathBuf::from(DEFAULT_BAD_NAMES),
            input_valid_names: PathBuf::from(DEFAULT_VALID_NAMES),
            output_file: PathBuf::from(DEFAULT_OUTPUT),
            matching: MatchingConfig::default(),
        }
    }
}
