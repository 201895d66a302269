use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::core::names::NameList;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a name list file: one identifier per line after a header line
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or is not valid UTF-8.
pub fn load_names(path: &Path) -> Result<NameList, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let names = parse_names_text(&content);
    info!("Loaded {} names from {}", names.len(), path.display());
    Ok(names)
}

/// Parse name list text.
///
/// The first line is always dropped as a header, whatever it contains. The
/// remaining lines are trimmed and blank ones are skipped. Content is not
/// otherwise validated; a line containing commas is kept whole.
#[must_use]
pub fn parse_names_text(text: &str) -> NameList {
    text.lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
