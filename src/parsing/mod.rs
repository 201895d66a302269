//! Loaders for the two name lists.
//!
//! Input files are plain text with one identifier per line. The first line is
//! a header and is always discarded; blank lines are skipped and surrounding
//! whitespace is trimmed. Despite the `.csv` extension these files usually
//! carry, no CSV quoting is interpreted.
//!
//! ## Example
//!
//! ```
//! use sample_reconcile::parsing::names::parse_names_text;
//!
//! let names = parse_names_text("Genotype\nSample_01\n\nSample_02\n");
//! assert_eq!(names.len(), 2);
//! ```

pub mod names;
