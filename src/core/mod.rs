//! Core data types for sample name reconciliation.
//!
//! - [`NameList`]: An ordered list of identifiers from one data source
//! - [`MatchRecord`]: A suggested link from a bad name to a candidate
//! - [`MatchReason`]: Which tier of the cascade produced the link
//! - [`Confidence`]: Coarse band derived from a record's score
//!
//! [`NameList`]: names::NameList
//! [`MatchRecord`]: types::MatchRecord
//! [`MatchReason`]: types::MatchReason
//! [`Confidence`]: types::Confidence

pub mod names;
pub mod types;
