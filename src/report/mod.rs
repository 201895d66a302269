//! Match report output.
//!
//! The report is a CSV file with the header
//! `My_Genotype,VCF_Genotype,Reason,Confidence_Score` and one row per match,
//! in the order the bad names were read. Confidence is written with exactly
//! two decimal places. Fields containing commas or quotes are quoted.

pub mod summary;
pub mod writer;
