use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::core::types::MatchRecord;

/// Column header of the match report
pub const REPORT_HEADER: [&str; 4] = ["My_Genotype", "VCF_Genotype", "Reason", "Confidence_Score"];

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Write the match report to a file, replacing any existing content
///
/// # Errors
///
/// Returns `ReportError::Csv` if the file cannot be created or written.
pub fn write_report(path: &Path, records: &[MatchRecord]) -> Result<(), ReportError> {
    let writer = csv::WriterBuilder::new().from_path(path)?;
    write_csv(writer, records)?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Write the match report as CSV to any writer
///
/// # Errors
///
/// Returns `ReportError` if writing fails.
pub fn write_records<W: Write>(out: W, records: &[MatchRecord]) -> Result<(), ReportError> {
    write_csv(csv::WriterBuilder::new().from_writer(out), records)
}

/// Write the match report tab-separated, for terminal output
///
/// # Errors
///
/// Returns `ReportError` if writing fails.
pub fn write_records_tsv<W: Write>(out: W, records: &[MatchRecord]) -> Result<(), ReportError> {
    write_csv(
        csv::WriterBuilder::new().delimiter(b'\t').from_writer(out),
        records,
    )
}

fn write_csv<W: Write>(
    mut writer: csv::Writer<W>,
    records: &[MatchRecord],
) -> Result<(), ReportError> {
    writer.write_record(REPORT_HEADER)?;
    for record in records {
        writer.write_record([
            record.source.as_str(),
            record.target.as_str(),
            record.reason.as_str(),
            record.confidence_label().as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
