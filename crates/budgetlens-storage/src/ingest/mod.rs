//! Ingestion of the participatory-budget CSV export.
//!
//! Row-level problems never abort a load; they are collected in the
//! [`IngestReport`]. Only unreadable input, an empty file, or a missing
//! required column fail the whole load.

pub mod csv_reader;
pub mod dataset;
pub mod report;

use std::path::Path;

use budgetlens_core::errors::IngestError;
use budgetlens_core::models::ProjectRecord;

pub use dataset::{parse_budget, parse_year, DatasetColumns};
pub use report::{IngestReport, RejectedRow};

/// Parse CSV text into records. `source` names the input in the report.
pub fn load_csv_str(
    content: &str,
    source: &str,
) -> Result<(Vec<ProjectRecord>, IngestReport), IngestError> {
    let mut rows = csv_reader::parse(content)?;
    if rows.is_empty() {
        return Err(IngestError::EmptyDataset {
            path: source.to_string(),
        });
    }
    let header = rows.remove(0);
    let columns = DatasetColumns::resolve(&header.fields)?;

    let mut report = IngestReport::new(source);
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        if row.is_blank() {
            continue;
        }
        report.rows_read += 1;
        match columns.to_record(&row.fields) {
            Ok(record) => {
                records.push(record);
                report.rows_accepted += 1;
            }
            Err(reason) => {
                tracing::warn!(line = row.line, %reason, "rejected dataset row");
                report.rejected.push(RejectedRow {
                    line: row.line,
                    reason,
                });
            }
        }
    }

    tracing::info!(
        source,
        rows_read = report.rows_read,
        rows_accepted = report.rows_accepted,
        rows_rejected = report.rejected.len(),
        "dataset parsed"
    );
    Ok((records, report))
}

/// Read and parse a CSV export from disk.
pub fn load_csv_file(path: &Path) -> Result<(Vec<ProjectRecord>, IngestReport), IngestError> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    load_csv_str(&content, &path.display().to_string())
}
