//! Tabular output: write the flattened report rows to a CSV file.

use std::path::Path;

use super::{ReportError, ReportRow, COLUMNS};

/// Write every row to `path` with the ten fixed column headers.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    if rows.is_empty() {
        // serialize() emits the header row itself, so an empty batch
        // needs it written explicitly.
        writer.write_record(COLUMNS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = rows.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::COLUMNS;

    fn row(category: &str, sub_text: &str) -> ReportRow {
        ReportRow {
            category: category.into(),
            customer_req: "The system shall respond quickly.".into(),
            ambiguities_identified: "vague timing".into(),
            improvements_made: "R7; R33".into(),
            vague_terms_removed: "quickly → within 2.0 s".into(),
            tolerances_added: "response time: 2.0 ± 0.5 s".into(),
            consolidated_requirement: sub_text.into(),
            detailed_requirement: sub_text.into(),
            sub_requirement_text: sub_text.into(),
            verification_method: "Test".into(),
        }
    }

    #[test]
    fn header_matches_fixed_columns() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_report(file.path(), &[row("REQ_001", "The system shall respond within 2.0 s.")])
            .unwrap();

        let mut reader = csv::Reader::from_path(file.path()).unwrap();
        let headers: Vec<&str> = reader.headers().unwrap().iter().collect();
        assert_eq!(headers, COLUMNS);
    }

    #[test]
    fn rows_round_trip_through_the_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let rows = vec![row("REQ_001", "first"), row("REQ_002", "second")];
        write_report(file.path(), &rows).unwrap();

        let mut reader = csv::Reader::from_path(file.path()).unwrap();
        let read: Vec<ReportRow> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(read, rows);
    }

    #[test]
    fn empty_batch_still_writes_headers() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_report(file.path(), &[]).unwrap();

        let mut reader = csv::Reader::from_path(file.path()).unwrap();
        assert_eq!(reader.headers().unwrap().len(), COLUMNS.len());
        assert_eq!(reader.records().count(), 0);
    }
}
