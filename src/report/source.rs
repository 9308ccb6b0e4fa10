//! Tabular input: load raw requirements from a CSV file.

use std::path::Path;

use super::ReportError;
use crate::models::RawRequirement;

/// Category label for the 1-based position: `REQ_001`, `REQ_002`, ...
fn category_label(ordinal: usize) -> String {
    format!("REQ_{:03}", ordinal + 1)
}

/// Read the first column of a headered CSV file into ordered raw
/// requirements. Empty cells are dropped (and counted); categories are
/// assigned by post-filter position.
pub fn load_requirements(path: &Path) -> Result<Vec<RawRequirement>, ReportError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut requirements = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record?;
        let text = record.get(0).unwrap_or("").trim();
        if text.is_empty() {
            dropped += 1;
            continue;
        }
        let ordinal = requirements.len();
        requirements.push(RawRequirement {
            category: category_label(ordinal),
            text: text.to_string(),
            ordinal,
        });
    }

    if requirements.is_empty() {
        return Err(ReportError::EmptyInput);
    }

    tracing::info!(
        path = %path.display(),
        loaded = requirements.len(),
        dropped,
        "loaded requirements"
    );
    Ok(requirements)
}
