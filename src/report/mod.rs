//! Tabular report schema plus the thin CSV source/sink glue.
//!
//! The report is a flat, row-oriented projection of the pipeline's
//! output: one row per atomic requirement, exactly ten named columns in
//! fixed order. Downstream consumers rely on the first row of each
//! group carrying the group's consolidated/detailed summaries, so that
//! convention lives in the row type itself.

pub mod sink;
pub mod source;

use serde::{Deserialize, Serialize};

use thiserror::Error;

/// The ten report columns, in their fixed output order.
pub const COLUMNS: [&str; 10] = [
    "Category",
    "Customer_Req",
    "Ambiguities_Identified",
    "Improvements_Made",
    "Vague_Terms_Removed",
    "Tolerances_Added",
    "Consolidated_Requirement",
    "Detailed_Requirement",
    "Sub_Requirement_Text",
    "Verification_Method",
];

/// Cosmetic column-width hints for spreadsheet consumers. Presentation
/// only — nothing in the pipeline depends on them.
pub const COLUMN_WIDTH_HINTS: [u16; 10] = [15, 60, 40, 50, 40, 40, 50, 70, 70, 20];

/// One flattened report row. Created once at aggregation time,
/// immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Customer_Req")]
    pub customer_req: String,
    #[serde(rename = "Ambiguities_Identified")]
    pub ambiguities_identified: String,
    #[serde(rename = "Improvements_Made")]
    pub improvements_made: String,
    #[serde(rename = "Vague_Terms_Removed")]
    pub vague_terms_removed: String,
    #[serde(rename = "Tolerances_Added")]
    pub tolerances_added: String,
    /// Group summary — non-empty only on the first row of a group.
    #[serde(rename = "Consolidated_Requirement")]
    pub consolidated_requirement: String,
    /// Group enumeration — non-empty only on the first row of a group.
    #[serde(rename = "Detailed_Requirement")]
    pub detailed_requirement: String,
    #[serde(rename = "Sub_Requirement_Text")]
    pub sub_requirement_text: String,
    #[serde(rename = "Verification_Method")]
    pub verification_method: String,
}

/// Errors from the tabular source/sink.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input has no requirement rows")]
    EmptyInput,
}
