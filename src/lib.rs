//! reqsmith — batch normalization of customer requirements into
//! ISO 29148 / INCOSE-compliant requirement statements.
//!
//! The pipeline takes free-text requirement statements from a tabular
//! source, asks an LLM completion service whether each one expresses a
//! single verifiable capability or must be decomposed, rewrites (or
//! splits) it against the 42-rule INCOSE catalog, and flattens the
//! results into a fixed 10-column report.
//!
//! Processing is strictly sequential with one in-flight service request
//! at a time. No single item's failure ever aborts the batch: the
//! classifier degrades to a safe default decision, the transformer
//! degrades to an error-sentinel requirement, and the batch driver
//! degrades to an error report row.

pub mod config;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod rules;
