//! The requirement-normalization pipeline.
//!
//! Stages, leaf to root: placeholder extraction, prompt composition,
//! the generative service client with bounded retry, the split/no-split
//! classifier, the improve/split transformer, and the aggregator that
//! flattens results into report rows. `batch` drives one item at a time
//! through the whole chain.
//!
//! Failure containment is layered and explicit — no stage catches a
//! failure raised two layers below:
//! - the client retries, then surfaces a typed [`ServiceError`];
//! - the classifier converts that into a safe default decision;
//! - the transformer converts it into an error-sentinel requirement;
//! - the batch driver converts anything else into one error report row.

pub mod aggregator;
pub mod batch;
pub mod classifier;
pub mod client;
pub mod parser;
pub mod placeholders;
pub mod prompt;
pub mod transformer;

use thiserror::Error;

/// Failures of a single generative request. All variants are retried by
/// the client up to its bound; after exhaustion the last one surfaces.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Network-level failure reaching the completion endpoint.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Endpoint reachable but returned a non-success status.
    #[error("completion endpoint returned status {status}: {body}")]
    Endpoint { status: u16, body: String },

    /// The (fence-stripped) response payload is not valid JSON.
    #[error("response is not valid JSON: {0}")]
    StructuralParse(String),

    /// Valid JSON, but required fields are absent or outside the
    /// fixed enumerations.
    #[error("response does not match the expected shape: {0}")]
    Schema(String),
}

/// Per-item pipeline failures that escape the classifier + transformer
/// containment. The batch driver converts these into one error row.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("transformer produced no requirements")]
    EmptyResult,
}
