//! Structured parsing of completion responses.
//!
//! The service replies with one JSON payload, optionally wrapped in a
//! fenced block (```json or unlabeled ```). Parsing is two-stage so the
//! error taxonomy stays honest: text that is not JSON at all is a
//! [`ServiceError::StructuralParse`]; valid JSON missing required
//! fields (or carrying values outside the fixed enumerations) is a
//! [`ServiceError::Schema`].

use serde::Deserialize;

use super::ServiceError;
use crate::models::{RequirementType, VerificationMethod};

/// Classification response shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationResponse {
    pub should_split: bool,
    /// Requirement count; 1 when atomic. Clamped to >= 1 by the classifier.
    pub num: u32,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub placeholders: Vec<String>,
}

/// Improvement response shape — one element of a split array uses the
/// same shape (its extra "id" field is accepted and ignored).
#[derive(Debug, Clone, Deserialize)]
pub struct ImprovementResponse {
    #[serde(rename = "type")]
    pub requirement_type: RequirementType,
    pub requirement: String,
    pub verification: VerificationMethod,
    #[serde(default)]
    pub placeholders: Vec<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub vague_removed: Vec<String>,
    #[serde(default)]
    pub tolerances: Vec<String>,
    #[serde(default)]
    pub summary: String,
}

/// Strip an optional code fence from a response. Handles a labeled
/// ```json block, an unlabeled ``` block, and bare payloads.
pub fn strip_code_fence(response: &str) -> &str {
    if let Some(start) = response.find("```json") {
        let body = &response[start + 7..];
        return match body.find("```") {
            Some(end) => body[..end].trim(),
            None => body.trim(),
        };
    }
    if let Some(start) = response.find("```") {
        let body = &response[start + 3..];
        return match body.find("```") {
            Some(end) => body[..end].trim(),
            None => body.trim(),
        };
    }
    response.trim()
}

fn parse_payload(response: &str) -> Result<serde_json::Value, ServiceError> {
    let stripped = strip_code_fence(response);
    serde_json::from_str(stripped).map_err(|e| ServiceError::StructuralParse(e.to_string()))
}

/// Parse a classification response.
pub fn parse_classification(response: &str) -> Result<ClassificationResponse, ServiceError> {
    let value = parse_payload(response)?;
    serde_json::from_value(value).map_err(|e| ServiceError::Schema(e.to_string()))
}

/// Parse a single-improvement response.
pub fn parse_improvement(response: &str) -> Result<ImprovementResponse, ServiceError> {
    let value = parse_payload(response)?;
    serde_json::from_value(value).map_err(|e| ServiceError::Schema(e.to_string()))
}

/// Parse a split response: a non-empty JSON array of improvement-shaped
/// objects.
pub fn parse_split(response: &str) -> Result<Vec<ImprovementResponse>, ServiceError> {
    let value = parse_payload(response)?;
    let items: Vec<ImprovementResponse> =
        serde_json::from_value(value).map_err(|e| ServiceError::Schema(e.to_string()))?;
    if items.is_empty() {
        return Err(ServiceError::Schema("split array is empty".into()));
    }
    Ok(items)
}
