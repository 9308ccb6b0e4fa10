//! Core data model for the normalization pipeline.

pub mod enums;

pub use enums::{RequirementType, VerificationMethod};

use serde::{Deserialize, Serialize};

/// One free-text customer requirement as loaded from the tabular source.
/// Created at load time, read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRequirement {
    /// Identifying category label, e.g. `REQ_001`.
    pub category: String,
    /// The opaque requirement text.
    pub text: String,
    /// Zero-based position in the input sequence.
    pub ordinal: usize,
}

/// The classifier's split/do-not-split judgment for one requirement.
/// Transient — consumed immediately by the transformer stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationDecision {
    /// Whether the requirement must be decomposed.
    pub should_split: bool,
    /// Number of atomic requirements to produce (1 when atomic).
    pub count: usize,
    /// Ordered capability descriptions, one per atomic requirement.
    pub capabilities: Vec<String>,
    /// Placeholder names detected in the requirement text.
    pub placeholders: Vec<String>,
}

impl ClassificationDecision {
    /// Safe default used when the generative service is exhausted:
    /// do-not-split, one requirement, unknown capability, placeholders
    /// extracted locally from the raw text. Guarantees the item still
    /// produces at least one output row.
    pub fn fallback(raw_text: &str) -> Self {
        Self {
            should_split: false,
            count: 1,
            capabilities: vec!["<unknown capability>".to_string()],
            placeholders: crate::pipeline::placeholders::extract_placeholders(raw_text),
        }
    }
}

/// One normalized requirement — the unit of pipeline output. Owned
/// exclusively by the `RawRequirement` that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtomicRequirement {
    /// Requirement classification, or the error sentinel.
    pub requirement_type: RequirementType,
    /// The normalized requirement statement.
    pub text: String,
    /// How satisfaction of the requirement is checked.
    pub verification: VerificationMethod,
    /// Placeholder names this requirement carries.
    pub placeholders: Vec<String>,
    /// Identifiers of the catalog rules the service applied (e.g. "R7").
    pub applied_rules: Vec<String>,
    /// Vague-term replacement pairs, rendered "old → new".
    pub vague_replacements: Vec<String>,
    /// Numeric tolerances introduced, rendered "metric: val ± tol".
    pub tolerances: Vec<String>,
    /// Free-text improvement summary from the service.
    pub summary: String,
}

impl AtomicRequirement {
    /// Error-sentinel requirement. Terminal-per-item failure shape used
    /// when the generative service is exhausted on either transformer
    /// path — never a whole-batch abort.
    pub fn failure(message: &str) -> Self {
        Self {
            requirement_type: RequirementType::Error,
            text: format!("ERROR: {message}"),
            verification: VerificationMethod::NotApplicable,
            placeholders: Vec::new(),
            applied_rules: Vec::new(),
            vague_replacements: Vec::new(),
            tolerances: Vec::new(),
            summary: String::new(),
        }
    }

    /// Whether this is the error sentinel.
    pub fn is_failure(&self) -> bool {
        self.requirement_type == RequirementType::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_decision_is_do_not_split() {
        let decision = ClassificationDecision::fallback("The [SYSTEM] shall respond.");
        assert!(!decision.should_split);
        assert_eq!(decision.count, 1);
        assert_eq!(decision.capabilities, vec!["<unknown capability>"]);
        assert_eq!(decision.placeholders, vec!["SYSTEM"]);
    }

    #[test]
    fn failure_sentinel_shape() {
        let atomic = AtomicRequirement::failure("service exhausted");
        assert!(atomic.is_failure());
        assert_eq!(atomic.text, "ERROR: service exhausted");
        assert_eq!(atomic.verification, VerificationMethod::NotApplicable);
        assert!(atomic.placeholders.is_empty());
        assert!(atomic.summary.is_empty());
    }
}
