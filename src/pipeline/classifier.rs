//! Classifier stage: split or do-not-split.
//!
//! Asks the service whether a requirement expresses exactly one
//! verifiable capability or several that must be separated. This stage
//! never fails: when the client exhausts its retries, the classifier
//! substitutes a safe default decision instead of propagating — a
//! deliberate degradation path guaranteeing every requirement still
//! produces at least one output row.

use super::client::GenerativeClient;
use super::placeholders::extract_placeholders;
use super::prompt::build_analyze_prompt;
use crate::models::{ClassificationDecision, RawRequirement};

pub struct Classifier<'a> {
    client: &'a GenerativeClient,
}

impl<'a> Classifier<'a> {
    pub fn new(client: &'a GenerativeClient) -> Self {
        Self { client }
    }

    /// Judge one requirement. Infallible by contract.
    pub fn classify(&self, requirement: &RawRequirement) -> ClassificationDecision {
        let prompt = build_analyze_prompt(&requirement.text);

        match self.client.classify(&prompt) {
            Ok(response) => {
                let placeholders = if response.placeholders.is_empty() {
                    extract_placeholders(&requirement.text)
                } else {
                    response.placeholders
                };
                ClassificationDecision {
                    should_split: response.should_split,
                    count: (response.num as usize).max(1),
                    capabilities: response.capabilities,
                    placeholders,
                }
            }
            Err(e) => {
                tracing::warn!(
                    category = %requirement.category,
                    error = %e,
                    "classification exhausted retries — defaulting to do-not-split"
                );
                ClassificationDecision::fallback(&requirement.text)
            }
        }
    }
}
