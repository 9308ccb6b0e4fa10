//! Transformer stage: improve or split.
//!
//! Two mutually exclusive paths selected by the classification
//! decision. Either path degrades service exhaustion to a single
//! error-sentinel requirement — a terminal-per-item failure that never
//! propagates past the item boundary. Placeholder-coverage checks on
//! both paths go through the lenient policy in
//! [`super::placeholders::check_coverage`]: warnings, never gates.

use super::client::GenerativeClient;
use super::parser::ImprovementResponse;
use super::placeholders::check_coverage;
use super::prompt::{build_improve_prompt, build_split_prompt};
use crate::models::{AtomicRequirement, ClassificationDecision, RawRequirement};

impl From<ImprovementResponse> for AtomicRequirement {
    fn from(response: ImprovementResponse) -> Self {
        Self {
            requirement_type: response.requirement_type,
            text: response.requirement,
            verification: response.verification,
            placeholders: response.placeholders,
            applied_rules: response.rules,
            vague_replacements: response.vague_removed,
            tolerances: response.tolerances,
            summary: response.summary,
        }
    }
}

pub struct Transformer<'a> {
    client: &'a GenerativeClient,
}

impl<'a> Transformer<'a> {
    pub fn new(client: &'a GenerativeClient) -> Self {
        Self { client }
    }

    /// Transform one requirement per its classification decision.
    /// Infallible by contract: service exhaustion yields one sentinel.
    pub fn transform(
        &self,
        requirement: &RawRequirement,
        decision: &ClassificationDecision,
    ) -> Vec<AtomicRequirement> {
        if decision.should_split && decision.count > 1 {
            self.split(requirement, decision)
        } else {
            self.improve(requirement)
        }
    }

    /// Atomic case: one requirement in, one improved requirement out.
    fn improve(&self, requirement: &RawRequirement) -> Vec<AtomicRequirement> {
        let prompt = build_improve_prompt(&requirement.text);

        match self.client.improve(&prompt) {
            Ok(response) => {
                let atomic = AtomicRequirement::from(response);
                check_coverage(
                    "improve",
                    &requirement.category,
                    &requirement.text,
                    &[atomic.text.as_str()],
                );
                vec![atomic]
            }
            Err(e) => {
                tracing::warn!(
                    category = %requirement.category,
                    error = %e,
                    "improve path exhausted retries — emitting error sentinel"
                );
                vec![AtomicRequirement::failure(&e.to_string())]
            }
        }
    }

    /// Split case: one requirement in, `count` atomic requirements out.
    fn split(
        &self,
        requirement: &RawRequirement,
        decision: &ClassificationDecision,
    ) -> Vec<AtomicRequirement> {
        let prompt = build_split_prompt(&requirement.text, decision.count, &decision.capabilities);

        match self.client.split(&prompt) {
            Ok(items) => {
                if items.len() != decision.count {
                    tracing::warn!(
                        category = %requirement.category,
                        expected = decision.count,
                        produced = items.len(),
                        "split produced an unexpected requirement count"
                    );
                }
                let atomics: Vec<AtomicRequirement> =
                    items.into_iter().map(AtomicRequirement::from).collect();
                let texts: Vec<&str> = atomics.iter().map(|a| a.text.as_str()).collect();
                check_coverage("split", &requirement.category, &requirement.text, &texts);
                atomics
            }
            Err(e) => {
                tracing::warn!(
                    category = %requirement.category,
                    error = %e,
                    "split path exhausted retries — emitting error sentinel"
                );
                vec![AtomicRequirement::failure(&e.to_string())]
            }
        }
    }
}
