//! Batch driver: one requirement at a time through the whole chain.
//!
//! Strictly sequential with at most one in-flight request. The pacing
//! delays between the classifier and transformer calls and after each
//! item are a deliberate throttle for the external service's rate
//! limits. Nothing aborts the batch: a per-item failure that escapes
//! the lower containment layers becomes one error row and processing
//! moves on.

use std::time::{Duration, Instant};

use super::aggregator::{aggregate, error_row};
use super::classifier::Classifier;
use super::client::GenerativeClient;
use super::transformer::Transformer;
use super::PipelineError;
use crate::config::AppConfig;
use crate::models::RawRequirement;
use crate::report::ReportRow;

const PROGRESS_INTERVAL: usize = 10;

pub struct BatchProcessor<'a> {
    classifier: Classifier<'a>,
    transformer: Transformer<'a>,
    inter_call_delay: Duration,
    inter_item_delay: Duration,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(client: &'a GenerativeClient, config: &AppConfig) -> Self {
        Self {
            classifier: Classifier::new(client),
            transformer: Transformer::new(client),
            inter_call_delay: config.inter_call_delay,
            inter_item_delay: config.inter_item_delay,
        }
    }

    /// No pacing delays — for tests.
    pub fn unpaced(client: &'a GenerativeClient) -> Self {
        Self {
            classifier: Classifier::new(client),
            transformer: Transformer::new(client),
            inter_call_delay: Duration::ZERO,
            inter_item_delay: Duration::ZERO,
        }
    }

    /// Process every requirement in order, appending rows monotonically.
    pub fn run(&self, requirements: &[RawRequirement]) -> Vec<ReportRow> {
        let total = requirements.len();
        let started = Instant::now();
        let mut rows = Vec::with_capacity(total);

        tracing::info!(total, "starting batch");

        for (processed, requirement) in requirements.iter().enumerate() {
            match self.process_one(requirement) {
                Ok(item_rows) => rows.extend(item_rows),
                Err(e) => {
                    tracing::error!(
                        category = %requirement.category,
                        error = %e,
                        "item failed past all containment layers — emitting error row"
                    );
                    rows.push(error_row(requirement, &e.to_string()));
                }
            }

            let processed = processed + 1;
            if processed % PROGRESS_INTERVAL == 0 && processed < total {
                let elapsed = started.elapsed();
                let remaining = elapsed.as_secs_f64() / processed as f64
                    * (total - processed) as f64;
                tracing::info!(
                    processed,
                    total,
                    elapsed_secs = elapsed.as_secs(),
                    estimated_remaining_secs = remaining as u64,
                    "batch progress"
                );
            }

            if processed < total {
                std::thread::sleep(self.inter_item_delay);
            }
        }

        tracing::info!(
            total,
            rows = rows.len(),
            elapsed_secs = started.elapsed().as_secs(),
            "batch finished"
        );
        rows
    }

    fn process_one(&self, requirement: &RawRequirement) -> Result<Vec<ReportRow>, PipelineError> {
        tracing::info!(
            category = %requirement.category,
            text = %requirement.text,
            "processing requirement"
        );

        let decision = self.classifier.classify(requirement);
        tracing::debug!(
            category = %requirement.category,
            should_split = decision.should_split,
            count = decision.count,
            "classified"
        );

        std::thread::sleep(self.inter_call_delay);

        let results = self.transformer.transform(requirement, &decision);
        if results.is_empty() {
            return Err(PipelineError::EmptyResult);
        }

        Ok(aggregate(requirement, &results))
    }
}
