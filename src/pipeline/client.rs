//! Generative service client.
//!
//! [`CompletionApi`] is the transport seam: one prompt in, one raw text
//! response out. [`AnthropicClient`] is the production implementation
//! against a hosted messages endpoint; [`MockCompletionApi`] backs the
//! tests. [`GenerativeClient`] layers the request protocol on top:
//! bounded retry with a fixed inter-attempt delay, fence stripping, and
//! shape-specific parsing. Exactly one request is sent per attempt.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::parser::{
    parse_classification, parse_improvement, parse_split, ClassificationResponse,
    ImprovementResponse,
};
use super::prompt::SYSTEM_PROMPT;
use super::ServiceError;
use crate::config::AppConfig;

/// Completion transport abstraction (allows mocking).
pub trait CompletionApi {
    /// Send one prompt, return the raw response text.
    fn complete(&self, prompt: &str) -> Result<String, ServiceError>;
}

// ---------------------------------------------------------------------------
// Production client
// ---------------------------------------------------------------------------

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// HTTP client for an Anthropic-style messages endpoint.
pub struct AnthropicClient {
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    client: reqwest::blocking::Client,
}

impl AnthropicClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .expect("failed to create HTTP client");

        Self {
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            client,
        }
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

impl CompletionApi for AnthropicClient {
    fn complete(&self, prompt: &str) -> Result<String, ServiceError> {
        let url = format!("{}/v1/messages", self.base_url);
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: SYSTEM_PROMPT,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ServiceError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = response
            .json()
            .map_err(|e| ServiceError::Transport(format!("malformed service envelope: {e}")))?;

        let text = parsed
            .content
            .first()
            .map(|block| block.text.clone())
            .ok_or_else(|| ServiceError::Transport("empty service response".into()))?;

        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// Mock client
// ---------------------------------------------------------------------------

/// Mock completion transport — returns a configurable response.
pub struct MockCompletionApi {
    response: String,
}

impl MockCompletionApi {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

impl CompletionApi for MockCompletionApi {
    fn complete(&self, _prompt: &str) -> Result<String, ServiceError> {
        Ok(self.response.clone())
    }
}

// ---------------------------------------------------------------------------
// Retry protocol
// ---------------------------------------------------------------------------

/// Bounded retry: `max_attempts` total attempts, fixed `delay` between.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_attempts: config.max_retries,
            delay: config.retry_delay,
        }
    }

    /// No delays — for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            delay: Duration::ZERO,
        }
    }
}

/// The generative service client: transport plus retry plus parsing.
///
/// Transport, structural-parse, and schema failures are all retried up
/// to the bound; afterwards the last error surfaces typed to the
/// caller. Whether to degrade instead of propagate is the caller's
/// decision (classifier: safe default; transformer: error sentinel).
pub struct GenerativeClient {
    api: Box<dyn CompletionApi + Send + Sync>,
    retry: RetryPolicy,
}

impl GenerativeClient {
    pub fn new(api: Box<dyn CompletionApi + Send + Sync>, retry: RetryPolicy) -> Self {
        Self { api, retry }
    }

    /// Request a split/do-not-split classification.
    pub fn classify(&self, prompt: &str) -> Result<ClassificationResponse, ServiceError> {
        self.request(prompt, parse_classification)
    }

    /// Request a single-requirement improvement.
    pub fn improve(&self, prompt: &str) -> Result<ImprovementResponse, ServiceError> {
        self.request(prompt, parse_improvement)
    }

    /// Request a split into multiple atomic requirements.
    pub fn split(&self, prompt: &str) -> Result<Vec<ImprovementResponse>, ServiceError> {
        self.request(prompt, parse_split)
    }

    fn request<T>(
        &self,
        prompt: &str,
        parse: fn(&str) -> Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        let mut last_error = None;

        for attempt in 1..=self.retry.max_attempts {
            match self.api.complete(prompt).and_then(|raw| parse(&raw)) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.retry.max_attempts,
                        error = %e,
                        "generative request failed"
                    );
                    last_error = Some(e);
                    if attempt < self.retry.max_attempts {
                        std::thread::sleep(self.retry.delay);
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| ServiceError::Transport("retry policy allowed no attempts".into())))
    }
}
