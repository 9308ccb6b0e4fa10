//! Process configuration.
//!
//! All tunables live in one immutable `AppConfig` value built once at
//! startup and passed into each component at construction — never read
//! from ambient globals mid-run. The only fatal, pre-processing abort in
//! the whole system is a missing service credential.

use std::time::Duration;

/// Default completion endpoint base URL.
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";

/// Default completion model identifier.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-latest";

/// Default maximum tokens requested per completion.
pub const DEFAULT_MAX_TOKENS: u32 = 20_000;

/// Maximum attempts per generative request (transport or parse failure).
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Fixed delay between retry attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Pacing delay between the classifier call and the transformer call,
/// and again after each item. A deliberate throttle for the external
/// service's rate limits, not an incidental artifact.
pub const DEFAULT_PACING_DELAY: Duration = Duration::from_millis(500);

/// Immutable process-wide configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Completion endpoint base URL (no trailing slash).
    pub endpoint: String,
    /// Service credential. Required — the batch never starts without it.
    pub api_key: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Max tokens per completion.
    pub max_tokens: u32,
    /// Attempts per generative request before the failure surfaces.
    pub max_retries: u32,
    /// Delay between attempts.
    pub retry_delay: Duration,
    /// Delay between the classifier and transformer calls of one item.
    pub inter_call_delay: Duration,
    /// Delay after each completed item.
    pub inter_item_delay: Duration,
}

/// Errors building the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no service credential — set REQSMITH_API_KEY (or ANTHROPIC_API_KEY)")]
    MissingApiKey,
}

impl AppConfig {
    /// Build the configuration from the environment, with optional
    /// model/endpoint overrides from the command line.
    pub fn from_env(
        model_override: Option<&str>,
        endpoint_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_key = std::env::var("REQSMITH_API_KEY")
            .or_else(|_| std::env::var("ANTHROPIC_API_KEY"))
            .ok();
        Self::from_parts(api_key, model_override, endpoint_override)
    }

    /// Build from explicit parts. Split out from `from_env` so tests can
    /// exercise the validation without mutating process environment.
    pub fn from_parts(
        api_key: Option<String>,
        model_override: Option<&str>,
        endpoint_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            endpoint: endpoint_override
                .unwrap_or(DEFAULT_ENDPOINT)
                .trim_end_matches('/')
                .to_string(),
            api_key,
            model: model_override.unwrap_or(DEFAULT_MODEL).to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
            inter_call_delay: DEFAULT_PACING_DELAY,
            inter_item_delay: DEFAULT_PACING_DELAY,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_fatal() {
        let result = AppConfig::from_parts(None, None, None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn blank_api_key_is_fatal() {
        let result = AppConfig::from_parts(Some("   ".into()), None, None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn defaults_applied() {
        let config = AppConfig::from_parts(Some("key".into()), None, None).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay, Duration::from_secs(2));
    }

    #[test]
    fn overrides_and_trailing_slash() {
        let config = AppConfig::from_parts(
            Some("key".into()),
            Some("other-model"),
            Some("https://llm.internal/"),
        )
        .unwrap();
        assert_eq!(config.model, "other-model");
        assert_eq!(config.endpoint, "https://llm.internal");
    }
}
