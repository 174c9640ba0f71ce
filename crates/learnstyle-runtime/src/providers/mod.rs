//! Classifier provider abstractions.
//!
//! The provider is the single point where the external text-generation
//! service is called. It is injected into the gateway at construction,
//! and its credential presence is checked at call time, so the
//! no-credential path is exercised without touching the process
//! environment.
//!
//! ## Security
//!
//! Providers use the [`secrets`] module for credential handling. See
//! [`ApiCredential`] for the patterns.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::time::Duration;
use thiserror::Error;

pub mod secrets;

#[cfg(feature = "gemini")]
mod gemini;

pub use secrets::{ApiCredential, CredentialSource};

#[cfg(feature = "gemini")]
pub use gemini::{GeminiProvider, GEMINI_API_KEY_ENV};

/// Errors from classifier providers.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("Rate limit exceeded, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    ParseError(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Configuration for a classification request.
#[derive(Debug, Clone)]
pub struct ClassificationConfig {
    /// Model to use
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Temperature (0.0 for deterministic)
    pub temperature: f32,

    /// Request timeout
    pub timeout: Duration,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            max_tokens: 1024,
            temperature: 0.0,
            timeout: Duration::from_secs(30),
        }
    }
}

/// A fully assembled classification request.
#[derive(Debug, Clone)]
pub struct ClassificationRequest {
    /// System-level persona instruction
    pub system: Option<String>,

    /// The analysis prompt (profile, score hints, choice log, rules)
    pub prompt: String,

    /// Structured output schema the service must honor
    pub response_schema: JsonValue,
}

/// Token usage reported by the service.
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,

    /// Tokens in the completion
    pub completion_tokens: u32,
}

impl TokenUsage {
    /// Total tokens used.
    pub fn total(&self) -> u32 {
        self.prompt_tokens + self.completion_tokens
    }
}

/// Raw response from the classifier.
#[derive(Debug, Clone)]
pub struct ClassifierResponse {
    /// Generated text, expected to be the result contract as JSON
    pub content: String,

    /// Model that served the request
    pub model: String,

    /// Token usage
    pub usage: TokenUsage,
}

/// Provider abstraction allows swapping classifier backends.
///
/// This is the ONLY place where the external service is called. The
/// gateway never constructs requests against the wire format itself.
#[async_trait]
pub trait ClassifierProvider: Send + Sync {
    /// Execute a single classification request. One attempt; retry
    /// policy belongs to the caller, and the gateway makes none.
    async fn classify(
        &self,
        request: &ClassificationRequest,
        config: &ClassificationConfig,
    ) -> Result<ClassifierResponse, ProviderError>;

    /// Whether a usable credential is configured. Checked by the gateway
    /// at call time; `false` short-circuits to the demonstration result.
    fn has_credential(&self) -> bool;

    /// Provider name for logging.
    fn name(&self) -> &str;
}

/// A provider with no credential and no backend.
///
/// Drives the gateway's demonstration path: offline runs, tests, and
/// builds without the `gemini` feature.
#[derive(Debug, Default)]
pub struct NullProvider;

#[async_trait]
impl ClassifierProvider for NullProvider {
    async fn classify(
        &self,
        _request: &ClassificationRequest,
        _config: &ClassificationConfig,
    ) -> Result<ClassifierResponse, ProviderError> {
        Err(ProviderError::NotConfigured(
            "offline provider has no backend".to_string(),
        ))
    }

    fn has_credential(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "offline"
    }
}
