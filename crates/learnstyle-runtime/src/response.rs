//! Parsing and repair of classifier responses.
//!
//! The service answers with text that should be the result contract as
//! JSON, but it sometimes wraps the payload in Markdown code fences.
//! Stripping the fence is the only repair performed; beyond that the
//! response either validates whole or is rejected whole.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use learnstyle_core::{validate_analysis_schema, AnalysisResult};

lazy_static! {
    // A payload wrapped in triple-backtick fencing, with or without a
    // language tag after the opening fence.
    static ref CODE_FENCE: Regex =
        Regex::new(r"(?s)^\s*```[A-Za-z0-9_+-]*[ \t]*\r?\n?(.*?)\r?\n?```\s*$")
            .expect("Invalid regex");
}

/// Errors from response parsing and validation.
#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("Classifier returned an empty response")]
    Empty,

    #[error("Failed to parse classifier response as JSON: {0}")]
    Parse(String),

    #[error("Response violates the result contract: {}", issues.join("; "))]
    SchemaViolation { issues: Vec<String> },
}

/// Strip surrounding code-fence markers, if present.
///
/// A fenced payload parses identically to the same content unwrapped;
/// anything that is not a single fenced block is returned unchanged.
pub fn strip_code_fences(text: &str) -> &str {
    match CODE_FENCE.captures(text) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).unwrap_or(text),
        None => text,
    }
}

/// Parse a classifier response into a validated [`AnalysisResult`].
///
/// Steps: reject empty text, strip fences, parse JSON, validate against
/// the embedded contract schema, then deserialize. No partial
/// acceptance — any failure sends the gateway down its degraded path.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, ResponseError> {
    if text.trim().is_empty() {
        return Err(ResponseError::Empty);
    }

    let payload = strip_code_fences(text);

    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|e| ResponseError::Parse(e.to_string()))?;

    validate_analysis_schema(&value)
        .map_err(|issues| ResponseError::SchemaViolation { issues })?;

    serde_json::from_value(value).map_err(|e| ResponseError::Parse(e.to_string()))
}
