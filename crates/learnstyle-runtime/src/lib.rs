//! # learnstyle-runtime
//!
//! Classifier gateway for the learnstyle inventory.
//!
//! This crate owns everything that touches the external text-generation
//! service: prompt assembly, the provider seam, response parsing and
//! repair, and the layered fallback policy. The deterministic engine in
//! `learnstyle-core` never makes network calls.
//!
//! ## Guarantee
//!
//! [`ClassifierGateway::analyze`] is infallible. Whatever the external
//! service does — unreachable, rate-limited, empty, fenced, or
//! schema-violating — the caller receives a well-formed analysis:
//!
//! - No credential configured: a fixed demonstration result
//! - Service fault or contract violation: a degraded result whose axis
//!   scores are computed locally from the respondent's actual answers
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use learnstyle_core::{AnswerSet, QuestionBank, RespondentProfile, EducationalContext};
//! use learnstyle_runtime::{ClassifierGateway, GeminiProvider};
//!
//! let gateway = ClassifierGateway::new(Arc::new(GeminiProvider::from_env()));
//! let outcome = gateway.analyze(&profile, &bank, &answers).await;
//! println!("{} ({:?})", outcome.result.style, outcome.source);
//! ```

pub mod gateway;
pub mod prompts;
pub mod providers;
pub mod response;

// Re-export main types at crate root
pub use gateway::{AnalysisOutcome, AnalysisSource, ClassifierGateway};
pub use providers::{
    ApiCredential, ClassificationConfig, ClassificationRequest, ClassifierProvider,
    ClassifierResponse, CredentialSource, NullProvider, ProviderError, TokenUsage,
};
pub use response::{parse_analysis, strip_code_fences, ResponseError};

#[cfg(feature = "gemini")]
pub use providers::{GeminiProvider, GEMINI_API_KEY_ENV};
