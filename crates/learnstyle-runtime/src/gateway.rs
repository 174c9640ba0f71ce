//! The external classifier gateway.
//!
//! Single point of contact with the unreliable external service; owns
//! all fallback and validation policy. Per invocation:
//!
//! - No credential -> fixed demonstration result (terminal, not an error)
//! - Requesting -> one attempt, no retry loop
//! - Validating -> strip fences, parse, check against the contract schema
//! - Success -> conforming result returned unmodified
//! - Failed -> degraded result carrying the locally computed axis scores
//!
//! The gateway never lets an external-service fault propagate: every
//! path terminates in a well-formed [`AnalysisResult`]. A respondent who
//! just spent minutes answering questions must never see a blank screen.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use learnstyle_core::{
    normalize, tally, AnalysisResult, AnswerSet, QuestionBank, RespondentProfile,
};

use crate::prompts::{build_analysis_prompt, response_schema, ANALYST_SYSTEM_PROMPT};
use crate::providers::{ClassificationConfig, ClassificationRequest, ClassifierProvider};
use crate::response::parse_analysis;

/// How an analysis result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    /// The external classifier answered with a conforming result
    Classifier,

    /// No credential configured; fixed demonstration values
    Demonstration,

    /// The classifier failed or violated the contract; local scores with
    /// generic narrative
    Degraded,
}

/// Result of a gateway invocation. Always well-formed; the `source`
/// records which path produced it.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// The analysis, valid on every path
    pub result: AnalysisResult,

    /// Which terminal state produced the result
    pub source: AnalysisSource,

    /// When the analysis completed
    pub analyzed_at: DateTime<Utc>,
}

/// The gateway. The provider is injected at construction; its credential
/// presence is checked at call time, so the no-credential path is
/// testable without touching the process environment.
pub struct ClassifierGateway {
    provider: Arc<dyn ClassifierProvider>,
    config: ClassificationConfig,
}

impl ClassifierGateway {
    /// Create a gateway with the default classification config.
    pub fn new(provider: Arc<dyn ClassifierProvider>) -> Self {
        Self::with_config(provider, ClassificationConfig::default())
    }

    /// Create a gateway with an explicit classification config.
    pub fn with_config(provider: Arc<dyn ClassifierProvider>, config: ClassificationConfig) -> Self {
        Self { provider, config }
    }

    /// Run one analysis. Infallible by construction: every fault is
    /// absorbed into a demonstration or degraded result.
    ///
    /// Assumes a complete answer set and a validated profile; input
    /// gating happens at the presentation boundary.
    pub async fn analyze(
        &self,
        profile: &RespondentProfile,
        bank: &QuestionBank,
        answers: &AnswerSet,
    ) -> AnalysisOutcome {
        let raw = tally(bank, answers);
        let local_axis_data = normalize(&raw);

        if !self.provider.has_credential() {
            tracing::info!(
                provider = self.provider.name(),
                "No classifier credential configured, returning demonstration result"
            );
            return self.outcome(AnalysisResult::demonstration(), AnalysisSource::Demonstration);
        }

        let request = ClassificationRequest {
            system: Some(ANALYST_SYSTEM_PROMPT.to_string()),
            prompt: build_analysis_prompt(profile, bank, answers, &raw),
            response_schema: response_schema(),
        };

        match self.provider.classify(&request, &self.config).await {
            Ok(response) => match parse_analysis(&response.content) {
                Ok(result) => {
                    tracing::debug!(
                        provider = self.provider.name(),
                        model = %response.model,
                        tokens = response.usage.total(),
                        "Classifier produced a conforming analysis"
                    );
                    self.outcome(result, AnalysisSource::Classifier)
                }
                Err(e) => {
                    tracing::warn!(
                        provider = self.provider.name(),
                        error = %e,
                        "Classifier response unusable, returning degraded result"
                    );
                    self.outcome(
                        AnalysisResult::degraded(local_axis_data),
                        AnalysisSource::Degraded,
                    )
                }
            },
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "Classifier call failed, returning degraded result"
                );
                self.outcome(
                    AnalysisResult::degraded(local_axis_data),
                    AnalysisSource::Degraded,
                )
            }
        }
    }

    fn outcome(&self, result: AnalysisResult, source: AnalysisSource) -> AnalysisOutcome {
        AnalysisOutcome {
            result,
            source,
            analyzed_at: Utc::now(),
        }
    }
}
