//! Generative recommendation source.
//!
//! The optimizer can merge its rule-based recommendations with free-text
//! suggestions from an external language model. This module defines the seam
//! ([`RecommendationSource`]), the prompt sent to the model, a best-effort
//! parser for its answers, and an OpenAI-compatible completion client.
//!
//! Every failure here is recoverable: the optimizer logs it and continues with
//! rule-based recommendations only.

pub mod client;
pub mod parser;
pub mod prompt;

use crate::analyzer::cost_optimize::types::{
    CostEstimate, ProjectProfile, Recommendation, UsagePattern,
};
use thiserror::Error;

pub use client::CompletionClient;

/// Errors raised by a generative recommendation source.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Generative recommendations are disabled")]
    Disabled,

    #[error("Missing API key. Set {0} environment variable.")]
    MissingApiKey(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider returned an empty response")]
    EmptyResponse,
}

pub type AgentResult<T> = Result<T, AgentError>;

/// Everything a generative source needs to propose recommendations.
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub profile: &'a ProjectProfile,
    pub estimate: &'a CostEstimate,
    pub pattern: &'a UsagePattern,
    /// Number of recommendations to ask for
    pub count: usize,
    /// Titles the source should not repeat
    pub avoid_titles: Vec<String>,
    /// Id of the first generated recommendation
    pub first_id: u32,
}

/// A collaborator that proposes recommendations from free text.
pub trait RecommendationSource {
    /// Human-readable name used in logs.
    fn name(&self) -> &str;

    /// Propose candidate recommendations for a request.
    fn generate(&self, request: &GenerationRequest) -> AgentResult<Vec<Recommendation>>;
}
