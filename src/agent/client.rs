//! OpenAI-compatible chat completion client.

use super::{AgentError, AgentResult, GenerationRequest, RecommendationSource, parser, prompt};
use crate::analyzer::cost_optimize::types::Recommendation;
use crate::config::types::GenerativeConfig;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// User agent for API requests
const USER_AGENT: &str = concat!("cost-ctl/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    top_p: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Blocking client for a chat completions endpoint.
pub struct CompletionClient {
    /// HTTP client with configured timeout
    http_client: Client,
    config: GenerativeConfig,
    api_key: String,
}

impl CompletionClient {
    /// Create a client from configuration.
    ///
    /// Fails when generation is disabled or the API key variable is unset.
    pub fn from_config(config: &GenerativeConfig) -> AgentResult<Self> {
        if !config.enabled {
            return Err(AgentError::Disabled);
        }

        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AgentError::MissingApiKey(config.api_key_env.clone()))?;

        Self::with_api_key(config, api_key)
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(config: &GenerativeConfig, api_key: impl Into<String>) -> AgentResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
            api_key: api_key.into(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.endpoint.trim_end_matches('/'))
    }

    /// Send one system and user message and return the reply text.
    pub fn complete(&self, system: &str, user: &str) -> AgentResult<String> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .http_client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().unwrap_or_default();
            return Err(AgentError::ProviderError(format!(
                "{} returned {}: {}",
                self.config.endpoint,
                status.as_u16(),
                error_body.trim()
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| AgentError::ProviderError(format!("Failed to parse response: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AgentError::EmptyResponse)
    }
}

impl RecommendationSource for CompletionClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    fn generate(&self, request: &GenerationRequest) -> AgentResult<Vec<Recommendation>> {
        let user_prompt = prompt::build_prompt(request);
        log::debug!(
            "Requesting {} recommendations from {}",
            request.count,
            self.config.model
        );

        let reply = self.complete(prompt::SYSTEM_PROMPT, &user_prompt)?;
        let recommendations = parser::parse_recommendations(&reply, request.first_id);
        log::info!(
            "Parsed {} recommendations from {}",
            recommendations.len(),
            self.config.model
        );
        Ok(recommendations)
    }
}
