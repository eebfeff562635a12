use crate::analyzer::cost_optimize::config::OptimizerConfig;
use crate::analyzer::cost_optimize::formatter::OutputFormat;
use crate::analyzer::cost_optimize::pricing::PricingTable;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub optimizer: OptimizerConfig,
    pub pricing: PricingTable,
    pub generative: GenerativeConfig,
    pub output: OutputConfig,
}

/// Generative recommendation source configuration
///
/// Any OpenAI-compatible chat completions endpoint works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerativeConfig {
    /// Ask the model for additional recommendations
    pub enabled: bool,
    /// Base URL of the API (the client appends `/chat/completions`)
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 60,
            temperature: 0.7,
            top_p: 0.9,
            max_tokens: 2048,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default format when `--format` is not given
    pub format: OutputFormat,
    /// Show the implementation roadmap in table output
    pub roadmap: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            roadmap: false,
        }
    }
}
