//! Error types for the cost optimizer.
//!
//! Profile validation, configuration and I/O failures surface here. Failures of
//! the generative recommendation source live in [`crate::agent::AgentError`] and
//! never reach this type: the optimizer absorbs them.

use thiserror::Error;

/// Crate-wide error.
#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid project profile: {0}")]
    Validation(#[from] ValidationError),

    /// A candidate recommendation violates the ranker's input contract.
    #[error("Invalid recommendation #{id}: {reason}")]
    InvalidRecommendation { id: u32, reason: String },

    #[error("Unsupported profile format: {0} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat(String),
}

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParsingFailed(String),

    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Errors raised by request-boundary validation.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("project name must not be empty")]
    EmptyProjectName,

    #[error("instance type must not be empty")]
    EmptyInstanceType,

    #[error("num_recommendations must be between {min} and {max}, got {value}")]
    RecommendationCountOutOfRange { value: usize, min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, OptimizerError>;
