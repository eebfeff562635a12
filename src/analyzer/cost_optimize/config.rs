//! Configuration for recommendation generation and ranking.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Weights of the linear scoring function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight of the normalized savings term (0-100 scale)
    pub savings: f64,
    /// Weight of the risk ordinal (negative penalizes risk)
    pub risk: f64,
    /// Weight of the complexity ordinal (negative penalizes complexity)
    pub complexity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            savings: 0.5,
            risk: -0.3,
            complexity: -0.2,
        }
    }
}

/// Score bonuses for recommendations that match the analyzed workload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadBonuses {
    pub auto_scaling: f64,
    pub database: f64,
    pub storage: f64,
    pub cdn: f64,
    pub monitoring: f64,
    pub spot: f64,
    pub graviton: f64,
}

impl Default for WorkloadBonuses {
    fn default() -> Self {
        Self {
            auto_scaling: 15.0,
            database: 12.0,
            storage: 10.0,
            cdn: 12.0,
            monitoring: 8.0,
            spot: 15.0,
            graviton: 10.0,
        }
    }
}

/// Configuration for the optimization pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Title similarity above which two recommendations are duplicates (default: 0.6)
    pub similarity_threshold: f64,

    /// Savings at which the savings term saturates (default: 20000 INR)
    pub max_savings_inr: f64,

    /// Rules to ignore (by rule code)
    pub ignore_rules: Vec<String>,

    /// Number of quick wins put in the report (default: 3)
    pub quick_wins_top_n: usize,

    /// Number of high-impact recommendations shown (default: 3)
    pub high_impact_top_n: usize,

    pub weights: ScoringWeights,

    pub bonuses: WorkloadBonuses,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.6,
            max_savings_inr: 20_000.0,
            ignore_rules: Vec::new(),
            quick_wins_top_n: 3,
            high_impact_top_n: 3,
            weights: ScoringWeights::default(),
            bonuses: WorkloadBonuses::default(),
        }
    }
}

impl OptimizerConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deduplication similarity threshold.
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the savings saturation point.
    pub fn with_max_savings(mut self, max_savings_inr: f64) -> Self {
        self.max_savings_inr = max_savings_inr;
        self
    }

    /// Set the scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the workload bonuses.
    pub fn with_bonuses(mut self, bonuses: WorkloadBonuses) -> Self {
        self.bonuses = bonuses;
        self
    }

    /// Add a rule to ignore.
    pub fn ignore_rule(mut self, rule: impl Into<String>) -> Self {
        self.ignore_rules.push(rule.into());
        self
    }

    /// Check if a rule should be ignored.
    pub fn should_ignore_rule(&self, rule: &str) -> bool {
        self.ignore_rules.iter().any(|r| r.eq_ignore_ascii_case(rule))
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::InvalidValue {
                key: "optimizer.similarity_threshold".to_string(),
                reason: format!("must be within [0, 1], got {}", self.similarity_threshold),
            });
        }
        if !self.max_savings_inr.is_finite() || self.max_savings_inr <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "optimizer.max_savings_inr".to_string(),
                reason: format!("must be positive, got {}", self.max_savings_inr),
            });
        }
        Ok(())
    }
}
