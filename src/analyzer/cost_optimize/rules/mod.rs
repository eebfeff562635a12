//! Deterministic cost-optimization rules.
//!
//! Rules are grouped by domain (compute, database, storage, network,
//! monitoring) and identified by codes like COST-CMP-001. Each rule inspects
//! the profile, its cost estimate and its usage pattern, and proposes at most
//! one recommendation.

mod compute;
mod database;
mod monitoring;
mod network;
mod storage;

use super::config::OptimizerConfig;
use super::cost_estimator::round_cost;
use super::pricing::PricingTable;
use super::types::{CostEstimate, Level, ProjectProfile, Recommendation, Service, UsagePattern};
use serde::Serialize;
use std::fmt;

// ============================================================================
// Rule Trait
// ============================================================================

/// Trait for cost-optimization rules.
pub trait RecommendationRule: Send + Sync {
    /// Get the rule code (e.g., "COST-CMP-001").
    fn code(&self) -> &'static str;

    /// Domain the rule belongs to.
    fn domain(&self) -> RuleDomain;

    /// Title of the recommendation the rule proposes.
    fn title(&self) -> &'static str;

    /// Get the rule description.
    fn description(&self) -> &'static str;

    /// Check if this rule applies and propose a recommendation if so.
    ///
    /// The returned recommendation's id is assigned by
    /// [`generate_recommendations`].
    fn check(&self, ctx: &RuleContext, config: &OptimizerConfig) -> Option<Recommendation>;
}

/// Context for rule evaluation.
pub struct RuleContext<'a> {
    pub profile: &'a ProjectProfile,
    pub estimate: &'a CostEstimate,
    pub pattern: &'a UsagePattern,
    pub pricing: &'a PricingTable,
}

/// Rule domain, evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleDomain {
    Compute,
    Database,
    Storage,
    Network,
    Monitoring,
}

impl RuleDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compute => "compute",
            Self::Database => "database",
            Self::Storage => "storage",
            Self::Network => "network",
            Self::Monitoring => "monitoring",
        }
    }
}

impl fmt::Display for RuleDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Rule Codes
// ============================================================================

/// Rule code constants.
pub mod codes {
    pub const AUTO_SCALING: &str = "COST-CMP-001";
    pub const GRAVITON: &str = "COST-CMP-002";
    pub const SPOT_INSTANCES: &str = "COST-CMP-003";
    pub const DOWNSIZE_EC2: &str = "COST-CMP-004";
    pub const READ_REPLICAS: &str = "COST-DB-001";
    pub const CONNECTION_POOLING: &str = "COST-DB-002";
    pub const STORAGE_AUTOSCALING: &str = "COST-DB-003";
    pub const LIFECYCLE_POLICIES: &str = "COST-STO-001";
    pub const IMAGE_COMPRESSION: &str = "COST-STO-002";
    pub const INTELLIGENT_TIERING: &str = "COST-STO-003";
    pub const CLOUDFRONT_CDN: &str = "COST-NET-001";
    pub const VPC_ENDPOINTS: &str = "COST-NET-002";
    pub const LOG_RETENTION: &str = "COST-MON-001";
    pub const METRIC_SAMPLING: &str = "COST-MON-002";
}

// ============================================================================
// Rule Registry
// ============================================================================

/// Get all available rules in evaluation order.
pub fn all_rules() -> Vec<Box<dyn RecommendationRule>> {
    vec![
        Box::new(compute::AutoScalingRule),
        Box::new(compute::GravitonRule),
        Box::new(compute::SpotInstancesRule),
        Box::new(compute::DownsizeRule),
        Box::new(database::ReadReplicasRule),
        Box::new(database::ConnectionPoolingRule),
        Box::new(database::StorageAutoscalingRule),
        Box::new(storage::LifecyclePoliciesRule),
        Box::new(storage::ImageCompressionRule),
        Box::new(storage::IntelligentTieringRule),
        Box::new(network::CloudFrontRule),
        Box::new(network::VpcEndpointsRule),
        Box::new(monitoring::LogRetentionRule),
        Box::new(monitoring::MetricSamplingRule),
    ]
}

/// Get rule description by code.
pub fn rule_description(code: &str) -> &'static str {
    all_rules()
        .iter()
        .find(|rule| rule.code().eq_ignore_ascii_case(code))
        .map_or("Unknown rule", |rule| rule.description())
}

// ============================================================================
// Recommendation Generation
// ============================================================================

/// Generate rule-based recommendations for a project.
///
/// Ids start at 1 for every call. The database domain is skipped entirely
/// when the project has no managed database.
pub fn generate_recommendations(ctx: &RuleContext, config: &OptimizerConfig) -> Vec<Recommendation> {
    let has_database = ctx.profile.current_infra.rds.is_some();
    let mut recommendations = Vec::new();
    let mut next_id = 1;

    for rule in all_rules() {
        if rule.domain() == RuleDomain::Database && !has_database {
            continue;
        }

        // Skip if rule is ignored
        if config.should_ignore_rule(rule.code()) {
            continue;
        }

        if let Some(mut rec) = rule.check(ctx, config) {
            log::debug!(
                "Rule {} fired: {} (₹{:.2})",
                rule.code(),
                rec.title,
                rec.expected_savings_inr
            );
            rec.id = next_id;
            next_id += 1;
            recommendations.push(rec);
        }
    }

    log::info!("Generated {} rule-based recommendations", recommendations.len());
    recommendations
}

/// Shared constructor for rule output.
///
/// Savings are clamped at zero and rounded to 2 decimal places.
#[allow(clippy::too_many_arguments)]
fn recommendation(
    title: &str,
    service: Service,
    description: impl Into<String>,
    savings: f64,
    risk: Level,
    complexity: Level,
    impact: &str,
    steps: Vec<String>,
) -> Recommendation {
    Recommendation {
        id: 0,
        title: title.to_string(),
        service,
        description: description.into(),
        expected_savings_inr: round_cost(savings.max(0.0)),
        risk,
        complexity,
        impact: impact.to_string(),
        implementation_steps: steps,
    }
}

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// Re-export rule implementations for direct access
pub use compute::{AutoScalingRule, DownsizeRule, GravitonRule, SpotInstancesRule};
pub use database::{ConnectionPoolingRule, ReadReplicasRule, StorageAutoscalingRule};
pub use monitoring::{LogRetentionRule, MetricSamplingRule};
pub use network::{CloudFrontRule, VpcEndpointsRule};
pub use storage::{ImageCompressionRule, IntelligentTieringRule, LifecyclePoliciesRule};
