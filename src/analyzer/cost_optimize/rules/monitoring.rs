//! COST-MON-001..002: monitoring and logging rules.

use super::{RecommendationRule, RuleContext, RuleDomain, codes, recommendation, steps};
use crate::analyzer::cost_optimize::config::OptimizerConfig;
use crate::analyzer::cost_optimize::types::{Level, Recommendation, Service};

const METRIC_SAMPLING_USERS: u64 = 50_000;

/// Rule: shorten retention of non-critical logs.
pub struct LogRetentionRule;

impl RecommendationRule for LogRetentionRule {
    fn code(&self) -> &'static str {
        codes::LOG_RETENTION
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Monitoring
    }

    fn title(&self) -> &'static str {
        "Optimize CloudWatch Log Retention"
    }

    fn description(&self) -> &'static str {
        "Suggest shorter retention periods for non-critical logs"
    }

    fn check(&self, ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        Some(recommendation(
            self.title(),
            Service::Monitoring,
            "Reduce log retention period for non-critical logs",
            ctx.estimate.service_costs.monitoring * 0.40,
            Level::Low,
            Level::Low,
            "Reduces storage costs while maintaining recent logs",
            steps(&[
                "Identify log groups and current retention",
                "Set 7-day retention for debug logs",
                "Set 30-day retention for application logs",
                "Archive important logs to S3",
            ]),
        ))
    }
}

/// Rule: sample high-volume metrics for large user bases.
pub struct MetricSamplingRule;

impl RecommendationRule for MetricSamplingRule {
    fn code(&self) -> &'static str {
        codes::METRIC_SAMPLING
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Monitoring
    }

    fn title(&self) -> &'static str {
        "Implement Metric Sampling"
    }

    fn description(&self) -> &'static str {
        "Suggest metric sampling for projects with more than 50,000 users"
    }

    fn check(&self, ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        if ctx.profile.expected_users <= METRIC_SAMPLING_USERS {
            return None;
        }

        Some(recommendation(
            self.title(),
            Service::Monitoring,
            "Sample metrics instead of logging every request",
            ctx.estimate.service_costs.monitoring * 0.30,
            Level::Low,
            Level::Medium,
            "Reduces monitoring costs with statistical accuracy",
            steps(&[
                "Implement 10% sampling for high-frequency metrics",
                "Keep 100% sampling for errors and exceptions",
                "Configure X-Ray sampling rules",
                "Validate accuracy with dashboards",
            ]),
        ))
    }
}
