//! COST-STO-001..003: object storage rules.

use super::{RecommendationRule, RuleContext, RuleDomain, codes, recommendation, steps};
use crate::analyzer::cost_optimize::config::OptimizerConfig;
use crate::analyzer::cost_optimize::types::{Level, Recommendation, Service, StorageAccess};

/// Rule: tier infrequently accessed objects down with lifecycle policies.
pub struct LifecyclePoliciesRule;

impl RecommendationRule for LifecyclePoliciesRule {
    fn code(&self) -> &'static str {
        codes::LIFECYCLE_POLICIES
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Storage
    }

    fn title(&self) -> &'static str {
        "Implement S3 Lifecycle Policies"
    }

    fn description(&self) -> &'static str {
        "Suggest lifecycle tiering when storage holds cold or rarely read data"
    }

    fn check(&self, ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        if !matches!(
            ctx.pattern.storage_access,
            StorageAccess::MixedHotCold | StorageAccess::OccasionalAccess
        ) {
            return None;
        }

        Some(recommendation(
            self.title(),
            Service::Storage,
            "Move infrequently accessed data to cheaper storage tiers",
            ctx.estimate.service_costs.storage * 0.60,
            Level::Low,
            Level::Low,
            "Significant storage cost reduction with minimal impact",
            steps(&[
                "Analyze object access patterns",
                "Create lifecycle policy: Standard -> IA after 30 days",
                "Archive to Glacier after 90 days",
                "Test retrieval times for critical data",
            ]),
        ))
    }
}

/// Rule: compress user uploads before storing them.
pub struct ImageCompressionRule;

impl RecommendationRule for ImageCompressionRule {
    fn code(&self) -> &'static str {
        codes::IMAGE_COMPRESSION
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Storage
    }

    fn title(&self) -> &'static str {
        "Enable Image Compression and Optimization"
    }

    fn description(&self) -> &'static str {
        "Suggest image compression for projects that accept uploads"
    }

    fn check(&self, ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        let profile = ctx.profile;
        if !profile.has_feature("image uploads") && !profile.any_feature_contains("upload") {
            return None;
        }

        Some(recommendation(
            self.title(),
            Service::Storage,
            "Compress and optimize images before storage",
            ctx.estimate.service_costs.storage * 0.30,
            Level::Low,
            Level::Medium,
            "Reduces storage and bandwidth costs",
            steps(&[
                "Implement server-side image optimization",
                "Use WebP format for supported browsers",
                "Generate multiple resolutions (thumbnails)",
                "Store compressed versions in S3",
            ]),
        ))
    }
}

/// Rule: let S3 move objects between access tiers.
pub struct IntelligentTieringRule;

impl RecommendationRule for IntelligentTieringRule {
    fn code(&self) -> &'static str {
        codes::INTELLIGENT_TIERING
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Storage
    }

    fn title(&self) -> &'static str {
        "Use S3 Intelligent-Tiering"
    }

    fn description(&self) -> &'static str {
        "Suggest S3 Intelligent-Tiering for automatic tier placement"
    }

    fn check(&self, ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        Some(recommendation(
            self.title(),
            Service::Storage,
            "Automatically move objects between access tiers",
            ctx.estimate.service_costs.storage * 0.40,
            Level::Low,
            Level::Low,
            "Automatic cost optimization with no retrieval fees",
            steps(&[
                "Enable Intelligent-Tiering on S3 bucket",
                "Configure archive access tiers",
                "Monitor cost savings in Cost Explorer",
                "No application changes required",
            ]),
        ))
    }
}
