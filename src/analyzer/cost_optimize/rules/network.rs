//! COST-NET-001..002: network and data transfer rules.

use super::{RecommendationRule, RuleContext, RuleDomain, codes, recommendation, steps};
use crate::analyzer::cost_optimize::config::OptimizerConfig;
use crate::analyzer::cost_optimize::types::{Level, Recommendation, Service};

/// Frontends that ship static bundles worth caching at the edge.
const SPA_FRONTENDS: &[&str] = &["react", "angular", "vue"];

/// Rule: serve single-page-app assets through a CDN.
pub struct CloudFrontRule;

impl RecommendationRule for CloudFrontRule {
    fn code(&self) -> &'static str {
        codes::CLOUDFRONT_CDN
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Network
    }

    fn title(&self) -> &'static str {
        "Enable CloudFront CDN"
    }

    fn description(&self) -> &'static str {
        "Suggest a CDN for SPA frontends that are served without one"
    }

    fn check(&self, ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        if ctx.profile.current_infra.cdn {
            return None;
        }

        let frontend = ctx.profile.tech_stack.frontend.to_lowercase();
        if !SPA_FRONTENDS.iter().any(|f| frontend.contains(f)) {
            return None;
        }

        Some(recommendation(
            self.title(),
            Service::Network,
            "Serve static assets through CDN",
            ctx.estimate.service_costs.data_transfer * 0.50,
            Level::Low,
            Level::Medium,
            "Reduces origin load and data transfer costs",
            steps(&[
                "Create CloudFront distribution",
                "Configure S3 bucket as origin",
                "Update DNS records",
                "Enable compression and caching",
            ]),
        ))
    }
}

/// Rule: route AWS service traffic through VPC endpoints.
pub struct VpcEndpointsRule;

impl RecommendationRule for VpcEndpointsRule {
    fn code(&self) -> &'static str {
        codes::VPC_ENDPOINTS
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Network
    }

    fn title(&self) -> &'static str {
        "Use VPC Endpoints for AWS Services"
    }

    fn description(&self) -> &'static str {
        "Suggest VPC endpoints to avoid NAT data transfer charges"
    }

    fn check(&self, ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        Some(recommendation(
            self.title(),
            Service::Network,
            "Eliminate data transfer costs for AWS service communication",
            ctx.estimate.service_costs.data_transfer * 0.30,
            Level::Low,
            Level::Low,
            "Removes NAT gateway data transfer charges",
            steps(&[
                "Create VPC endpoints for S3, DynamoDB",
                "Update route tables",
                "Test connectivity from private subnets",
                "Monitor cost reduction",
            ]),
        ))
    }
}
