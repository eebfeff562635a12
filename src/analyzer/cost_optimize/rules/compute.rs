//! COST-CMP-001..004: EC2 compute rules.

use super::{RecommendationRule, RuleContext, RuleDomain, codes, recommendation, steps};
use crate::analyzer::cost_optimize::config::OptimizerConfig;
use crate::analyzer::cost_optimize::types::{CpuPattern, Level, Recommendation, Service};

/// Rule: elastic workloads should run in an Auto Scaling Group.
pub struct AutoScalingRule;

impl RecommendationRule for AutoScalingRule {
    fn code(&self) -> &'static str {
        codes::AUTO_SCALING
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Compute
    }

    fn title(&self) -> &'static str {
        "Implement Auto Scaling Group"
    }

    fn description(&self) -> &'static str {
        "Suggest an Auto Scaling Group when the workload needs elastic capacity"
    }

    fn check(&self, ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        if !ctx.pattern.scaling_need.is_elastic() {
            return None;
        }

        Some(recommendation(
            self.title(),
            Service::Ec2,
            "Replace fixed EC2 instances with Auto Scaling Group to handle variable load",
            ctx.estimate.service_costs.ec2 * 0.25,
            Level::Low,
            Level::Medium,
            "Reduces costs during low-traffic periods while maintaining performance during peaks",
            steps(&[
                "Create Auto Scaling Group with min 1, max 4 instances",
                "Set up target tracking scaling policy (CPU 70%)",
                "Configure scale-in protection for critical instances",
                "Test scaling behavior with load tests",
            ]),
        ))
    }
}

/// Rule: x86 instances with a cheaper ARM counterpart.
pub struct GravitonRule;

impl RecommendationRule for GravitonRule {
    fn code(&self) -> &'static str {
        codes::GRAVITON
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Compute
    }

    fn title(&self) -> &'static str {
        "Migrate to ARM-based Graviton Instances"
    }

    fn description(&self) -> &'static str {
        "Suggest ARM (Graviton) instances when the x86 type has a cheaper counterpart"
    }

    fn check(&self, ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        let infra = &ctx.profile.current_infra;
        let arm_type = ctx.pricing.arm_equivalent(&infra.instance_type)?;
        let arm_price = ctx.pricing.ec2_listed(&arm_type)?;

        let savings =
            (ctx.pricing.ec2_price(&infra.instance_type) - arm_price) * f64::from(infra.ec2_instances);

        Some(recommendation(
            self.title(),
            Service::Ec2,
            format!("Switch from {} to {}", infra.instance_type, arm_type),
            savings,
            Level::Low,
            Level::Low,
            "20% cost reduction with comparable performance",
            vec![
                "Verify application compatibility with ARM64".to_string(),
                "Update Docker images to multi-arch builds".to_string(),
                format!("Launch {arm_type} instances"),
                "Gradually migrate traffic using load balancer".to_string(),
            ],
        ))
    }
}

/// Rule: interruptible analytics and batch work belongs on spot capacity.
pub struct SpotInstancesRule;

impl RecommendationRule for SpotInstancesRule {
    fn code(&self) -> &'static str {
        codes::SPOT_INSTANCES
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Compute
    }

    fn title(&self) -> &'static str {
        "Use Spot Instances for Background Jobs"
    }

    fn description(&self) -> &'static str {
        "Suggest spot instances for analytics or batch workloads"
    }

    fn check(&self, ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        let profile = ctx.profile;
        if !profile.has_feature("analytics") && !profile.any_feature_contains("batch") {
            return None;
        }

        Some(recommendation(
            self.title(),
            Service::Ec2,
            "Run non-critical batch processing and analytics on spot instances",
            ctx.estimate.service_costs.ec2 * 0.40,
            Level::Medium,
            Level::Medium,
            "Up to 70% cost reduction for interruptible workloads",
            steps(&[
                "Identify fault-tolerant workloads",
                "Implement checkpointing for long-running jobs",
                "Create spot fleet request with multiple instance types",
                "Set up interruption handling",
            ]),
        ))
    }
}

/// Rule: moderate CPU usage leaves room for a smaller instance size.
pub struct DownsizeRule;

impl RecommendationRule for DownsizeRule {
    fn code(&self) -> &'static str {
        codes::DOWNSIZE_EC2
    }

    fn domain(&self) -> RuleDomain {
        RuleDomain::Compute
    }

    fn title(&self) -> &'static str {
        "Downsize EC2 Instances"
    }

    fn description(&self) -> &'static str {
        "Suggest the next smaller instance size for moderate CPU workloads"
    }

    fn check(&self, ctx: &RuleContext, _config: &OptimizerConfig) -> Option<Recommendation> {
        if ctx.pattern.cpu_pattern != CpuPattern::ModerateCpu {
            return None;
        }

        let infra = &ctx.profile.current_infra;
        let smaller = ctx.pricing.smaller_instance(&infra.instance_type)?;
        let smaller_price = ctx.pricing.ec2_listed(&smaller)?;
        let savings = (ctx.pricing.ec2_price(&infra.instance_type) - smaller_price)
            * f64::from(infra.ec2_instances);

        Some(recommendation(
            self.title(),
            Service::Ec2,
            format!("Reduce instance size from {} to {}", infra.instance_type, smaller),
            savings,
            Level::Medium,
            Level::Low,
            "May reduce capacity headroom, monitor closely",
            vec![
                "Monitor current CPU/memory utilization for 1 week".to_string(),
                format!("Launch test {smaller} instance"),
                "Run load tests to verify performance".to_string(),
                "Gradually migrate production traffic".to_string(),
            ],
        ))
    }
}
