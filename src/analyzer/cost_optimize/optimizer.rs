//! End-to-end optimization pipeline.
//!
//! Profile → estimate → usage pattern → rule recommendations (+ generative
//! recommendations) → dedup → rank → risk filter → truncate → report.

use super::config::OptimizerConfig;
use super::cost_estimator::estimate_costs;
use super::dedup::deduplicate;
use super::pricing::PricingTable;
use super::ranker::{self, Ranker};
use super::report::build_report;
use super::rules::{RuleContext, generate_recommendations};
use super::types::{
    CostEstimate, Level, OptimizationReport, OptimizationRequest, ProjectProfile, Recommendation,
    UsagePattern,
};
use super::usage_analyzer;
use crate::agent::{GenerationRequest, RecommendationSource};
use crate::error::Result;

/// Least number of generative recommendations asked for.
const MIN_GENERATED: usize = 5;
/// Rule titles the generative source is told not to repeat.
const AVOID_TITLES: usize = 5;

/// Runs the optimization pipeline for one profile at a time.
pub struct CostOptimizer {
    config: OptimizerConfig,
    pricing: PricingTable,
    source: Option<Box<dyn RecommendationSource>>,
}

impl Default for CostOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CostOptimizer {
    /// Create an optimizer with default configuration and pricing, rules only.
    pub fn new() -> Self {
        Self {
            config: OptimizerConfig::default(),
            pricing: PricingTable::default(),
            source: None,
        }
    }

    pub fn with_config(mut self, config: OptimizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_pricing(mut self, pricing: PricingTable) -> Self {
        self.pricing = pricing;
        self
    }

    /// Merge recommendations from a generative source.
    pub fn with_source(mut self, source: Box<dyn RecommendationSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Estimate monthly costs only.
    pub fn estimate(&self, profile: &ProjectProfile) -> CostEstimate {
        estimate_costs(profile, &self.pricing)
    }

    /// Produce a ranked optimization report.
    ///
    /// `num_recommendations` must lie within [5, 20]. When `include_high_risk`
    /// is false, High-risk recommendations are dropped before truncation.
    pub fn optimize(
        &self,
        profile: &ProjectProfile,
        num_recommendations: usize,
        include_high_risk: bool,
    ) -> Result<OptimizationReport> {
        let request = OptimizationRequest {
            profile: profile.clone(),
            num_recommendations,
            include_high_risk,
        };
        self.run(&request)
    }

    /// Produce a report for a validated request.
    pub fn run(&self, request: &OptimizationRequest) -> Result<OptimizationReport> {
        request.validate()?;
        self.config.validate()?;

        let profile = &request.profile;
        log::info!("Optimizing costs for {}", profile.project_name);

        let estimate = estimate_costs(profile, &self.pricing);
        log::info!(
            "Estimated monthly cost ₹{:.2} against budget ₹{}",
            estimate.total_monthly_cost,
            profile.monthly_budget_inr
        );

        let pattern = usage_analyzer::analyze(profile);

        let ctx = RuleContext {
            profile,
            estimate: &estimate,
            pattern: &pattern,
            pricing: &self.pricing,
        };
        let mut candidates = generate_recommendations(&ctx, &self.config);
        let rule_count = candidates.len();

        let generated = self.generated(
            profile,
            &estimate,
            &pattern,
            &candidates,
            request.num_recommendations,
        );
        candidates.extend(generated);

        let candidates = deduplicate(candidates, self.config.similarity_threshold);
        let mut ranked = Ranker::new(&self.config).rank(candidates, profile, &pattern)?;

        if !request.include_high_risk {
            ranked = ranker::filter_by_risk(ranked, Level::Medium);
        }
        ranked.truncate(request.num_recommendations);

        log::info!(
            "Selected {} recommendations ({} from rules)",
            ranked.len(),
            rule_count
        );

        Ok(build_report(profile, &estimate, &pattern, ranked, &self.config))
    }

    /// Ask the generative source for more candidates; failures yield none.
    fn generated(
        &self,
        profile: &ProjectProfile,
        estimate: &CostEstimate,
        pattern: &UsagePattern,
        rule_recommendations: &[Recommendation],
        num_recommendations: usize,
    ) -> Vec<Recommendation> {
        let Some(source) = &self.source else {
            return Vec::new();
        };

        let request = GenerationRequest {
            profile,
            estimate,
            pattern,
            count: num_recommendations
                .saturating_sub(rule_recommendations.len())
                .max(MIN_GENERATED),
            avoid_titles: rule_recommendations
                .iter()
                .take(AVOID_TITLES)
                .map(|r| r.title.clone())
                .collect(),
            first_id: rule_recommendations.len() as u32 + 1,
        };

        match source.generate(&request) {
            Ok(recommendations) => {
                log::info!(
                    "{} proposed {} recommendations",
                    source.name(),
                    recommendations.len()
                );
                recommendations
            }
            Err(e) => {
                log::warn!("{} failed, using rule-based recommendations only: {}", source.name(), e);
                Vec::new()
            }
        }
    }
}
