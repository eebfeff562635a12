//! Recommendation Ranker
//!
//! Scores candidates with a linear function of normalized savings, risk and
//! complexity plus workload-match bonuses, and provides the derived views used
//! by the report (quick wins, high impact, grouping, roadmap).

use super::config::OptimizerConfig;
use super::cost_estimator::round_cost;
use super::types::{
    DbLoad, Level, ProjectProfile, RankedRecommendation, Recommendation, Roadmap, Service,
    ServiceGroup, UsagePattern,
};
use crate::error::{OptimizerError, Result};

const CDN_BONUS_USERS: u64 = 50_000;
const MONITORING_BONUS_USERS: u64 = 100_000;

/// Scores and orders recommendations.
pub struct Ranker<'a> {
    config: &'a OptimizerConfig,
}

impl<'a> Ranker<'a> {
    pub fn new(config: &'a OptimizerConfig) -> Self {
        Self { config }
    }

    /// Score every candidate and sort by score, highest first.
    ///
    /// The sort is stable: equal scores keep their input order. Fails on the
    /// first candidate with an empty title or invalid savings.
    pub fn rank(
        &self,
        candidates: Vec<Recommendation>,
        profile: &ProjectProfile,
        pattern: &UsagePattern,
    ) -> Result<Vec<RankedRecommendation>> {
        let mut ranked = candidates
            .into_iter()
            .map(|rec| {
                rec.validate()
                    .map_err(|reason| OptimizerError::InvalidRecommendation { id: rec.id, reason })?;
                let score = self.score(&rec, profile, pattern);
                Ok(RankedRecommendation {
                    recommendation: rec,
                    score,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        log::info!("Ranked {} recommendations", ranked.len());
        Ok(ranked)
    }

    /// Score a single recommendation, rounded to 2 decimal places.
    pub fn score(&self, rec: &Recommendation, profile: &ProjectProfile, pattern: &UsagePattern) -> f64 {
        let weights = &self.config.weights;
        let base = normalized_savings(rec.expected_savings_inr, self.config.max_savings_inr)
            * weights.savings
            + f64::from(rec.risk.ordinal()) * weights.risk
            + f64::from(rec.complexity.ordinal()) * weights.complexity;

        round_cost(base + self.workload_bonus(rec, profile, pattern))
    }

    /// Bonus for recommendations that match the analyzed workload.
    ///
    /// Bonuses are additive; a recommendation may collect several.
    pub fn workload_bonus(
        &self,
        rec: &Recommendation,
        profile: &ProjectProfile,
        pattern: &UsagePattern,
    ) -> f64 {
        let bonuses = &self.config.bonuses;
        let title = rec.title.to_lowercase();
        let mut bonus = 0.0;

        if (title.contains("auto") || title.contains("scaling")) && pattern.scaling_need.is_elastic()
        {
            bonus += bonuses.auto_scaling;
        }

        if rec.service == Service::Rds && matches!(pattern.db_load, DbLoad::ReadHeavy | DbLoad::WriteHeavy)
        {
            bonus += bonuses.database;
        }

        if (rec.service == Service::Storage || title.contains("s3"))
            && (profile.any_feature_contains("image") || profile.any_feature_contains("upload"))
        {
            bonus += bonuses.storage;
        }

        if (title.contains("cdn") || title.contains("cloudfront"))
            && profile.expected_users > CDN_BONUS_USERS
        {
            bonus += bonuses.cdn;
        }

        if (rec.service == Service::Monitoring || title.contains("log"))
            && profile.expected_users > MONITORING_BONUS_USERS
        {
            bonus += bonuses.monitoring;
        }

        if title.contains("spot")
            && (profile.has_feature("analytics") || profile.any_feature_contains("batch"))
        {
            bonus += bonuses.spot;
        }

        if title.contains("arm") || title.contains("graviton") {
            bonus += bonuses.graviton;
        }

        bonus
    }
}

/// Savings on a 0-100 scale, saturating at `max_savings`.
fn normalized_savings(savings: f64, max_savings: f64) -> f64 {
    if max_savings <= 0.0 {
        return if savings > 0.0 { 100.0 } else { 0.0 };
    }
    (savings / max_savings).clamp(0.0, 1.0) * 100.0
}

// ============================================================================
// Derived Views
// ============================================================================

/// Keep recommendations whose risk does not exceed `max_risk`.
pub fn filter_by_risk<T: AsRef<Recommendation>>(recommendations: Vec<T>, max_risk: Level) -> Vec<T> {
    recommendations
        .into_iter()
        .filter(|rec| rec.as_ref().risk <= max_risk)
        .collect()
}

fn by_savings_desc<T: AsRef<Recommendation>>(recs: &mut [T]) {
    recs.sort_by(|a, b| {
        b.as_ref()
            .expected_savings_inr
            .total_cmp(&a.as_ref().expected_savings_inr)
    });
}

/// Low-risk, low-complexity recommendations with the highest savings.
pub fn quick_wins<T: AsRef<Recommendation> + Clone>(recommendations: &[T], top_n: usize) -> Vec<T> {
    let mut wins: Vec<T> = recommendations
        .iter()
        .filter(|rec| rec.as_ref().is_quick_win())
        .cloned()
        .collect();
    by_savings_desc(&mut wins);
    wins.truncate(top_n);
    wins
}

/// Recommendations with the highest savings regardless of risk.
pub fn high_impact<T: AsRef<Recommendation> + Clone>(recommendations: &[T], top_n: usize) -> Vec<T> {
    let mut sorted = recommendations.to_vec();
    by_savings_desc(&mut sorted);
    sorted.truncate(top_n);
    sorted
}

/// Group recommendations by service, groups ordered by first appearance.
pub fn group_by_service<T: AsRef<Recommendation> + Clone>(
    recommendations: &[T],
) -> Vec<ServiceGroup<T>> {
    let mut groups: Vec<ServiceGroup<T>> = Vec::new();

    for rec in recommendations {
        let service = rec.as_ref().service;
        match groups.iter_mut().find(|g| g.service == service) {
            Some(group) => group.recommendations.push(rec.clone()),
            None => groups.push(ServiceGroup {
                service,
                recommendations: vec![rec.clone()],
            }),
        }
    }

    groups
}

/// Sum of expected savings.
pub fn calculate_total_savings<T: AsRef<Recommendation>>(recommendations: &[T]) -> f64 {
    recommendations
        .iter()
        .map(|rec| rec.as_ref().expected_savings_inr)
        .sum()
}

/// Partition recommendations into implementation phases by effort.
pub fn implementation_roadmap<T: AsRef<Recommendation> + Clone>(recommendations: &[T]) -> Roadmap<T> {
    let mut roadmap = Roadmap::default();

    for rec in recommendations {
        let phase = match rec.as_ref().effort() {
            0..=2 => &mut roadmap.immediate,
            3..=4 => &mut roadmap.short_term,
            _ => &mut roadmap.long_term,
        };
        phase.push(rec.clone());
    }

    roadmap
}
