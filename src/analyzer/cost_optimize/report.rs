//! Report assembly and the plain-text summary.

use super::config::OptimizerConfig;
use super::cost_estimator::{format_inr, service_cost_lines};
use super::ranker;
use super::types::{
    BudgetStatus, CostEstimate, OptimizationReport, ProjectProfile, RankedRecommendation,
    ReportInsights, UsagePattern,
};
use chrono::Utc;

const RULE_WIDTH: usize = 80;

/// Assemble the final report from the selected recommendations.
pub fn build_report(
    profile: &ProjectProfile,
    estimate: &CostEstimate,
    pattern: &UsagePattern,
    recommendations: Vec<RankedRecommendation>,
    config: &OptimizerConfig,
) -> OptimizationReport {
    let budget = profile.monthly_budget_inr as f64;
    let total_potential_savings = ranker::calculate_total_savings(&recommendations);
    let top_3_quick_wins = ranker::quick_wins(&recommendations, config.quick_wins_top_n);

    OptimizationReport {
        project: profile.project_name.clone(),
        budget,
        estimated_cost: estimate.total_monthly_cost,
        status: BudgetStatus::from_costs(estimate.total_monthly_cost, budget),
        cost_breakdown: estimate.service_costs,
        usage_patterns: pattern.clone(),
        recommendations,
        total_potential_savings,
        top_3_quick_wins,
        generated_at: Utc::now(),
    }
}

/// Planning views: high impact, per-service grouping and the effort roadmap.
pub fn build_insights(report: &OptimizationReport, config: &OptimizerConfig) -> ReportInsights {
    ReportInsights {
        high_impact: ranker::high_impact(&report.recommendations, config.high_impact_top_n),
        by_service: ranker::group_by_service(&report.recommendations),
        roadmap: ranker::implementation_roadmap(&report.recommendations),
    }
}

/// Human-readable summary of a report.
pub fn summary_text(report: &OptimizationReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        format!("Cloud Cost Optimization Report: {}", report.project),
        rule.clone(),
        String::new(),
        "Budget Overview:".to_string(),
        format!("   Monthly Budget: ₹{}", format_inr(report.budget)),
        format!("   Estimated Cost: ₹{}", format_inr(report.estimated_cost)),
        format!("   Status: {}", report.status),
    ];

    match report.status {
        BudgetStatus::WithinBudget => lines.push(format!(
            "   Remaining: ₹{}",
            format_inr(report.budget - report.estimated_cost)
        )),
        BudgetStatus::OverBudget => lines.push(format!(
            "   Over Budget: ₹{}",
            format_inr(report.estimated_cost - report.budget)
        )),
    }

    lines.push(String::new());
    lines.push("Cost Breakdown:".to_string());
    lines.extend(
        service_cost_lines(&report.cost_breakdown)
            .into_iter()
            .map(|line| format!("   {line}")),
    );

    lines.push(String::new());
    lines.push("Optimization Potential:".to_string());
    lines.push(format!(
        "   Total Potential Savings: ₹{}/month",
        format_inr(report.total_potential_savings)
    ));
    lines.push(format!(
        "   Number of Recommendations: {}",
        report.recommendations.len()
    ));

    if !report.top_3_quick_wins.is_empty() {
        lines.push(String::new());
        lines.push("Top Quick Wins:".to_string());
        for (i, ranked) in report.top_3_quick_wins.iter().enumerate() {
            let rec = &ranked.recommendation;
            lines.push(format!("   {}. {}", i + 1, rec.title));
            lines.push(format!(
                "      Savings: ₹{} | Risk: {} | Complexity: {}",
                format_inr(rec.expected_savings_inr),
                rec.risk,
                rec.complexity
            ));
        }
    }

    lines.push(String::new());
    lines.push(rule);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::cost_optimize::pricing::PricingTable;
    use crate::analyzer::cost_optimize::types::{Level, Recommendation, Service};
    use crate::analyzer::cost_optimize::{cost_estimator, usage_analyzer};

    fn ranked(id: u32, savings: f64, risk: Level) -> RankedRecommendation {
        RankedRecommendation {
            recommendation: Recommendation {
                id,
                title: format!("Recommendation {id}"),
                service: Service::General,
                description: String::new(),
                expected_savings_inr: savings,
                risk,
                complexity: Level::Low,
                impact: String::new(),
                implementation_steps: Vec::new(),
            },
            score: 0.0,
        }
    }

    fn report_for(profile: &ProjectProfile, recs: Vec<RankedRecommendation>) -> OptimizationReport {
        let estimate = cost_estimator::estimate_costs(profile, &PricingTable::default());
        let pattern = usage_analyzer::analyze(profile);
        build_report(profile, &estimate, &pattern, recs, &OptimizerConfig::default())
    }

    #[test]
    fn test_report_totals_and_quick_wins() {
        let recs = vec![
            ranked(1, 500.0, Level::Low),
            ranked(2, 2_000.0, Level::Medium),
            ranked(3, 800.0, Level::Low),
        ];
        let report = report_for(&ProjectProfile::example(), recs);

        assert_eq!(report.total_potential_savings, 3_300.0);
        let wins: Vec<_> = report
            .top_3_quick_wins
            .iter()
            .map(|r| r.recommendation.id)
            .collect();
        assert_eq!(wins, vec![3, 1]);
        assert_eq!(report.status, BudgetStatus::OverBudget);
        assert_eq!(report.budget, 50_000.0);
    }

    #[test]
    fn test_within_budget_summary() {
        let mut profile = ProjectProfile::example();
        profile.monthly_budget_inr = 1_000_000;
        let report = report_for(&profile, vec![ranked(1, 500.0, Level::Low)]);

        assert_eq!(report.status, BudgetStatus::WithinBudget);
        let text = summary_text(&report);
        assert!(text.contains("Cloud Cost Optimization Report: Food Delivery App"));
        assert!(text.contains("Status: Within Budget"));
        assert!(text.contains("   Remaining: ₹"));
        assert!(text.contains("   EC2: ₹56,000.00"));
        assert!(text.contains("Number of Recommendations: 1"));
        assert!(text.contains("1. Recommendation 1"));
    }

    #[test]
    fn test_insights() {
        let recs = vec![
            ranked(1, 500.0, Level::Low),
            ranked(2, 2_000.0, Level::High),
            ranked(3, 800.0, Level::Low),
            ranked(4, 100.0, Level::Medium),
        ];
        let report = report_for(&ProjectProfile::example(), recs);
        let insights = build_insights(&report, &OptimizerConfig::default());

        let ids: Vec<_> = insights.high_impact.iter().map(|r| r.recommendation.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(insights.by_service.len(), 1);
        assert_eq!(insights.by_service[0].recommendations.len(), 4);
        assert_eq!(insights.roadmap.immediate.len(), 2);
        assert_eq!(insights.roadmap.short_term.len(), 2);
        assert!(insights.roadmap.long_term.is_empty());
    }

    #[test]
    fn test_over_budget_summary() {
        let report = report_for(&ProjectProfile::example(), Vec::new());
        let text = summary_text(&report);
        assert!(text.contains("Status: Over Budget"));
        assert!(text.contains("   Over Budget: ₹"));
        assert!(!text.contains("Top Quick Wins"));
    }
}
