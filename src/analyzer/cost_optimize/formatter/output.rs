//! Output formatting for optimization reports.
//!
//! Supports multiple output formats: table, JSON, YAML, and plain text.

use crate::analyzer::cost_optimize::cost_estimator::{cost_breakdown_lines, format_inr};
use crate::analyzer::cost_optimize::report::summary_text;
use crate::analyzer::cost_optimize::types::{
    BudgetStatus, CostEstimate, Level, OptimizationReport, RankedRecommendation, ReportInsights,
    UsagePattern,
};
use crate::analyzer::cost_optimize::usage_analyzer::pattern_summary;
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

const HEAVY_RULE: &str =
    "═══════════════════════════════════════════════════════════════════════════════════════════════════";
const BOX_BOTTOM: &str =
    "└───────────────────────────────────────────────────────────────────────────────────────────────────┘";
const BOX_WIDTH: usize = 101;

// ============================================================================
// Output Format
// ============================================================================

/// Output format for optimization reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored box table (default)
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// Plain text summary
    Summary,
}

impl OutputFormat {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "summary" | "text" => Some(Self::Summary),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct ReportWithInsights<'a> {
    #[serde(flatten)]
    report: &'a OptimizationReport,
    insights: &'a ReportInsights,
}

// ============================================================================
// Formatting Functions
// ============================================================================

/// Format an optimization report to string.
///
/// When `insights` is given, the planning views are appended to table and
/// summary output and embedded under `insights` in JSON and YAML.
pub fn format_report_to_string(
    report: &OptimizationReport,
    insights: Option<&ReportInsights>,
    format: OutputFormat,
) -> String {
    match (format, insights) {
        (OutputFormat::Table, _) => format_table(report, insights),
        (OutputFormat::Json, Some(insights)) => to_json(&ReportWithInsights { report, insights }),
        (OutputFormat::Json, None) => to_json(report),
        (OutputFormat::Yaml, Some(insights)) => to_yaml(&ReportWithInsights { report, insights }),
        (OutputFormat::Yaml, None) => to_yaml(report),
        (OutputFormat::Summary, _) => {
            let mut text = summary_text(report);
            if let Some(insights) = insights {
                text.push_str("\n\n");
                text.push_str(&roadmap_text(insights));
            }
            text
        }
    }
}

/// Format and print an optimization report.
pub fn format_report(report: &OptimizationReport, insights: Option<&ReportInsights>, format: OutputFormat) {
    println!("{}", format_report_to_string(report, insights, format));
}

/// Format a standalone cost estimate.
pub fn format_estimate_to_string(estimate: &CostEstimate, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => format_estimate_table(estimate),
        OutputFormat::Json => to_json(estimate),
        OutputFormat::Yaml => to_yaml(estimate),
        OutputFormat::Summary => {
            let mut lines = vec!["Cost Breakdown:".to_string()];
            lines.extend(cost_breakdown_lines(estimate).into_iter().map(|l| format!("   {l}")));
            lines.push(format!(
                "Total: ₹{} of ₹{} ({:.1}% of budget)",
                format_inr(estimate.total_monthly_cost),
                format_inr(estimate.budget),
                estimate.budget_utilization_percent
            ));
            lines.join("\n")
        }
    }
}

/// Format a standalone usage pattern analysis.
pub fn format_pattern_to_string(pattern: &UsagePattern, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => format_pattern_table(pattern),
        OutputFormat::Json => to_json(pattern),
        OutputFormat::Yaml => to_yaml(pattern),
        OutputFormat::Summary => pattern_summary(pattern),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

fn to_yaml<T: Serialize + ?Sized>(value: &T) -> String {
    serde_yaml::to_string(value).unwrap_or_else(|_| "".to_string())
}

// ============================================================================
// Table Format
// ============================================================================

fn box_top(title: &str) -> String {
    let label = format!("┌─ {} ", title);
    let fill = BOX_WIDTH.saturating_sub(label.chars().count() + 1);
    format!("{}{}┐", label, "─".repeat(fill))
}

fn risk_colored(level: Level) -> ColoredString {
    match level {
        Level::Low => level.as_str().green(),
        Level::Medium => level.as_str().yellow(),
        Level::High => level.as_str().red(),
    }
}

fn format_table(report: &OptimizationReport, insights: Option<&ReportInsights>) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!("\n{}\n", HEAVY_RULE.bright_blue()));
    output.push_str(&format!(
        "{}\n",
        format!("💰 CLOUD COST OPTIMIZATION REPORT: {}", report.project)
            .bright_white()
            .bold()
    ));
    output.push_str(&format!("{}\n\n", HEAVY_RULE.bright_blue()));

    output.push_str(&format_budget_section(report));

    // Recommendations section
    if report.has_recommendations() {
        output.push_str(&format!("\n{}\n", box_top("Recommendations").bright_blue()));

        for (i, ranked) in report.recommendations.iter().enumerate() {
            output.push_str(&format_recommendation(i + 1, ranked));

            if i < report.recommendations.len() - 1 {
                output.push_str(&format!(
                    "│{}",
                    "────────────────────────────────────────────────────────────────────────────────────────────\n"
                        .dimmed()
                ));
            }
        }

        output.push_str(&format!("{}\n", BOX_BOTTOM.bright_blue()));
    } else {
        output.push_str(&format!(
            "\n{}\n",
            "✅ No optimization opportunities found for this profile.".green()
        ));
    }

    if !report.top_3_quick_wins.is_empty() {
        output.push_str(&format!("\n{}\n", box_top("Quick Wins").bright_blue()));
        for (i, ranked) in report.top_3_quick_wins.iter().enumerate() {
            let rec = &ranked.recommendation;
            output.push_str(&format!(
                "│ {}. {} {}\n",
                i + 1,
                rec.title.bright_white(),
                format!("₹{}/month", format_inr(rec.expected_savings_inr)).green()
            ));
        }
        output.push_str(&format!("{}\n", BOX_BOTTOM.bright_blue()));
    }

    if let Some(insights) = insights {
        output.push_str(&format_insights_section(insights));
    }

    // Footer
    output.push_str(&format!("\n{}\n", HEAVY_RULE.bright_blue()));

    output
}

fn format_budget_section(report: &OptimizationReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", box_top("Budget").bright_blue()));

    let status = match report.status {
        BudgetStatus::WithinBudget => report.status.as_str().green(),
        BudgetStatus::OverBudget => report.status.as_str().red(),
    };

    output.push_str(&format!(
        "│ {} ₹{}     {} ₹{}     {} {}\n",
        "Budget:".dimmed(),
        format_inr(report.budget).bright_white(),
        "Estimated:".dimmed(),
        format_inr(report.estimated_cost).bright_white(),
        "Status:".dimmed(),
        status.bold(),
    ));

    for (name, cost) in report.cost_breakdown.named() {
        if cost > 0.0 {
            output.push_str(&format!(
                "│   {:<16} ₹{}\n",
                name.cyan(),
                format_inr(cost)
            ));
        }
    }

    output.push_str(&format!(
        "│ {} {}/month across {} recommendations\n",
        "Potential savings:".dimmed(),
        format!("₹{}", format_inr(report.total_potential_savings)).green(),
        report.recommendations.len()
    ));

    output.push_str(&format!(
        "│ {} {}\n",
        "Generated:".dimmed(),
        report
            .generated_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .dimmed()
    ));

    output.push_str(&format!("{}\n", BOX_BOTTOM.bright_blue()));

    output
}

fn format_recommendation(rank: usize, ranked: &RankedRecommendation) -> String {
    let rec = &ranked.recommendation;
    let mut output = String::new();

    output.push_str(&format!(
        "│\n│ {} {} {} {}\n",
        format!("#{}", rank).bright_white().bold(),
        format!("[{}]", rec.service).bright_cyan(),
        rec.title.bright_white(),
        format!("(score {:.2})", ranked.score).dimmed()
    ));

    output.push_str(&format!(
        "│   {} {}     {} {}     {} {}\n",
        "Savings:".dimmed(),
        format!("₹{}/month", format_inr(rec.expected_savings_inr)).green(),
        "Risk:".dimmed(),
        risk_colored(rec.risk),
        "Complexity:".dimmed(),
        risk_colored(rec.complexity),
    ));

    if !rec.description.is_empty() {
        output.push_str(&format!("│   {}\n", rec.description));
    }
    if !rec.impact.is_empty() {
        output.push_str(&format!("│   {} {}\n", "Impact:".dimmed(), rec.impact));
    }

    if !rec.implementation_steps.is_empty() {
        output.push_str(&format!("│   {}\n", "Steps:".dimmed()));
        for (i, step) in rec.implementation_steps.iter().enumerate() {
            output.push_str(&format!("│     {}. {}\n", i + 1, step));
        }
    }

    output
}

fn format_insights_section(insights: &ReportInsights) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{}\n", box_top("Implementation Roadmap").bright_blue()));

    let phases: [(&str, &[RankedRecommendation]); 3] = [
        ("Immediate", &insights.roadmap.immediate),
        ("Short term", &insights.roadmap.short_term),
        ("Long term", &insights.roadmap.long_term),
    ];
    for (label, recs) in phases {
        output.push_str(&format!("│ {} ({})\n", label.bright_white().bold(), recs.len()));
        for ranked in recs {
            output.push_str(&format!("│   • {}\n", ranked.recommendation.title));
        }
    }

    if !insights.high_impact.is_empty() {
        output.push_str(&format!("│\n│ {}\n", "High impact".bright_white().bold()));
        for ranked in &insights.high_impact {
            let rec = &ranked.recommendation;
            output.push_str(&format!(
                "│   • {} {}\n",
                rec.title,
                format!("₹{}/month", format_inr(rec.expected_savings_inr)).green()
            ));
        }
    }

    if !insights.by_service.is_empty() {
        output.push_str(&format!("│\n│ {}\n", "By service".bright_white().bold()));
        for group in &insights.by_service {
            output.push_str(&format!(
                "│   {:<12} {}\n",
                group.service.as_str().cyan(),
                group.recommendations.len()
            ));
        }
    }

    output.push_str(&format!("{}\n", BOX_BOTTOM.bright_blue()));

    output
}

fn format_estimate_table(estimate: &CostEstimate) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", box_top("Monthly Cost Estimate").bright_blue()));
    for (name, cost) in estimate.service_costs.named() {
        output.push_str(&format!("│   {:<16} ₹{}\n", name.cyan(), format_inr(cost)));
    }
    output.push_str(&format!(
        "│ {} ₹{}     {} ₹{}     {} {:.1}%\n",
        "Total:".dimmed(),
        format_inr(estimate.total_monthly_cost).bright_white(),
        "Budget:".dimmed(),
        format_inr(estimate.budget),
        "Utilization:".dimmed(),
        estimate.budget_utilization_percent,
    ));

    let remaining = if estimate.is_within_budget() {
        format!("₹{}", format_inr(estimate.remaining_budget)).green()
    } else {
        format!("₹{}", format_inr(estimate.remaining_budget)).red()
    };
    output.push_str(&format!("│ {} {}\n", "Remaining:".dimmed(), remaining));
    output.push_str(&format!("{}\n", BOX_BOTTOM.bright_blue()));

    output
}

fn format_pattern_table(pattern: &UsagePattern) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", box_top("Usage Patterns").bright_blue()));
    let rows = [
        ("Traffic", pattern.traffic_type.as_str()),
        ("Database", pattern.db_load.as_str()),
        ("Storage", pattern.storage_access.as_str()),
        ("Scaling", pattern.scaling_need.as_str()),
        ("CPU", pattern.cpu_pattern.as_str()),
        ("Memory", pattern.memory_pattern.as_str()),
    ];
    for (label, value) in rows {
        output.push_str(&format!("│ {:<12} {}\n", label.dimmed(), value.bright_white()));
    }
    if let Some(hours) = &pattern.peak_hours {
        let hours: Vec<String> = hours.iter().map(|h| format!("{:02}:00", h)).collect();
        output.push_str(&format!(
            "│ {:<12} {}\n",
            "Peak hours".dimmed(),
            hours.join(", ").yellow()
        ));
    }
    output.push_str(&format!("{}\n", BOX_BOTTOM.bright_blue()));

    output
}

// ============================================================================
// Summary Format
// ============================================================================

fn roadmap_text(insights: &ReportInsights) -> String {
    let mut lines = vec!["Implementation Roadmap:".to_string()];
    let phases: [(&str, &[RankedRecommendation]); 3] = [
        ("Immediate", &insights.roadmap.immediate),
        ("Short term", &insights.roadmap.short_term),
        ("Long term", &insights.roadmap.long_term),
    ];
    for (label, recs) in phases {
        lines.push(format!("   {} ({}):", label, recs.len()));
        lines.extend(
            recs.iter()
                .map(|r| format!("      - {}", r.recommendation.title)),
        );
    }
    lines.join("\n")
}

// ============================================================================
// Tests
// ============================================================================
