//! Cloud Cost Optimization Analyzer
//!
//! Estimates the monthly cloud cost of a described project, infers workload
//! usage characteristics from declarative hints, and produces a ranked list of
//! cost-optimization recommendations.
//!
//! # Pipeline
//!
//! 1. **Cost estimation** - per-service monthly cost from a regional pricing table
//! 2. **Usage analysis** - traffic, database, storage, scaling, CPU and memory tags
//! 3. **Rule generation** - deterministic recommendations (COST-CMP-001 ... COST-MON-002)
//! 4. **Generative merge** - optional free-text recommendations from a language model
//! 5. **Dedup and ranking** - title-similarity dedup, weighted scoring, risk filter
//! 6. **Report** - budget status, savings totals, quick wins
//!
//! # Example
//!
//! ```rust,ignore
//! use cloud_cost_optimizer::analyzer::cost_optimize::{CostOptimizer, ProjectProfile};
//!
//! let optimizer = CostOptimizer::new();
//! let report = optimizer.optimize(&ProjectProfile::example(), 15, true)?;
//! println!("{}", cloud_cost_optimizer::analyzer::cost_optimize::summary_text(&report));
//! ```

// ============================================================================
// Core modules
// ============================================================================

/// Configuration for deduplication and scoring.
pub mod config;

/// Core data types.
pub mod types;

/// Regional pricing table.
pub mod pricing;

/// Output formatting (table, JSON, YAML, summary).
pub mod formatter;

/// Deterministic recommendation rules.
pub mod rules;

// ============================================================================
// Pipeline stages
// ============================================================================

pub mod cost_estimator;
pub mod dedup;
pub mod optimizer;
pub mod ranker;
pub mod report;
pub mod usage_analyzer;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{OptimizerConfig, ScoringWeights, WorkloadBonuses};
pub use cost_estimator::{estimate_costs, format_inr};
pub use formatter::{OutputFormat, format_report, format_report_to_string};
pub use optimizer::CostOptimizer;
pub use pricing::PricingTable;
pub use ranker::Ranker;
pub use report::{build_insights, summary_text};
pub use types::{
    BudgetStatus, CostEstimate, Level, OptimizationReport, OptimizationRequest, ProjectProfile,
    RankedRecommendation, Recommendation, Region, ReportInsights, Service, TrafficPattern,
    UsagePattern,
};
pub use usage_analyzer::analyze as analyze_usage;
