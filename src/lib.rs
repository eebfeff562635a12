//! # Cloud Cost Optimizer
//!
//! Estimates the monthly cloud cost of a project profile, infers its usage
//! patterns, and ranks cost-optimization recommendations.
//!
//! ## Features
//!
//! - **Cost Estimation**: Per-service monthly cost from a regional pricing table
//! - **Usage Analysis**: Traffic, database, storage, scaling, CPU and memory tags
//! - **Rule Engine**: Deterministic recommendations with expected savings
//! - **Generative Merge**: Optional recommendations from an OpenAI-compatible model
//! - **Ranking**: Title deduplication, weighted scoring and risk filtering
//!
//! ## Example
//!
//! ```rust,no_run
//! use cloud_cost_optimizer::analyzer::cost_optimize::{CostOptimizer, ProjectProfile, summary_text};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = CostOptimizer::new().optimize(&ProjectProfile::example(), 15, true)?;
//! println!("{}", summary_text(&report));
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;

// Re-export commonly used types and functions
pub use analyzer::cost_optimize::{CostOptimizer, OptimizationReport, ProjectProfile};
pub use error::{OptimizerError, Result};
use cli::Commands;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Optimize {
            profile,
            num_recommendations,
            exclude_high_risk,
            format,
            output,
            llm,
            roadmap,
        } => {
            let options = handlers::OptimizeOptions {
                num_recommendations: usize::from(num_recommendations),
                include_high_risk: !exclude_high_risk,
                format: format.map(Into::into),
                output,
                llm,
                roadmap,
            };
            handlers::handle_optimize(&profile, options, config)
        }
        Commands::Estimate { profile, format } => {
            handlers::handle_estimate(&profile, format.map(Into::into), config)
        }
        Commands::Patterns { profile, format } => {
            handlers::handle_patterns(&profile, format.map(Into::into), config)
        }
        Commands::Example { format, output } => handlers::handle_example(format, output.as_deref()),
        Commands::Rules { json } => handlers::handle_rules(json, config),
        Commands::Config => handlers::handle_config(config),
    }
}
