//! Handler for the `optimize` command.
//!
//! Runs the full pipeline on a profile and renders the report. With `--llm`
//! (or `generative.enabled` in the configuration) the configured language
//! model contributes extra recommendations.

use super::{load_profile, write_output};
use crate::agent::CompletionClient;
use crate::analyzer::cost_optimize::{
    CostOptimizer, OutputFormat, build_insights, format_report_to_string,
};
use crate::config::types::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Configuration for the optimize command
pub struct OptimizeOptions {
    /// Number of recommendations to return
    pub num_recommendations: usize,
    /// Keep High-risk recommendations
    pub include_high_risk: bool,
    /// Output format (falls back to the configured format)
    pub format: Option<OutputFormat>,
    /// Output file
    pub output: Option<PathBuf>,
    /// Ask the language model for more recommendations
    pub llm: bool,
    /// Include the roadmap views
    pub roadmap: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            num_recommendations: 15,
            include_high_risk: true,
            format: None,
            output: None,
            llm: false,
            roadmap: false,
        }
    }
}

/// Build the optimizer described by the configuration.
pub fn build_optimizer(config: &Config, llm: bool) -> CostOptimizer {
    let optimizer = CostOptimizer::new()
        .with_config(config.optimizer.clone())
        .with_pricing(config.pricing.clone());

    if !(llm || config.generative.enabled) {
        return optimizer;
    }

    let mut generative = config.generative.clone();
    generative.enabled = true;
    match CompletionClient::from_config(&generative) {
        Ok(client) => {
            log::info!("Generative recommendations enabled ({})", generative.model);
            optimizer.with_source(Box::new(client))
        }
        Err(e) => {
            log::warn!("Continuing with rule-based recommendations only: {}", e);
            optimizer
        }
    }
}

/// Handle the `optimize` command.
pub fn handle_optimize(profile_path: &Path, options: OptimizeOptions, config: &Config) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let optimizer = build_optimizer(config, options.llm);

    let report = optimizer.optimize(
        &profile,
        options.num_recommendations,
        options.include_high_risk,
    )?;

    let insights = (options.roadmap || config.output.roadmap)
        .then(|| build_insights(&report, optimizer.config()));
    let format = options.format.unwrap_or(config.output.format);

    let rendered = format_report_to_string(&report, insights.as_ref(), format);
    write_output(options.output.as_deref(), &rendered)
}
