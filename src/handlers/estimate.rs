//! Handler for the `estimate` command.

use super::{load_profile, write_output};
use crate::analyzer::cost_optimize::estimate_costs;
use crate::analyzer::cost_optimize::formatter::{OutputFormat, format_estimate_to_string};
use crate::config::types::Config;
use crate::error::Result;
use std::path::Path;

/// Handle the `estimate` command.
pub fn handle_estimate(profile_path: &Path, format: Option<OutputFormat>, config: &Config) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let estimate = estimate_costs(&profile, &config.pricing);
    let format = format.unwrap_or(config.output.format);
    write_output(None, &format_estimate_to_string(&estimate, format))
}
