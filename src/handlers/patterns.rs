//! Handler for the `patterns` command.

use super::{load_profile, write_output};
use crate::analyzer::cost_optimize::formatter::{OutputFormat, format_pattern_to_string};
use crate::analyzer::cost_optimize::usage_analyzer;
use crate::config::types::Config;
use crate::error::Result;
use std::path::Path;

/// Handle the `patterns` command.
pub fn handle_patterns(profile_path: &Path, format: Option<OutputFormat>, config: &Config) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let pattern = usage_analyzer::analyze(&profile);
    let format = format.unwrap_or(config.output.format);
    write_output(None, &format_pattern_to_string(&pattern, format))
}
