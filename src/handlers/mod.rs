// Handler modules
pub mod estimate;
pub mod example;
pub mod optimize;
pub mod patterns;
pub mod rules;

// Re-export all handler functions
pub use estimate::handle_estimate;
pub use example::handle_example;
pub use optimize::{OptimizeOptions, handle_optimize};
pub use patterns::handle_patterns;
pub use rules::{handle_config, handle_rules};

use crate::analyzer::cost_optimize::types::ProjectProfile;
use crate::error::{ConfigError, OptimizerError, Result};
use std::fs;
use std::path::Path;

/// Load and validate a project profile, picking the format from the extension.
pub fn load_profile(path: &Path) -> Result<ProjectProfile> {
    let content = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let profile: ProjectProfile = match extension.as_str() {
        "json" => serde_json::from_str(&content)?,
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        "toml" => toml::from_str(&content)?,
        other => {
            let shown = if other.is_empty() { "<none>" } else { other };
            return Err(OptimizerError::UnsupportedFormat(shown.to_string()));
        }
    };

    profile.validate()?;
    log::debug!("Loaded profile '{}' from {}", profile.project_name, path.display());
    Ok(profile)
}

/// Write rendered output to a file, or print it.
pub(crate) fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!("Output written to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Serialize a value for a `--format` that only makes sense for data.
pub(crate) fn serialize_as(value: &impl serde::Serialize, extension: &str) -> Result<String> {
    match extension {
        "json" => Ok(serde_json::to_string_pretty(value)?),
        "yaml" => Ok(serde_yaml::to_string(value)?),
        "toml" => toml::to_string_pretty(value)
            .map_err(|e| ConfigError::ParsingFailed(e.to_string()).into()),
        other => Err(OptimizerError::UnsupportedFormat(other.to_string())),
    }
}
