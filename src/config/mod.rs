pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".costopt.toml";

/// Get the global config file path (~/.costopt.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (project/.costopt.toml)
pub fn local_config_path(project_path: &Path) -> PathBuf {
    project_path.join(CONFIG_FILE_NAME)
}

/// Load configuration from file or use defaults
/// Checks local config first, then global config
pub fn load_config(project_path: Option<&Path>) -> Result<types::Config> {
    let candidates = project_path
        .map(local_config_path)
        .into_iter()
        .chain(global_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                log::debug!("Loaded configuration from {}", path.display());
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
        }
    }

    Ok(types::Config::default())
}

/// Load configuration from an explicit file
///
/// Unlike [`load_config`], a missing or malformed file is an error.
pub fn load_config_file(path: &Path) -> Result<types::Config> {
    let content = fs::read_to_string(path)?;
    let config: types::Config =
        toml::from_str(&content).map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;
    config.optimizer.validate()?;
    Ok(config)
}

/// Render a configuration as TOML
pub fn to_toml(config: &types::Config) -> Result<String> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParsingFailed(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_config_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(
            local_config_path(dir.path()),
            "[optimizer]\nsimilarity_threshold = 0.75\n\n[generative]\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = load_config(Some(dir.path())).unwrap();
        assert_eq!(config.optimizer.similarity_threshold, 0.75);
        assert_eq!(config.generative.timeout_secs, 5);
        assert!(!config.generative.enabled);
        assert_eq!(config.pricing.ec2_price("t3.medium"), 28_000.0);
    }

    #[test]
    fn test_explicit_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "optimizer = 3").unwrap();
        assert!(load_config_file(&path).is_err());

        fs::write(&path, "[optimizer]\nsimilarity_threshold = 2.0\n").unwrap();
        assert!(load_config_file(&path).is_err());

        assert!(load_config_file(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_default_config_round_trips() {
        let config = types::Config::default();
        let rendered = to_toml(&config).unwrap();
        let parsed: types::Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
