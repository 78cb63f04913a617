use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::branch::default_release_branches;
use crate::domain::tag::{TagPattern, DEFAULT_TAG_PATTERN};
use crate::error::{ReleaseError, Result};

/// Configuration file looked up in the current directory
pub const CONFIG_FILE: &str = "gitrelease.toml";

/// Configuration file looked up in the user's config directory
pub const USER_CONFIG_FILE: &str = ".gitrelease.toml";

/// Represents the complete configuration for git-release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,
}

fn default_tag_pattern() -> String {
    DEFAULT_TAG_PATTERN.to_string()
}

/// Settings for how a release is cut and published.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Branches that can be released from without a warning
    #[serde(default = "default_release_branches")]
    pub branches: Vec<String>,

    /// Tag name template, must contain one `{version}` placeholder
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    /// Remote to push to; git's default when unset
    #[serde(default)]
    pub remote: Option<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            branches: default_release_branches(),
            tag_pattern: default_tag_pattern(),
            remote: None,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ReleaseError::config(format!("invalid TOML: {}", e)))?;
        config.tag_pattern()?;
        Ok(config)
    }

    /// The configured tag pattern, validated
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.release.tag_pattern.clone())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitrelease.toml` in current directory
/// 3. `.gitrelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed, or validated
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match locate_config(config_path) {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            let content = fs::read_to_string(&path).map_err(|e| {
                ReleaseError::config(format!("cannot read {}: {}", path.display(), e))
            })?;
            Config::from_toml(&content)
        }
        None => {
            debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn locate_config(config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let local = Path::new(".").join(CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.release.branches, vec!["main", "master"]);
        assert_eq!(config.release.tag_pattern, "v{version}");
        assert_eq!(config.release.remote, None);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_release_table() {
        let config = Config::from_toml("[release]\nremote = \"upstream\"\n").unwrap();
        assert_eq!(config.release.remote.as_deref(), Some("upstream"));
        assert_eq!(config.release.branches, vec!["main", "master"]);
    }

    #[test]
    fn test_invalid_tag_pattern_rejected() {
        let err = Config::from_toml("[release]\ntag_pattern = \"latest\"\n").unwrap_err();
        assert!(matches!(err, ReleaseError::Config(_)));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = Config::from_toml("[release\n").unwrap_err();
        assert!(err.to_string().contains("invalid TOML"));
    }
}
