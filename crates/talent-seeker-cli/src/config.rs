//! YAML configuration.
//!
//! Every field has a default, so a missing file or an empty one is valid.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use talent_seeker::SortKey;

/// Looked up in the working directory when no file is given.
pub const DEFAULT_CONFIG_FILE: &str = "tseek.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Record file used when `--data` is absent.
    pub data: PathBuf,
    /// Sort key used when `--sort` is absent.
    pub default_sort: SortKey,
    /// Sample size passed to the featured fetch.
    pub featured_limit: usize,
    /// Optional cap passed to the collection fetch.
    pub fetch_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: PathBuf::from("talent.json"),
            default_sort: SortKey::Featured,
            featured_limit: 8,
            fetch_limit: None,
        }
    }
}

impl Config {
    /// Parses configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(text).context("invalid configuration")
    }

    /// Loads the explicit file, else `tseek.yaml` if present, else defaults.
    ///
    /// An explicit file that cannot be read is an error; a missing default
    /// file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    tracing::debug!("no configuration file, using defaults");
                    return Ok(Config::default());
                }
                fallback
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Config::from_yaml(&text)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}
