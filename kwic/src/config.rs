//! Configuration for kwic

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::format::Layout;

/// Local config file, looked up in the working directory
const LOCAL_CONFIG: &str = ".kwic.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stop-word file; a missing file disables exclusion
    pub stopwords: PathBuf,

    /// Output format when `--format` is not given
    pub format: OutputFormat,

    /// Column padding for text output
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stopwords: PathBuf::from(crate::DEFAULT_STOPWORDS_FILE),
            format: OutputFormat::default(),
            layout: Layout::default(),
        }
    }
}

impl Config {
    /// Load config with fallback chain: explicit path, `./.kwic.yml`,
    /// `~/.config/kwic/kwic.yml`, then defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let candidates = [
            Some(PathBuf::from(LOCAL_CONFIG)),
            dirs::config_dir().map(|p| p.join("kwic").join("kwic.yml")),
        ];

        for path in candidates.iter().flatten() {
            if path.exists() {
                match Self::load_from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load config from a YAML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
