//! Configuration management for jigsol CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// IL2CPP metadata inside the unpacked APK
pub const DEFAULT_METADATA: &str =
    "com.gamincat.jigsolitaire/assets/bin/Data/Managed/Metadata/global-metadata.dat";

/// Export of the default local group bundle
pub const DEFAULT_BUNDLE: &str = "com.gamincat.jigsolitaire/assets/aa/Android/defaultlocalgroup_assets_all_ca619d4f2e59f2119fbae48daab99ee9.bundle";

pub const DEFAULT_ANALYSIS_DIR: &str = "analysis";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub metadata: Option<PathBuf>,
    pub bundle: Option<PathBuf>,
    pub analysis_dir: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("jigsol");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from a file, or defaults if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    /// Save configuration to a file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Metadata blob: flag, then config, then built-in default
    pub fn metadata_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.metadata.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_METADATA))
    }

    /// Bundle export directory: flag, then config, then built-in default
    pub fn bundle_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.bundle.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUNDLE))
    }

    /// Analysis directory: flag, then config, then built-in default
    pub fn analysis_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.analysis_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ANALYSIS_DIR))
    }
}
