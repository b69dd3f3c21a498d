//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting jigsol default paths.

use crate::config::Config;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Values `configure` can store
#[derive(Debug, Default)]
pub struct Updates {
    pub metadata: Option<PathBuf>,
    pub bundle: Option<PathBuf>,
    pub analysis_dir: Option<PathBuf>,
}

impl Updates {
    fn is_empty(&self) -> bool {
        self.metadata.is_none() && self.bundle.is_none() && self.analysis_dir.is_none()
    }
}

/// Handle the configure command
///
/// # Arguments
/// * `config_path` - File the configuration lives in
/// * `updates` - Paths to store as defaults
/// * `show` - If true, show current configuration
pub fn handle(config_path: &Path, updates: Updates, show: bool) -> Result<()> {
    let mut config = match Config::load_from(config_path) {
        Ok(config) => config,
        Err(e) if !show && !updates.is_empty() => {
            tracing::warn!("{:#}; replacing it", e);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    if show {
        show_config(&config, config_path);
        return Ok(());
    }

    if updates.is_empty() {
        show_usage();
        return Ok(());
    }

    apply(&mut config, updates);
    config.save_to(config_path)?;

    println!("Config saved to: {}", config_path.display());
    show_config(&config, config_path);

    Ok(())
}

fn apply(config: &mut Config, updates: Updates) {
    if let Some(path) = updates.metadata {
        config.metadata = Some(path);
    }
    if let Some(path) = updates.bundle {
        config.bundle = Some(path);
    }
    if let Some(path) = updates.analysis_dir {
        config.analysis_dir = Some(path);
    }
}

/// Display current configuration, with the defaults that apply
fn show_config(config: &Config, config_path: &Path) {
    println!("Metadata:     {}", config.metadata_path(None).display());
    println!("Bundle:       {}", config.bundle_path(None).display());
    println!("Analysis dir: {}", config.analysis_dir(None).display());
    println!("Config file:  {}", config_path.display());
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: jigsol configure --metadata PATH --bundle DIR");
    println!("   or: jigsol --analysis-dir DIR configure");
    println!("   or: jigsol configure --show");
    println!();
    println!("Note: --bundle expects the directory an asset exporter wrote,");
    println!("      not the raw .bundle file.");
}
