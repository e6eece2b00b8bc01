pub mod init;
mod schema;
mod validation;

pub use init::{sample_catalog, sample_config, write_default_config};
pub use schema::{BuildConfig, Config};
pub use validation::validate_config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Get the config directory path (~/.config/focus-calc/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("focus-calc"))
}

/// Get the default config file path (~/.config/focus-calc/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Path to the config file, usually from `--config` or `get_config_path`
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!(
            "Config file not found at {}. Run `focus-calc init` to create one",
            path.display()
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    debug!(path = %path.display(), builds = config.builds.len(), "loaded config");
    Ok(config)
}

/// Resolve the catalog location named in the config.
///
/// Relative paths are taken relative to the config file's directory.
pub fn resolve_catalog_path(config: &Config, config_path: &Path) -> Option<PathBuf> {
    let catalog = config.catalog.as_ref()?;
    if catalog.is_absolute() {
        return Some(catalog.clone());
    }
    let base = config_path.parent().unwrap_or_else(|| Path::new("."));
    Some(base.join(catalog))
}
