//! CLI subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod output;
pub mod parse;

use std::path::{Path, PathBuf};

use tracing::debug;

use danfe_core::DanfeConfig;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("danfe")
        .join("config.json")
}

/// Resolve the configuration file: an explicit path, else the default location.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load configuration for a run.
///
/// An explicit path must exist; the default location falls back to built-in defaults.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<DanfeConfig> {
    if let Some(path) = explicit {
        return Ok(DanfeConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        Ok(DanfeConfig::from_file(&path)?)
    } else {
        Ok(DanfeConfig::default())
    }
}
