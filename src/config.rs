//! `.esg-terminal.toml` configuration

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::map::{MapBounds, TierThresholds};

pub const CONFIG_FILE_NAME: &str = ".esg-terminal.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite database path, overridden by `--database`
    pub database: Option<PathBuf>,
    /// Default number of leaderboard rows
    pub leaderboard_limit: Option<usize>,
    pub map: MapBounds,
    pub tiers: TierThresholds,
}

/// Parse config from TOML text
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load an explicitly named config file; errors are fatal
pub fn load_config_file(path: &Path) -> Result<AppConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = parse_config(&contents)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn try_load_config_from_path(path: &Path) -> Option<AppConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}. Using defaults.", path.display(), e);
            None
        }
    }
}

/// Search `start` and its ancestors for a config file
pub fn discover_config(start: &Path) -> AppConfig {
    start
        .ancestors()
        .take(MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            AppConfig::default()
        })
}

/// Explicit path if given, otherwise discovery from the current directory
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(&dir)),
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            Ok(AppConfig::default())
        }
    }
}
