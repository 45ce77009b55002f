use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the pageviews data directory based on priority:
/// 1. PAGEVIEWS_PATH environment variable (with tilde expansion)
/// 2. XDG data directory
/// 3. ~/.pageviews (fallback for systems without XDG)
pub fn resolve_data_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var("PAGEVIEWS_PATH") {
        return Some(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Some(data_dir.join("pageviews"));
    }

    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".pageviews"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Fixed base directory for resolving relative log paths
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        resolve_data_path().map(|dir| dir.join("config.toml"))
    }

    /// Base directory for resolving relative log paths, by priority:
    /// 1. Explicit path (--base-dir flag, with tilde expansion)
    /// 2. PAGEVIEWS_BASE_DIR environment variable (with tilde expansion)
    /// 3. `base_dir` in config.toml
    /// 4. Current working directory
    pub fn resolve_base_dir(explicit: Option<&str>) -> Result<PathBuf> {
        if let Some(dir) = explicit {
            return Ok(expand_tilde(dir));
        }

        if let Ok(env_dir) = std::env::var("PAGEVIEWS_BASE_DIR") {
            return Ok(expand_tilde(&env_dir));
        }

        if let Some(dir) = Self::load()?.base_dir {
            return Ok(dir);
        }

        Ok(std::env::current_dir()?)
    }
}

/// Resolve a log file reference against the base directory. Absolute paths
/// pass through untouched; empty references pass through so the engine can
/// reject them as missing.
pub fn resolve_log_path(base_dir: &Path, file: &str) -> PathBuf {
    if file.is_empty() {
        return PathBuf::new();
    }

    let path = expand_tilde(file);
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}
