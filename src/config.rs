//! Configuration for scout.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (SCOUT_HOME)
//! 2. Config file (.scout/config.yaml)
//! 3. Defaults (~/.scout)
//!
//! Config file discovery:
//! - Searches current directory and parents for .scout/config.yaml
//! - A `paths.home` entry is relative to the .scout directory
//!
//! The Gemini API key is never stored in the config file; it always comes
//! from the `GEMINI_API_KEY` environment variable.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::adapters::gemini::DEFAULT_MODEL;

/// Simulated network latency for login/register when unconfigured
const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
    #[serde(default)]
    pub auth: Option<AuthConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to the .scout directory)
    pub home: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub model: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub login_delay_ms: Option<u64>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to scout home (state)
    pub home: PathBuf,
    /// Gemini model name
    pub gemini_model: String,
    /// Simulated latency for login/register
    pub login_delay: Duration,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Directory the key-value store writes under ($SCOUT_HOME/store)
    pub fn store_dir(&self) -> PathBuf {
        self.home.join("store")
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".scout").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to a base directory
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".scout");

    let config_file = find_config_file();
    let parsed = match config_file {
        Some(ref path) => Some(load_config_file(path)?),
        None => None,
    };

    let home = if let Ok(env_home) = std::env::var("SCOUT_HOME") {
        PathBuf::from(env_home)
    } else if let Some(home_path) = parsed.as_ref().and_then(|c| c.paths.home.as_deref()) {
        let scout_dir = config_file
            .as_ref()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));
        resolve_path(scout_dir, home_path)
    } else {
        default_home
    };

    let gemini_model = parsed
        .as_ref()
        .and_then(|c| c.gemini.as_ref())
        .and_then(|g| g.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let login_delay_ms = parsed
        .as_ref()
        .and_then(|c| c.auth.as_ref())
        .and_then(|a| a.login_delay_ms)
        .unwrap_or(DEFAULT_LOGIN_DELAY_MS);

    Ok(ResolvedConfig {
        home,
        gemini_model,
        login_delay: Duration::from_millis(login_delay_ms),
        config_file,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

// ============================================================================
// Convenience functions
// ============================================================================

/// Get the scout home directory.
pub fn scout_home() -> Result<PathBuf> {
    Ok(config()?.home.clone())
}

/// Get the key-value store directory ($SCOUT_HOME/store)
pub fn store_dir() -> Result<PathBuf> {
    Ok(config()?.store_dir())
}
