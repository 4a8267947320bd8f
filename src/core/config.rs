//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.trove/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The business-search API key is never baked into the binary: it comes from
//! the `YELP_API_KEY` env var or the config file, and stays `None` when
//! neither provides one.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TroveConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub yelp: YelpConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub skip_welcome: Option<bool>,
    pub start_country: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DirectoryConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct YelpConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DIRECTORY_BASE_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_YELP_BASE_URL: &str = "https://api.yelp.com/v3";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub skip_welcome: bool,
    /// Country to select on startup, if any.
    pub start_country: Option<String>,
    pub directory_base_url: String,
    /// Stays `None` when no key is configured; the gems search reports that
    /// at use time instead of blocking startup.
    pub yelp_api_key: Option<String>,
    pub yelp_base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.trove/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".trove").join("config.toml"))
}

/// Load config from `~/.trove/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TroveConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TroveConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TroveConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TroveConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TroveConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Trove Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# skip_welcome = false               # Jump straight past the welcome page
# start_country = "Nepal"            # Country to select on startup

# [directory]
# base_url = "https://restcountries.com/v3.1"

# [yelp]
# api_key = "..."                    # Or set YELP_API_KEY env var
# base_url = "https://api.yelp.com/v3"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_country` is the `--country` flag (None = not specified).
pub fn resolve(config: &TroveConfig, cli_country: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_country, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup injected so tests can
/// pin it down without touching (or being contaminated by) the real process
/// environment.
fn resolve_with_env(
    config: &TroveConfig,
    cli_country: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start country: CLI → config
    let start_country = cli_country
        .map(|s| s.to_string())
        .or_else(|| config.general.start_country.clone());

    // Directory base URL: env → config → default
    let directory_base_url = env("TROVE_DIRECTORY_URL")
        .or_else(|| config.directory.base_url.clone())
        .unwrap_or_else(|| DEFAULT_DIRECTORY_BASE_URL.to_string());

    // Yelp API key: env → config. Never a baked-in default.
    let yelp_api_key = env("YELP_API_KEY").or_else(|| config.yelp.api_key.clone());

    // Yelp base URL: env → config → default
    let yelp_base_url = env("TROVE_YELP_URL")
        .or_else(|| config.yelp.base_url.clone())
        .unwrap_or_else(|| DEFAULT_YELP_BASE_URL.to_string());

    ResolvedConfig {
        skip_welcome: config.general.skip_welcome.unwrap_or(false),
        start_country,
        directory_base_url,
        yelp_api_key,
        yelp_base_url,
    }
}
