//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.nextpay-docs/config.toml`. If missing on first run,
//! a commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DocsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Page shown at startup; unknown names fall back to the first page.
    pub start_page: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AppearanceConfig {
    /// syntect theme used for fenced code blocks.
    pub syntax_theme: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "nextpay-docs.log";
pub const DEFAULT_SYNTAX_THEME: &str = "base16-ocean.dark";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` means "first registered page".
    pub start_page: Option<String>,
    pub log_file: String,
    pub syntax_theme: String,
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

/// Returns the path to `~/.nextpay-docs/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".nextpay-docs").join("config.toml"))
}

/// Load config from `~/.nextpay-docs/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DocsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DocsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DocsConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DocsConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: DocsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# nextPay docs configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_page = "Home"            # "Home", "Anon Aadhaar", "FAQs", ...
# log_file = "nextpay-docs.log"  # Debug log destination

# [appearance]
# syntax_theme = "base16-ocean.dark"   # syntect theme for code blocks
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

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI.
///
/// `cli_page` and `cli_log_file` are from CLI flags (None = not specified).
pub fn resolve(
    config: &DocsConfig,
    cli_page: Option<&str>,
    cli_log_file: Option<&str>,
) -> ResolvedConfig {
    // Start page: CLI → env → config → first registered page
    let start_page = cli_page
        .map(|s| s.to_string())
        .or_else(|| std::env::var("NEXTPAY_DOCS_START_PAGE").ok())
        .or_else(|| config.general.start_page.clone());

    // Log file: CLI → env → config → default
    let log_file = cli_log_file
        .map(|s| s.to_string())
        .or_else(|| std::env::var("NEXTPAY_DOCS_LOG_FILE").ok())
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Syntax theme: config → default
    let syntax_theme = config
        .appearance
        .syntax_theme
        .clone()
        .unwrap_or_else(|| DEFAULT_SYNTAX_THEME.to_string());

    ResolvedConfig {
        start_page,
        log_file,
        syntax_theme,
    }
}
