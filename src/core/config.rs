//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mediq/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MediqConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub dark_mode: Option<bool>,
    pub suggested_questions: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// The starter questions shown on the welcome screen when the user hasn't
/// configured their own.
pub fn default_suggested_questions() -> Vec<String> {
    vec![
        "What are the symptoms of diabetes?".to_string(),
        "How can I reduce my blood pressure naturally?".to_string(),
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub dark_mode: bool,
    pub suggested_questions: Vec<String>,
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

/// Returns the path to `~/.mediq/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mediq").join("config.toml"))
}

/// Load config from `~/.mediq/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MediqConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MediqConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MediqConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MediqConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MediqConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# MedIQ Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:8000"   # Or set MEDIQ_API_URL env var

# [ui]
# dark_mode = false
# suggested_questions = [
#     "What are the symptoms of diabetes?",
#     "How can I reduce my blood pressure naturally?",
# ]
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
/// `cli_api_url` is from the `--api-url` flag (None = not specified).
pub fn resolve(config: &MediqConfig, cli_api_url: Option<&str>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let api_base_url = cli_api_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("MEDIQ_API_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    ResolvedConfig {
        api_base_url,
        dark_mode: config.ui.dark_mode.unwrap_or(false),
        suggested_questions: config
            .ui
            .suggested_questions
            .clone()
            .unwrap_or_else(default_suggested_questions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = MediqConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.ui.dark_mode.is_none());
        assert!(config.ui.suggested_questions.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = MediqConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!resolved.dark_mode);
        assert_eq!(resolved.suggested_questions.len(), 2);
        assert_eq!(
            resolved.suggested_questions[0],
            "What are the symptoms of diabetes?"
        );
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MediqConfig {
            api: ApiConfig {
                base_url: Some("http://10.0.0.5:9000".to_string()),
            },
            ui: UiConfig {
                dark_mode: Some(true),
                suggested_questions: Some(vec!["What is hypertension?".to_string()]),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.api_base_url, "http://10.0.0.5:9000");
        assert!(resolved.dark_mode);
        assert_eq!(resolved.suggested_questions, vec!["What is hypertension?"]);
    }

    #[test]
    fn test_resolve_cli_url_wins() {
        let config = MediqConfig {
            api: ApiConfig {
                base_url: Some("http://from-config:8000".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("http://from-cli:8000"));
        assert_eq!(resolved.api_base_url, "http://from-cli:8000");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[api]
base_url = "http://192.168.1.100:8000"

[ui]
dark_mode = true
suggested_questions = [
    "What are the symptoms of diabetes?",
    "Is a headache ever an emergency?",
]
"#;
        let config: MediqConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://192.168.1.100:8000")
        );
        assert_eq!(config.ui.dark_mode, Some(true));
        assert_eq!(
            config.ui.suggested_questions.as_deref().map(|q| q.len()),
            Some(2)
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[ui]
dark_mode = true
"#;
        let config: MediqConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.dark_mode, Some(true));
        assert!(config.api.base_url.is_none());
        assert!(config.ui.suggested_questions.is_none());
    }
}
