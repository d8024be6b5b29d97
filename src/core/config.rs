//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.campus-chat/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::route::Route;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_route: Option<Route>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RemoteConfig {
    pub base_url: Option<String>,
}

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

pub const ENV_ENDPOINT: &str = "CAMPUS_CHAT_ENDPOINT";
pub const ENV_START_ROUTE: &str = "CAMPUS_CHAT_START_ROUTE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub start_route: Route,
}

/// Values given on the command line; `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub route: Option<Route>,
}

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

/// Returns the path to `~/.campus-chat/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".campus-chat").join("config.toml"))
}

/// Load config from `~/.campus-chat/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ChatConfig::default()`.
pub fn load_config() -> Result<ChatConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(ChatConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ChatConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ChatConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ChatConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# campus-chat configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_route = "landing"          # "landing" or "chatbot"

# [remote]
# base_url = "http://127.0.0.1:5000"   # Or set CAMPUS_CHAT_ENDPOINT; requests go to {base_url}/query
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ChatConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &ChatConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let base_url = cli
        .endpoint
        .clone()
        .or_else(|| env(ENV_ENDPOINT))
        .or_else(|| config.remote.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let env_route = env(ENV_START_ROUTE).and_then(|s| match s.parse::<Route>() {
        Ok(route) => Some(route),
        Err(e) => {
            warn!("Ignoring {}: {}", ENV_START_ROUTE, e);
            None
        }
    });

    let start_route = cli
        .route
        .or(env_route)
        .or(config.general.start_route)
        .unwrap_or_default();

    ResolvedConfig {
        base_url,
        start_route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&ChatConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.start_route, Route::Landing);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ChatConfig {
            general: GeneralConfig {
                start_route: Some(Route::Chatbot),
            },
            remote: RemoteConfig {
                base_url: Some("http://10.0.0.5:5000".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.base_url, "http://10.0.0.5:5000");
        assert_eq!(resolved.start_route, Route::Chatbot);
    }

    #[test]
    fn test_env_wins_over_file() {
        let config = ChatConfig {
            remote: RemoteConfig {
                base_url: Some("http://from-file".to_string()),
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_ENDPOINT, "http://from-env"),
            (ENV_START_ROUTE, "/chatbot"),
        ]);
        let resolved = resolve_with_env(&config, &CliOverrides::default(), |k| {
            env.get(k).map(|v| v.to_string())
        });
        assert_eq!(resolved.base_url, "http://from-env");
        assert_eq!(resolved.start_route, Route::Chatbot);
    }

    #[test]
    fn test_bad_env_route_is_ignored() {
        let resolved = resolve_with_env(&ChatConfig::default(), &CliOverrides::default(), |k| {
            (k == ENV_START_ROUTE).then(|| "/nowhere".to_string())
        });
        assert_eq!(resolved.start_route, Route::Landing);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let cli = CliOverrides {
            endpoint: Some("http://from-cli".to_string()),
            route: Some(Route::Landing),
        };
        let resolved = resolve_with_env(&ChatConfig::default(), &cli, |k| match k {
            ENV_ENDPOINT => Some("http://from-env".to_string()),
            ENV_START_ROUTE => Some("chatbot".to_string()),
            _ => None,
        });
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.start_route, Route::Landing);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[remote]
base_url = "http://192.168.1.100:5000"
"#;
        let config: ChatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.remote.base_url.as_deref(),
            Some("http://192.168.1.100:5000")
        );
        assert!(config.general.start_route.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("campus-chat-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[remote\nbase_url = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("campus-chat-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.remote.base_url.is_none());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# base_url"));
        // Generated file is all comments, so it parses back to defaults
        let reparsed: ChatConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.general.start_route.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}
