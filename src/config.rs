// Configuration module for worknest
// This module handles loading and parsing configuration from ~/.config/worknest/config.toml

mod types;

pub use types::{ApiConfig, Config, NotificationConfig, PagerConfig, SessionConfig};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::WorknestError;
use crate::model::{Role, Session};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/worknest/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from `config_path`, falling back to defaults
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match parse_config(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub page_size: Option<usize>,
    pub user_id: Option<String>,
    pub role: Option<Role>,
}

/// Effective settings after merging the config file with CLI flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub page_size: usize,
    pub notification_ttl: Duration,
    pub session: Session,
}

impl Settings {
    pub fn resolve(config: &Config, overrides: Overrides) -> Result<Self, WorknestError> {
        let page_size = overrides.page_size.unwrap_or(config.pager.page_size);
        if page_size == 0 {
            return Err(WorknestError::InvalidPageSize(page_size));
        }

        Ok(Settings {
            base_url: overrides
                .base_url
                .unwrap_or_else(|| config.api.base_url.clone()),
            timeout: Duration::from_secs(config.api.timeout_secs),
            page_size,
            notification_ttl: Duration::from_millis(config.notifications.ttl_ms),
            session: Session {
                user_id: overrides
                    .user_id
                    .or_else(|| config.session.user_id.clone())
                    .unwrap_or_default(),
                role: overrides.role.or(config.session.role).unwrap_or_default(),
            },
        })
    }
}

/// Parse and sanity-check a config document
pub fn parse_config(contents: &str) -> Result<Config, String> {
    let config: Config = toml::from_str(contents).map_err(|e| e.to_string())?;

    if config.pager.page_size == 0 {
        return Err("pager.page_size must be at least 1".to_string());
    }
    if config.api.base_url.trim().is_empty() {
        return Err("api.base_url must not be empty".to_string());
    }

    Ok(config)
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/worknest/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("worknest")
        .join("config.toml")
}
