// Configuration type definitions

use serde::Deserialize;

use crate::api::DEFAULT_BASE_URL;
use crate::model::Role;
use crate::notification::DEFAULT_TTL;
use crate::pager::DEFAULT_PAGE_SIZE;

/// Backend connection section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Table paging section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PagerConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PagerConfig {
    fn default() -> Self {
        PagerConfig {
            page_size: default_page_size(),
        }
    }
}

/// Toast section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,
}

fn default_ttl_ms() -> u64 {
    DEFAULT_TTL.as_millis() as u64
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            ttl_ms: default_ttl_ms(),
        }
    }
}

/// Identity the client acts as
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pager: PagerConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub session: SessionConfig,
}
