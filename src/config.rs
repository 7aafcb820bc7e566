//! Configuration module
//!
//! Runtime settings for the service layer, loadable from a TOML file:
//!
//! ```toml
//! [limits]
//! max_lists_per_user = 100
//! max_items_per_list = 500
//! max_collaborators_per_list = 10
//!
//! [invitations]
//! base_url = "https://lists.example.com"
//! ttl_days = 7
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every section is optional; missing keys fall back to the defaults below.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Business ceilings enforced by the services. These live in configuration
/// rather than hard-coded constants so deployments and tests can tune them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceLimits {
    /// Maximum lists a single user may own
    pub max_lists_per_user: u32,
    /// Maximum items on a single list
    pub max_items_per_list: u32,
    /// Maximum collaborators on a single list (the owner is not counted)
    pub max_collaborators_per_list: u32,
}

impl Default for ServiceLimits {
    fn default() -> Self {
        Self {
            max_lists_per_user: 100,
            max_items_per_list: 500,
            max_collaborators_per_list: 10,
        }
    }
}

/// Invitation link settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InvitationConfig {
    /// Public base URL invite links are built on
    pub base_url: String,
    /// Days an invitation link stays valid
    pub ttl_days: i64,
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            ttl_days: 7,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub limits: ServiceLimits,
    pub invitations: InvitationConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration path: `~/.config/shoplist/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shoplist")
        .join("config.toml")
}
