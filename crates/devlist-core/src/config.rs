use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::FetchOptions;

/// Search endpoint used when the config file does not override it.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/search/users?q=location:lagos";

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_read_timeout_secs() -> u64 {
    10
}

/// Global configuration loaded from `~/.config/devlist/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevlistConfig {
    /// Absolute URL of the user-search query. Used as-is, no templating.
    pub endpoint: String,
    /// Optional API token, sent as `Authorization: Bearer <token>` when set.
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Seconds allowed for establishing the connection.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Seconds the transfer may stall before it is aborted.
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
    /// Optional User-Agent override; `devlist/<version>` otherwise.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for DevlistConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth_token: None,
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
            user_agent: None,
        }
    }
}

impl DevlistConfig {
    /// Fetcher settings derived from this config. A timeout of 0 means the default.
    pub fn fetch_options(&self) -> FetchOptions {
        let mut opts = FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            read_timeout: Duration::from_secs(self.read_timeout_secs),
            auth_token: self.auth_token.clone(),
            ..FetchOptions::default()
        };
        if let Some(ua) = &self.user_agent {
            opts.user_agent = ua.clone();
        }
        opts.bounded()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("devlist")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Write the default configuration to `path`, creating parent directories.
pub fn write_default_to(path: &Path) -> Result<DevlistConfig> {
    let default_cfg = DevlistConfig::default();
    let toml = toml::to_string_pretty(&default_cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    tracing::info!("created default config at {}", path.display());
    Ok(default_cfg)
}

/// Parse the configuration stored at `path`.
pub fn load_from(path: &Path) -> Result<DevlistConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: DevlistConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DevlistConfig> {
    let path = config_path()?;
    if !path.exists() {
        return write_default_to(&path);
    }
    load_from(&path)
}
