//! `devlist config` – show where the config lives and what it says.

use anyhow::Result;
use devlist_core::config::{self, DevlistConfig};

pub fn run_config(cfg: &DevlistConfig) -> Result<()> {
    println!("config file:     {}", config::config_path()?.display());
    println!("endpoint:        {}", cfg.endpoint);
    println!(
        "auth token:      {}",
        if cfg.auth_token.is_some() { "<set>" } else { "<unset>" }
    );
    println!("connect timeout: {}s", cfg.connect_timeout_secs);
    println!("read timeout:    {}s", cfg.read_timeout_secs);
    println!(
        "user agent:      {}",
        cfg.user_agent.as_deref().unwrap_or("(default)")
    );
    Ok(())
}
