use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Get the default tweebo data directory: ~/.tweebo
pub fn get_tweebo_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".tweebo"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.tweebo/config.toml (highest)
    let tweebo_dir = get_tweebo_data_dir()?;
    let tweebo_config = tweebo_dir.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let mut cfg: AppConfig = if tweebo_config.exists() {
        let s = std::fs::read_to_string(&tweebo_config)?;
        toml::from_str::<AppConfig>(&s)?
    } else if local_config.exists() {
        let s = std::fs::read_to_string(local_config)?;
        toml::from_str::<AppConfig>(&s)?
    } else {
        AppConfig::default()
    };

    // Update logging directory to use tweebo data directory if not set
    if cfg
        .logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .is_none()
    {
        cfg.logging.directory = Some(tweebo_dir.join("logs").to_string_lossy().to_string());
    }

    // Environment variable overrides (Priority 0: highest)
    if let Ok(v) = std::env::var("TWEEBO_ENGINE_CMD") {
        if !v.trim().is_empty() {
            cfg.engine.command = v;
            cfg.engine.args.clear();
        }
    }
    if let Ok(v) = std::env::var("TWEEBO_ENGINE_TIMEOUT_SECS") {
        if let Ok(secs) = v.trim().parse::<u64>() {
            cfg.engine.timeout_secs = Some(secs);
        }
    }

    Ok(cfg)
}
