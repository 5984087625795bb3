use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Transport settings loaded from `~/.config/fixload/config.toml`.
///
/// Only tunes how fixtures are fetched; the fixture list itself is built in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FixloadConfig {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole transfer.
    pub timeout_secs: u64,
    /// Maximum redirects followed per fixture.
    pub max_redirections: u32,
    pub user_agent: String,
}

impl Default for FixloadConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: 300,
            max_redirections: 10,
            user_agent: concat!("fixload/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FixloadConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fixload")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from `path`, or defaults if the file does not exist.
pub fn load_from(path: &Path) -> Result<FixloadConfig> {
    if !path.exists() {
        return Ok(FixloadConfig::default());
    }
    let data =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FixloadConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from the XDG config dir, falling back to defaults.
/// Never creates the file.
pub fn load_or_default() -> Result<FixloadConfig> {
    let path = config_path()?;
    let cfg = load_from(&path)?;
    tracing::debug!("config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}
