use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global configuration loaded from `~/.config/imgsweep/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Delimited text file to scan for image URLs.
    pub input_path: PathBuf,
    /// Directory downloaded images are written to (created if missing).
    pub output_dir: PathBuf,
    /// Field delimiter (single character; default tab).
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Number of downloads started together; the next batch waits for all of them.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Redirect hops followed before a download is reported as failed.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,
    /// Optional User-Agent header sent with every request.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_delimiter() -> char {
    '\t'
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_batch_size() -> usize {
    5
}

fn default_max_redirects() -> u32 {
    10
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("images.tsv"),
            output_dir: PathBuf::from("downloaded_images"),
            delimiter: default_delimiter(),
            request_timeout_secs: default_request_timeout_secs(),
            batch_size: default_batch_size(),
            max_redirects: default_max_redirects(),
            user_agent: None,
        }
    }
}

impl SweepConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Batch size clamped to at least one.
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.max(1)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgsweep")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SweepConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SweepConfig::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<SweepConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: SweepConfig =
        toml::from_str(&data).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
