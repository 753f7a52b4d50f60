use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::DEFAULT_MAX_URL_LENGTH;

/// Global configuration loaded from `~/.config/urlclass/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlclassConfig {
    /// Path to the random-forest JSON file. Required by `serve` and
    /// `classify` unless given on the command line.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Address the web form listens on.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// URLs longer than this (in characters) are rejected before extraction.
    #[serde(default = "default_max_url_length")]
    pub max_url_length: usize,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8501".to_string()
}

fn default_max_url_length() -> usize {
    DEFAULT_MAX_URL_LENGTH
}

impl Default for UrlclassConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            bind_addr: default_bind_addr(),
            max_url_length: default_max_url_length(),
        }
    }
}

impl UrlclassConfig {
    /// Model path from the command line, else from config.
    pub fn resolve_model_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.model_path.clone())
            .context("no model configured; pass --model or set model_path in config.toml")
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlclass")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlclassConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

pub fn load_or_init_at(path: &Path) -> Result<UrlclassConfig> {
    if !path.exists() {
        let default_cfg = UrlclassConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: UrlclassConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
