use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::TransportOptions;
use crate::retry::RetryPolicy;

pub const DEFAULT_SOURCE_URL: &str = "https://www.usom.gov.tr/url-list.txt";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_attempts: policy.max_attempts,
            base_delay_secs: policy.base_delay.as_secs_f64(),
        }
    }
}

/// Global configuration loaded from `~/.config/usomgen/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Location of the plaintext block list.
    pub source_url: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Total timeout for one fetch attempt, in seconds.
    pub timeout_secs: u64,
    /// Directory receiving the four generated lists.
    pub output_dir: PathBuf,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            output_dir: PathBuf::from("output"),
            retry: None,
        }
    }
}

impl GeneratorConfig {
    /// Retry policy from the `[retry]` section, or the built-in default.
    /// Negative or non-finite delays are treated as zero.
    pub fn retry_policy(&self) -> RetryPolicy {
        match &self.retry {
            Some(r) => {
                let secs = if r.base_delay_secs.is_finite() {
                    r.base_delay_secs.max(0.0)
                } else {
                    0.0
                };
                RetryPolicy {
                    max_attempts: r.max_attempts.max(1),
                    base_delay: Duration::from_secs_f64(secs),
                }
            }
            None => RetryPolicy::default(),
        }
    }

    pub fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("usomgen")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GeneratorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GeneratorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let cfg: GeneratorConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
