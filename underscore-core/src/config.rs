use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::transform::DEFAULT_PLACEHOLDER;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Replace unsupported characters instead of reporting them
    #[serde(default)]
    pub force: bool,

    /// Substituted for characters with no transliteration
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Additional attempts after a failed move
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Pause between attempts, in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            force: false,
            placeholder: default_placeholder(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            use_color: None,
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_max_retries() -> u32 {
    5
}

fn default_retry_delay_ms() -> u64 {
    10
}

impl Config {
    /// Load config from .underscore/config.toml if it exists
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(".underscore").join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Per-run options seeded from the configured defaults
    pub fn rename_options(&self) -> RenameOptions {
        RenameOptions {
            force: self.defaults.force,
            placeholder: self.defaults.placeholder.clone(),
            case_insensitive: None,
            retry: RetryPolicy {
                max_retries: self.defaults.max_retries,
                delay: Duration::from_millis(self.defaults.retry_delay_ms),
            },
        }
    }
}

/// How failed moves are retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts after the first one
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            delay: Duration::from_millis(default_retry_delay_ms()),
        }
    }
}

impl RetryPolicy {
    pub fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

/// Options for planning and applying one batch
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Transliterate or replace characters that are still invalid
    pub force: bool,
    pub placeholder: String,
    /// Overrides filesystem case-sensitivity detection when set
    pub case_insensitive: Option<bool>,
    pub retry: RetryPolicy,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Config::default().rename_options()
    }
}
