use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Sheet the personas are read from unless configured otherwise
pub const DEFAULT_SHEET: &str = "personas";

/// Pause after each clipboard write so the OS registers it before the next overwrite
pub const DEFAULT_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_sheet")]
    pub sheet: String,

    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_sheet() -> String {
    DEFAULT_SHEET.to_string()
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet: default_sheet(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl Config {
    /// Load the user config. Without a home directory there is no config file.
    pub fn load() -> Result<Self> {
        Self::load_in(dirs::home_dir().as_deref())
    }

    fn load_in(home: Option<&Path>) -> Result<Self> {
        match home {
            Some(home) => Self::load_from(&Self::config_path(home)),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    fn config_path(home: &Path) -> PathBuf {
        home.join(".pwdsaver").join("config.json")
    }
}
