//! Tool configuration.
//!
//! Configuration can be loaded from:
//! - The file named by `SSH3_VERCTL_CONFIG`
//! - A TOML file in one of the default locations
//! - Built-in defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use ssh3_version::LocalIdentity;
use std::path::Path;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SSH3_VERCTL_CONFIG";

/// Tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit one JSON object per checked line instead of plain text.
    #[serde(default = "default_true")]
    pub json: bool,

    /// Identity we compare peers against.
    #[serde(default)]
    pub identity: LocalIdentity,
}

// Default value functions
fn default_log_filter() -> String {
    "ssh3_verctl=info,ssh3_version=info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: true,
            identity: LocalIdentity::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed, or if
    /// `SSH3_VERCTL_CONFIG` names a file that cannot be read.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let expanded = shellexpand::tilde(&path);
            return Self::from_file(expanded.as_ref());
        }

        let config_paths = [
            "ssh3-verctl.toml",
            "/etc/ssh3/ssh3-verctl.toml",
            "~/.config/ssh3/ssh3-verctl.toml",
        ];

        for path in &config_paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::from_file(expanded.as_ref());
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }
}
