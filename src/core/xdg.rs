//! Config file location
//!
//! The service only reads from disk: one optional `config.toml` and the
//! corpus. This module decides which directory that `config.toml` lives
//! in.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "faq-search";
const CONFIG_FILE: &str = "config.toml";

/// Directories the service reads from
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve from the environment
    ///
    /// `FAQ_SEARCH_CONFIG_DIR` wins, then `$XDG_CONFIG_HOME/faq-search`,
    /// then `~/.config/faq-search`.
    pub fn new() -> Self {
        let config_dir = env::var_os("FAQ_SEARCH_CONFIG_DIR")
            .map(PathBuf::from)
            .or_else(|| {
                env::var_os("XDG_CONFIG_HOME").map(|xdg| PathBuf::from(xdg).join(APP_DIR))
            })
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
                    .join(APP_DIR)
            });

        Self { config_dir }
    }

    /// `config.toml` inside the config dir (may not exist)
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
