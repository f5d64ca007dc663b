//! Configuration management for the FAQ search service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{FaqError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Document corpus configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// JSON file with the FAQ documents. The bundled corpus is used
    /// when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Snippet and search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Lead-in length (chars) when the query phrase is not in the body
    #[serde(default = "default_snippet_length")]
    pub snippet_length: usize,

    /// Chars of context kept before a phrase match
    #[serde(default = "default_context_before")]
    pub context_before: usize,

    /// Chars of context kept after a phrase match
    #[serde(default = "default_context_after")]
    pub context_after: usize,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_snippet_length() -> usize {
    120
}

fn default_context_before() -> usize {
    20
}

fn default_context_after() -> usize {
    100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            snippet_length: default_snippet_length(),
            context_before: default_context_before(),
            context_after: default_context_after(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| FaqError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. FAQ_SEARCH_CONFIG env var
    /// 2. XDG config file (~/.config/faq-search/config.toml)
    /// 3. ./faq-search.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("FAQ_SEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("faq-search.toml").exists() {
                Self::from_file("faq-search.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    ///
    /// Values that fail to parse are ignored.
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("FAQ_SEARCH_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("FAQ_SEARCH_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Corpus configuration
        if let Ok(corpus) = env::var("FAQ_SEARCH_CORPUS") {
            self.corpus.path = Some(PathBuf::from(corpus));
        }

        // Search configuration
        if let Ok(length) = env::var("FAQ_SEARCH_SNIPPET_LENGTH") {
            if let Ok(len) = length.parse() {
                self.search.snippet_length = len;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(FaqError::ConfigError("Host must be non-empty".to_string()));
        }

        if self.server.port == 0 {
            return Err(FaqError::ConfigError("Port must be non-zero".to_string()));
        }

        if self.search.snippet_length == 0 {
            return Err(FaqError::ConfigError(
                "Snippet length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Config file: {:?}", XdgDirs::new().config_file());
        tracing::info!("  Bind address: {}", self.bind_addr());
        match &self.corpus.path {
            Some(path) => tracing::info!("  Corpus: {:?}", path),
            None => tracing::info!("  Corpus: bundled"),
        }
        tracing::info!("  Snippet length: {} chars", self.search.snippet_length);
        tracing::info!(
            "  Snippet context: {} before, {} after",
            self.search.context_before,
            self.search.context_after
        );
    }
}
