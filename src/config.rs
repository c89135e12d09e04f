//! Configuration management for Gradpath
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.
//! Precedence is file < environment < command line.

use crate::error::{GradpathError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base URL used when neither the config file nor the environment names one
pub const DEFAULT_API_URL: &str = "http://16.171.255.175:8000";

/// Longest accepted dashboard refresh interval (one day)
pub const MAX_REFRESH_SECONDS: u64 = 86_400;

/// Main configuration structure for Gradpath
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Session token persistence
    #[serde(default)]
    pub session: SessionConfig,
    /// View behaviour (refresh interval, page sizes)
    #[serde(default)]
    pub views: ViewsConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Where the bearer token is persisted between runs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TokenStoreKind {
    /// OS credential store (Keychain, Secret Service, Credential Manager)
    #[default]
    Keyring,
    /// Plain file under the user's config directory
    File,
    /// Process memory only; nothing survives exit
    Memory,
}

impl std::str::FromStr for TokenStoreKind {
    type Err = GradpathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keyring" => Ok(Self::Keyring),
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(GradpathError::Config(format!(
                "Invalid token store: {}. Must be one of: keyring, file, memory",
                other
            ))),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Token backend
    #[serde(default)]
    pub token_store: TokenStoreKind,

    /// Token file location for the `file` backend; defaults to the platform
    /// config directory
    #[serde(default)]
    pub token_file: Option<PathBuf>,
}

/// View configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewsConfig {
    /// Dashboard auto-refresh interval (seconds)
    #[serde(default = "default_refresh_seconds")]
    pub dashboard_refresh_seconds: u64,

    /// Shortlist entries per page
    #[serde(default = "default_shortlist_page_size")]
    pub shortlist_page_size: usize,
}

fn default_refresh_seconds() -> u64 {
    30
}

fn default_shortlist_page_size() -> usize {
    6
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            dashboard_refresh_seconds: default_refresh_seconds(),
            shortlist_page_size: default_shortlist_page_size(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// A missing file is not an error: defaults are used and a warning is
    /// logged.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GradpathError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| GradpathError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("GRADPATH_API_URL") {
            if !base_url.trim().is_empty() {
                tracing::debug!(base_url = %base_url, "Env override: GRADPATH_API_URL");
                self.api.base_url = base_url;
            }
        }

        if let Ok(store) = std::env::var("GRADPATH_TOKEN_STORE") {
            match store.parse::<TokenStoreKind>() {
                Ok(kind) => self.session.token_store = kind,
                Err(_) => tracing::warn!("Invalid GRADPATH_TOKEN_STORE: {}", store),
            }
        }

        if let Ok(file) = std::env::var("GRADPATH_TOKEN_FILE") {
            self.session.token_file = Some(PathBuf::from(file));
        }

        if let Ok(refresh) = std::env::var("GRADPATH_REFRESH_SECONDS") {
            if let Ok(value) = refresh.parse() {
                self.views.dashboard_refresh_seconds = value;
            } else {
                tracing::warn!("Invalid GRADPATH_REFRESH_SECONDS: {}", refresh);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(url) = &cli.api_url {
            self.api.base_url = url.clone();
        }
        if let Some(kind) = cli.token_store {
            self.session.token_store = kind;
        }
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }
    }

    /// Base URL with trailing slashes removed, ready for path concatenation
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an absolute http(s) URL, or if
    /// the refresh interval or page size is zero
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(GradpathError::Config("api.base_url cannot be empty".to_string()).into());
        }

        let parsed = url::Url::parse(&self.api.base_url).map_err(|e| {
            GradpathError::Config(format!("Invalid api.base_url {}: {}", self.api.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GradpathError::Config(format!(
                "api.base_url must use http or https, got {}",
                parsed.scheme()
            ))
            .into());
        }

        if self.views.dashboard_refresh_seconds == 0 {
            return Err(GradpathError::Config(
                "views.dashboard_refresh_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.views.dashboard_refresh_seconds > MAX_REFRESH_SECONDS {
            return Err(GradpathError::Config(format!(
                "views.dashboard_refresh_seconds must be at most {}",
                MAX_REFRESH_SECONDS
            ))
            .into());
        }

        if self.views.shortlist_page_size == 0 {
            return Err(GradpathError::Config(
                "views.shortlist_page_size must be greater than 0".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
