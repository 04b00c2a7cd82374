//! Configuration management for Folio
//!
//! This module handles loading, parsing, and validation of configuration files.
//! Secrets never live in the file itself; the file names the environment
//! variables that hold them.

use crate::constants::{
    ALL_PROJECTS_MAIN_DELAY_MS, CONFIG_GENERATED, PROJECT_MAIN_DELAY_MS, RELAY_REQUEST_TIMEOUT_SECS,
    SAFETY_DEADLINE_MS, SCROLL_AFTER_CLOSE_MS, SELECTION_CLEAR_DELAY_MS, SPLASH_DURATION_MS,
};
use crate::navigation::TransitionTimings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub navigation: NavigationConfig,
    pub relay: RelayConfig,
    pub email: EmailConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (needed for clicking the footer logo)
    pub mouse_enabled: bool,
    /// Splash screen duration in milliseconds
    pub splash_ms: u64,
}

/// Navigation transition timings, all in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub project_main_delay_ms: u64,
    pub all_projects_main_delay_ms: u64,
    pub safety_deadline_ms: u64,
    pub selection_clear_ms: u64,
    pub scroll_after_close_ms: u64,
}

/// Contact relay configuration, shared by the viewer (client) and `folio serve`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Base URL the viewer submits to
    pub base_url: String,
    /// Environment variable holding the public bearer key
    pub anon_key_env: String,
    /// Address `folio serve` binds to
    pub bind_address: String,
    pub port: u16,
    /// Client request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Notification email configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Environment variable holding the email provider API key
    pub api_key_env: String,
    pub from: String,
    pub to: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
    /// Level filter: error, warn, info, debug or trace
    pub level: String,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file for contact submissions; in-memory when unset
    pub database_path: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            splash_ms: SPLASH_DURATION_MS,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            project_main_delay_ms: PROJECT_MAIN_DELAY_MS,
            all_projects_main_delay_ms: ALL_PROJECTS_MAIN_DELAY_MS,
            safety_deadline_ms: SAFETY_DEADLINE_MS,
            selection_clear_ms: SELECTION_CLEAR_DELAY_MS,
            scroll_after_close_ms: SCROLL_AFTER_CLOSE_MS,
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8787".to_string(),
            anon_key_env: "FOLIO_ANON_KEY".to_string(),
            bind_address: "0.0.0.0".to_string(),
            port: 8787,
            request_timeout_secs: RELAY_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key_env: "RESEND_API_KEY".to_string(),
            from: "Portfolio <onboarding@resend.dev>".to_string(),
            to: vec!["delivered@resend.dev".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl RelayConfig {
    /// The public bearer key from the environment, empty when unset
    pub fn anon_key(&self) -> String {
        std::env::var(&self.anon_key_env).unwrap_or_default()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl EmailConfig {
    /// The provider API key from the environment
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok()
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("folio.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("folio").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let nav = &self.navigation;
        if nav.safety_deadline_ms == 0 {
            anyhow::bail!("safety_deadline_ms must be greater than zero");
        }
        if nav.project_main_delay_ms > nav.safety_deadline_ms {
            anyhow::bail!(
                "project_main_delay_ms ({}) cannot exceed safety_deadline_ms ({})",
                nav.project_main_delay_ms,
                nav.safety_deadline_ms
            );
        }
        if nav.all_projects_main_delay_ms > nav.safety_deadline_ms {
            anyhow::bail!(
                "all_projects_main_delay_ms ({}) cannot exceed safety_deadline_ms ({})",
                nav.all_projects_main_delay_ms,
                nav.safety_deadline_ms
            );
        }

        if !self.relay.base_url.starts_with("http://") && !self.relay.base_url.starts_with("https://") {
            anyhow::bail!("relay base_url must start with http:// or https://, got '{}'", self.relay.base_url);
        }
        if self.relay.port == 0 {
            anyhow::bail!("relay port cannot be 0");
        }
        if self.relay.request_timeout_secs == 0 {
            anyhow::bail!("relay request_timeout_secs must be greater than zero");
        }
        if self.relay.anon_key_env.is_empty() {
            anyhow::bail!("relay anon_key_env cannot be empty");
        }

        if self.email.api_key_env.is_empty() {
            anyhow::bail!("email api_key_env cannot be empty");
        }
        if self.email.to.is_empty() {
            anyhow::bail!("email must list at least one recipient in 'to'");
        }

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    /// Navigation timings derived from this configuration
    pub fn transition_timings(&self) -> TransitionTimings {
        TransitionTimings {
            project_main: Duration::from_millis(self.navigation.project_main_delay_ms),
            all_projects_main: Duration::from_millis(self.navigation.all_projects_main_delay_ms),
            safety: Duration::from_millis(self.navigation.safety_deadline_ms),
            selection_clear: Duration::from_millis(self.navigation.selection_clear_ms),
            scroll_after_close: Duration::from_millis(self.navigation.scroll_after_close_ms),
            splash: Duration::from_millis(self.ui.splash_ms),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Folio Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("folio"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
