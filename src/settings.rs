//! Theme and accessibility settings.
//!
//! One [`SettingsStore`] exists per process. It persists the settings as JSON
//! and publishes every change through a `tokio::sync::watch` channel, so
//! components subscribe once instead of re-reading state on every frame.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::constants::{FONT_SCALE_MAX, FONT_SCALE_MIN, FONT_SCALE_STEP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub reduced_motion: bool,
    pub font_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            reduced_motion: false,
            font_scale: 1.0,
        }
    }
}

impl Settings {
    /// Anything other than the defaults counts as accessibility mode
    pub fn is_accessibility_mode(&self) -> bool {
        self.reduced_motion || self.theme == Theme::Light || (self.font_scale - 1.0).abs() > f32::EPSILON
    }

    fn normalized(mut self) -> Self {
        self.font_scale = clamp_font_scale(self.font_scale);
        self
    }
}

pub fn clamp_font_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(FONT_SCALE_MIN, FONT_SCALE_MAX)
}

/// Observable, persisted settings
pub struct SettingsStore {
    path: Option<PathBuf>,
    sender: watch::Sender<Settings>,
}

impl SettingsStore {
    /// Store that never touches the disk
    pub fn in_memory(initial: Settings) -> Self {
        let (sender, _) = watch::channel(initial.normalized());
        Self { path: None, sender }
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unreadable
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str::<Settings>(&content).unwrap_or_else(|e| {
                log::warn!("Settings: ignoring unreadable {}: {}", path.display(), e);
                Settings::default()
            }),
            Err(_) => Settings::default(),
        };

        let (sender, _) = watch::channel(settings.normalized());
        Self {
            path: Some(path),
            sender,
        }
    }

    /// Load from the default location in the user data directory
    pub fn load_default() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_from(path),
            Err(e) => {
                log::warn!("Settings: {}, keeping settings in memory", e);
                Self::in_memory(Settings::default())
            }
        }
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("folio").join("settings.json"))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn current(&self) -> Settings {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.sender.subscribe()
    }

    /// Apply `change`, publish the result and persist it
    pub fn update(&self, change: impl FnOnce(&mut Settings)) -> Settings {
        self.sender.send_modify(|settings| {
            change(settings);
            *settings = settings.normalized();
        });
        let settings = self.current();
        if let Err(e) = self.persist(&settings) {
            log::warn!("Settings: failed to persist: {:#}", e);
        }
        settings
    }

    pub fn toggle_theme(&self) -> Settings {
        self.update(|s| s.theme = s.theme.toggled())
    }

    pub fn toggle_reduced_motion(&self) -> Settings {
        self.update(|s| s.reduced_motion = !s.reduced_motion)
    }

    pub fn set_font_scale(&self, scale: f32) -> Settings {
        self.update(|s| s.font_scale = scale)
    }

    pub fn increase_font_scale(&self) -> Settings {
        self.update(|s| s.font_scale += FONT_SCALE_STEP)
    }

    pub fn decrease_font_scale(&self) -> Settings {
        self.update(|s| s.font_scale -= FONT_SCALE_STEP)
    }

    fn persist(&self, settings: &Settings) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write settings: {}", path.display()))?;
        Ok(())
    }
}
