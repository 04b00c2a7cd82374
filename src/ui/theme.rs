//! Colour palettes for the dark and light themes

use ratatui::style::{Color, Modifier, Style};

use crate::settings::{Settings, Theme};

/// Brand orange used for the logo and highlights
pub const ACCENT: Color = Color::Rgb(248, 154, 28);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
    /// Content width as a share of the terminal, driven by the font scale
    pub font_scale: f32,
    pub reduced_motion: bool,
}

impl Palette {
    pub fn for_settings(settings: &Settings) -> Self {
        let base = match settings.theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        };
        Self {
            font_scale: settings.font_scale,
            reduced_motion: settings.reduced_motion,
            ..base
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(17, 17, 17),
            text: Color::White,
            muted: Color::Gray,
            accent: ACCENT,
            border: Color::DarkGray,
            highlight_bg: Color::Rgb(48, 48, 48),
            success: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
            font_scale: 1.0,
            reduced_motion: false,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 248, 244),
            text: Color::Black,
            muted: Color::DarkGray,
            accent: Color::Rgb(196, 110, 0),
            border: Color::Gray,
            highlight_bg: Color::Rgb(232, 226, 214),
            success: Color::Rgb(0, 128, 0),
            error: Color::Rgb(180, 0, 0),
            info: Color::Blue,
            font_scale: 1.0,
            reduced_motion: false,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
