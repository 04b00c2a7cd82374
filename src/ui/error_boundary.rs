//! Top-level error boundary.
//!
//! Overlay and render failures end up here instead of tearing down the
//! terminal. The boundary replaces the whole screen with a reload prompt;
//! Ctrl+R resets the UI back to the home page.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use thiserror::Error;

use super::layout::LayoutManager;
use super::theme::Palette;
use crate::constants::{ERROR_BOUNDARY_GENERIC, ERROR_BOUNDARY_TIMEOUT, ERROR_BOUNDARY_TITLE};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("{overlay} did not load in time")]
    LoadTimeout { overlay: &'static str },

    #[error("{overlay} failed to load: {reason}")]
    LoadFailed { overlay: &'static str, reason: String },

    #[error("render failed: {0}")]
    Render(String),
}

impl UiError {
    /// Text shown to the visitor
    pub fn user_message(&self) -> &'static str {
        match self {
            UiError::LoadTimeout { .. } => ERROR_BOUNDARY_TIMEOUT,
            _ => ERROR_BOUNDARY_GENERIC,
        }
    }
}

/// Holds the error currently caught, if any
#[derive(Debug, Default)]
pub struct ErrorBoundary {
    caught: Option<UiError>,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catch an error. The first one wins until the boundary is reset.
    pub fn catch(&mut self, error: UiError) {
        log::error!("UI error caught at boundary: {}", error);
        if self.caught.is_none() {
            self.caught = Some(error);
        }
    }

    pub fn caught(&self) -> Option<&UiError> {
        self.caught.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.caught.is_some()
    }

    pub fn reset(&mut self) {
        self.caught = None;
    }

    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let Some(error) = &self.caught else {
            return;
        };

        f.render_widget(Clear, area);
        f.render_widget(Block::default().style(palette.base()), area);

        let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
        let lines = vec![
            Line::from(Span::styled(ERROR_BOUNDARY_TITLE, palette.title())),
            Line::from(""),
            Line::from(Span::styled(error.user_message(), palette.base())),
            Line::from(""),
            Line::from(Span::styled("Ctrl+R reload • q quit", palette.muted())),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(ratatui::style::Style::default().fg(palette.error)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, dialog_area);
    }
}
