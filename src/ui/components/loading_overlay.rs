use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Gauge, Paragraph},
    Frame,
};
use tokio::time::Instant;

use crate::navigation::TransitionKind;
use crate::ui::core::{Action, Component, RenderContext};
use crate::ui::layout::LayoutManager;

/// Entrance animation shown while a page transition is pending.
///
/// The gauge fills over the main delay. When it is full, or when the visitor
/// presses Enter/Space, the overlay reports the animation as complete.
pub struct LoadingOverlay {
    kind: Option<TransitionKind>,
    started_at: Instant,
    duration: std::time::Duration,
    reported: bool,
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingOverlay {
    pub fn new() -> Self {
        Self {
            kind: None,
            started_at: Instant::now(),
            duration: std::time::Duration::ZERO,
            reported: false,
        }
    }

    /// Track the transition currently pending, restarting the animation when
    /// it changes
    pub fn track(&mut self, kind: Option<TransitionKind>, duration: std::time::Duration) {
        if self.kind != kind {
            self.kind = kind;
            self.started_at = Instant::now();
            self.duration = duration;
            self.reported = false;
        }
    }

    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.started_at.elapsed().as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Called on ticks; yields the completion signal once per transition
    pub fn poll_complete(&mut self) -> Action {
        match self.kind {
            Some(kind) if !self.reported && self.progress() >= 1.0 => {
                self.reported = true;
                Action::AnimationComplete(kind)
            }
            _ => Action::None,
        }
    }
}

impl Component for LoadingOverlay {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match (self.kind, key.code) {
            (Some(kind), KeyCode::Enter | KeyCode::Char(' ')) if !self.reported => {
                self.reported = true;
                Action::AnimationComplete(kind)
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let Some(kind) = self.kind else {
            return;
        };
        let palette = &ctx.palette;

        let label = match kind {
            TransitionKind::ProjectDetail => match &ctx.nav.selected_project {
                Some(project) => format!("Loading {}", project.title),
                None => "Loading project".to_string(),
            },
            TransitionKind::AllProjects => "Loading all projects".to_string(),
        };

        let area = LayoutManager::centered_rect_lines(50, 5, rect);
        f.render_widget(Clear, area);
        f.render_widget(Block::default().style(palette.base()), area);

        let chunks = Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).split(area);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(label, palette.title()))).alignment(Alignment::Center),
            chunks[0],
        );

        let ratio = if palette.reduced_motion { 1.0 } else { self.progress() };
        f.render_widget(
            Gauge::default()
                .gauge_style(ratatui::style::Style::default().fg(palette.accent))
                .ratio(ratio)
                .label(""),
            chunks[1],
        );
    }
}
