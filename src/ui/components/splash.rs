use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::ui::core::{Action, Component, RenderContext};
use crate::ui::layout::LayoutManager;

pub const LOGO: &str = "◆ folio";

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Loading screen shown while the app starts. Swallows all input.
#[derive(Default)]
pub struct SplashComponent;

impl SplashComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for SplashComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        f.render_widget(Clear, rect);
        f.render_widget(Block::default().style(palette.base()), rect);

        let spinner = if palette.reduced_motion {
            "…"
        } else {
            SPINNER[(ctx.tick as usize) % SPINNER.len()]
        };

        let area = LayoutManager::centered_rect_lines(50, 3, rect);
        let lines = vec![
            Line::from(Span::styled(LOGO, palette.title())),
            Line::from(""),
            Line::from(Span::styled(format!("{} loading", spinner), palette.muted())),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
