use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::core::{Action, Component, RenderContext};
use crate::ui::layout::LayoutManager;

const SECRET: &[&str] = &[
    "You found the back room.",
    "",
    "This site was built one late night at a time, mostly with coffee",
    "and a stubborn refusal to ship an inaccessible button.",
    "",
    "Thanks for clicking around. Say hi from the contact form and",
    "mention the logo; I'll know you've been here.",
];

/// Easter egg page opened by the footer logo or Ctrl+Shift+D
#[derive(Default)]
pub struct HiddenPageComponent;

impl HiddenPageComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for HiddenPageComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => Action::CloseHiddenPage,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        f.render_widget(Clear, rect);
        f.render_widget(Block::default().style(palette.base()), rect);

        let area = LayoutManager::centered_rect_lines(70, SECRET.len() as u16 + 4, rect);
        let mut lines: Vec<Line> = SECRET
            .iter()
            .map(|line| Line::from(Span::styled(*line, palette.base())))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Esc to go back", palette.muted())));

        f.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(ratatui::style::Style::default().fg(palette.accent))
                        .title(Span::styled(" ✦ secret ✦ ", palette.title())),
                )
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}
