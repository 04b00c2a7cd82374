use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::catalog::{all_projects, Project, Section};
use crate::ui::components::dialogs::common::{create_instructions_paragraph, shortcuts};
use crate::ui::core::{Action, Component, RenderContext};
use crate::ui::layout::LayoutManager;

const CARD_HEIGHT: u16 = 5;

/// Grid of every project, ordered by category then title
pub struct AllProjectsComponent {
    projects: Vec<Project>,
    selected: usize,
    columns: u16,
}

impl Default for AllProjectsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl AllProjectsComponent {
    pub fn new() -> Self {
        Self {
            projects: all_projects(),
            selected: 0,
            columns: 2,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn step(&mut self, delta: isize) {
        if self.projects.is_empty() {
            return;
        }
        let len = self.projects.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }
}

impl Component for AllProjectsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let columns = self.columns as isize;
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => Action::CloseAllProjects(Some(Section::Portfolio)),
            KeyCode::Char('l') | KeyCode::Right => {
                self.step(1);
                Action::None
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.step(-1);
                Action::None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.step(columns);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.step(-columns);
                Action::None
            }
            KeyCode::Enter => match self.projects.get(self.selected) {
                Some(project) => Action::SelectProject(project.clone()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        f.render_widget(Clear, rect);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border())
            .title(Span::styled(" All projects ", palette.title()))
            .style(palette.base());
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(inner);
        self.columns = if chunks[0].width >= 90 { 3 } else { 2 };

        // Scroll so the selected row stays visible
        let visible_rows = (chunks[0].height / CARD_HEIGHT).max(1) as usize;
        let selected_row = self.selected / self.columns as usize;
        let first_row = selected_row.saturating_sub(visible_rows - 1);
        let skip = first_row * self.columns as usize;

        let shown = &self.projects[skip.min(self.projects.len())..];
        let cards = LayoutManager::card_grid(chunks[0], shown.len(), self.columns, CARD_HEIGHT);
        for (offset, (project, area)) in shown.iter().zip(cards).enumerate() {
            let is_selected = skip + offset == self.selected;
            let border = if is_selected {
                Style::default().fg(palette.accent)
            } else {
                palette.border()
            };
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    project.title.clone(),
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(project.category.label(), palette.muted())),
                Line::from(Span::styled(project.tech.join(", "), Style::default().fg(palette.info))),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            )
            .wrap(Wrap { trim: true });
            f.render_widget(card, area);
        }

        f.render_widget(
            create_instructions_paragraph(&[shortcuts::ENTER_OPEN, shortcuts::SEPARATOR, shortcuts::ESC_BACK]),
            chunks[1],
        );
    }
}
