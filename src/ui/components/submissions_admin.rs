use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::contact::SubmissionList;
use crate::entities::{contact_submission, DeliveryStatus};
use crate::ui::components::dialogs::common::{create_instructions_paragraph, shortcuts};
use crate::ui::core::{Action, Component, RenderContext};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadState {
    Idle,
    Loading,
    Loaded,
}

/// Operator view of the submission log, loaded from the relay
pub struct SubmissionsAdminComponent {
    submissions: Vec<contact_submission::Model>,
    count: usize,
    table_state: TableState,
    load_state: LoadState,
}

impl Default for SubmissionsAdminComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionsAdminComponent {
    pub fn new() -> Self {
        Self {
            submissions: Vec::new(),
            count: 0,
            table_state: TableState::default(),
            load_state: LoadState::Idle,
        }
    }

    pub fn submissions(&self) -> &[contact_submission::Model] {
        &self.submissions
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn start_loading(&mut self) {
        self.load_state = LoadState::Loading;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn selected(&self) -> Option<&contact_submission::Model> {
        self.table_state.selected().and_then(|i| self.submissions.get(i))
    }

    fn status_cell(status: &DeliveryStatus, palette: &Palette) -> Cell<'static> {
        let (label, color) = match status {
            DeliveryStatus::Received => ("received", palette.muted),
            DeliveryStatus::EmailSent => ("email sent", palette.success),
            DeliveryStatus::EmailFailed => ("email failed", palette.error),
            DeliveryStatus::EmailDisabled => ("email off", palette.info),
        };
        Cell::from(Span::styled(label, Style::default().fg(color)))
    }
}

impl Component for SubmissionsAdminComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => Action::CloseSubmissionsAdmin,
            KeyCode::Char('r') => Action::RefreshSubmissions,
            KeyCode::Char('j') | KeyCode::Down => {
                if !self.submissions.is_empty() {
                    let next = self.table_state.selected().map_or(0, |i| (i + 1) % self.submissions.len());
                    self.table_state.select(Some(next));
                }
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if !self.submissions.is_empty() {
                    let len = self.submissions.len();
                    let prev = self.table_state.selected().map_or(0, |i| (i + len - 1) % len);
                    self.table_state.select(Some(prev));
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SubmissionsLoaded(SubmissionList { count, submissions }) => {
                self.count = count;
                self.submissions = submissions;
                self.load_state = LoadState::Loaded;
                self.table_state
                    .select(if self.submissions.is_empty() { None } else { Some(0) });
                Action::None
            }
            Action::SubmissionsFailed(_) => {
                self.load_state = LoadState::Idle;
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let area = LayoutManager::centered_rect(90, 85, rect);
        f.render_widget(Clear, area);

        let title = format!(" Contact submissions ({}) ", self.count);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.accent))
            .title(Span::styled(title, palette.title()))
            .style(palette.base());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(5), Constraint::Length(1)]).split(inner);

        if self.load_state == LoadState::Loading {
            f.render_widget(Paragraph::new(Span::styled("Loading submissions…", palette.muted())), chunks[0]);
        } else if self.submissions.is_empty() {
            f.render_widget(Paragraph::new(Span::styled("No submissions yet", palette.muted())), chunks[0]);
        } else {
            let header = Row::new(["Received", "Name", "Email", "Status"])
                .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD));
            let rows: Vec<Row> = self
                .submissions
                .iter()
                .map(|s| {
                    Row::new(vec![
                        Cell::from(s.timestamp.format("%Y-%m-%d %H:%M").to_string()),
                        Cell::from(s.name.clone()),
                        Cell::from(s.email.clone()),
                        Self::status_cell(&s.status, palette),
                    ])
                })
                .collect();

            let table = Table::new(
                rows,
                [
                    Constraint::Length(17),
                    Constraint::Percentage(25),
                    Constraint::Percentage(35),
                    Constraint::Length(13),
                ],
            )
            .header(header)
            .row_highlight_style(palette.selected());
            f.render_stateful_widget(table, chunks[0], &mut self.table_state);
        }

        let detail = match self.selected() {
            Some(s) => {
                let mut text = s.message.clone();
                if let Some(error) = &s.error {
                    text.push_str(&format!("\n\nDelivery error: {}", error));
                }
                if let Some(note) = &s.note {
                    text.push_str(&format!("\n\nNote: {}", note));
                }
                text
            }
            None => String::new(),
        };
        f.render_widget(
            Paragraph::new(detail)
                .block(Block::default().borders(Borders::TOP).border_style(palette.border()))
                .wrap(Wrap { trim: true }),
            chunks[1],
        );

        f.render_widget(
            create_instructions_paragraph(&[("r", palette.accent, " Refresh"), shortcuts::SEPARATOR, shortcuts::ESC_BACK]),
            chunks[2],
        );
    }
}
