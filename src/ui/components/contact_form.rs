use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::contact::{ContactForm, FormField, MessageKind, SubmitOutcome};
use crate::ui::components::dialogs::common::{create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::ui::core::{Action, Component, RenderContext};

/// Contact section form. Only takes keys while it is being edited.
#[derive(Default)]
pub struct ContactFormComponent {
    pub form: ContactForm,
    editing: bool,
}

impl ContactFormComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn focus(&mut self) {
        self.editing = true;
    }

    pub fn blur(&mut self) {
        self.editing = false;
    }

    /// Apply a finished submission. Returns the status message id to clear
    /// later when the submission succeeded.
    pub fn submitted(&mut self, outcome: SubmitOutcome) -> Option<u64> {
        let clear_id = self.form.finish_submit(outcome);
        if clear_id.is_some() {
            self.editing = false;
        }
        clear_id
    }
}

impl Component for ContactFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.editing {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => Action::BlurContactForm,
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_previous();
                Action::None
            }
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) && self.form.focus == FormField::Message => {
                self.form.insert_char('\n');
                Action::None
            }
            KeyCode::Enter if self.form.focus == FormField::Message => Action::SubmitContact,
            KeyCode::Enter => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::Backspace => {
                self.form.backspace();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.insert_char(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::FocusContactForm => {
                self.focus();
                action
            }
            Action::BlurContactForm => {
                self.blur();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(rect);

        for (field, area) in [
            (FormField::Name, chunks[0]),
            (FormField::Email, chunks[1]),
            (FormField::Message, chunks[2]),
        ] {
            let focused = self.editing && self.form.focus == field;
            f.render_widget(
                create_input_paragraph(self.form.field(field), field.label(), focused, palette.accent)
                    .style(Style::default().fg(palette.text)),
                area,
            );
        }

        let status = if self.form.is_submitting() {
            Line::from(Span::styled("Sending…", palette.muted()))
        } else {
            match self.form.status() {
                Some(message) => {
                    let color = match message.kind {
                        MessageKind::Success => palette.success,
                        MessageKind::Error => palette.error,
                    };
                    Line::from(Span::styled(message.text.clone(), Style::default().fg(color)))
                }
                None => Line::from(""),
            }
        };
        f.render_widget(Paragraph::new(status), chunks[3]);

        let instructions = if self.editing {
            create_instructions_paragraph(&[
                shortcuts::TAB_NEXT,
                shortcuts::SEPARATOR,
                ("Enter", palette.success, " Send from message"),
                shortcuts::SEPARATOR,
                shortcuts::ESC_BACK,
            ])
        } else {
            create_instructions_paragraph(&[("c", palette.accent, " Write a message")])
        };
        f.render_widget(instructions, chunks[4]);
    }
}
