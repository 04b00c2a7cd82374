//! Modal dialogs: help, logs, errors and info messages.

use crate::logger::Logger;
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component, RenderContext,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        match (dialog_type, key.code) {
            (_, KeyCode::Char('j') | KeyCode::Down) => Action::DialogScrollDown,
            (_, KeyCode::Char('k') | KeyCode::Up) => Action::DialogScrollUp,
            (DialogType::Help, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) => Action::HideDialog,
            (DialogType::Logs, KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q')) => Action::HideDialog,
            (DialogType::Help | DialogType::Logs, _) => Action::None,
            // Error and info dialogs close on any other key
            (DialogType::Error(_) | DialogType::Info(_), _) => Action::HideDialog,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll_offset = 0;
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            Action::DialogScrollDown if self.is_visible() => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            Action::DialogScrollUp if self.is_visible() => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        match &self.dialog_type {
            Some(DialogType::Help) => {
                system_dialogs::render_help_dialog(f, rect, palette, self.scroll_offset, &mut self.scrollbar_state);
            }
            Some(DialogType::Logs) => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(
                    f,
                    rect,
                    palette,
                    &logs,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            Some(DialogType::Error(message)) => {
                system_dialogs::render_message_dialog(
                    f,
                    rect,
                    palette,
                    "⚠ Error",
                    message,
                    true,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            Some(DialogType::Info(message)) => {
                system_dialogs::render_message_dialog(
                    f,
                    rect,
                    palette,
                    "ℹ Info",
                    message,
                    false,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            None => {}
        }
    }
}
