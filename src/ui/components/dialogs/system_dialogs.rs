use crate::constants::DIALOG_TITLE_LOGS;
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use super::common::{create_dialog_block, visible_window};

const HELP_CONTENT: &str = r"
FOLIO - Portfolio in your terminal
==================================

NAVIGATION
----------
j/k         Move selection down/up
Enter       Open the selected project
a           View all projects
1-4         Jump to About, Portfolio, Résumé or Contact
Esc/b       Close the current page or overlay
Ctrl+Shift+D  Hidden page (Alt+Shift+D on terminals without
              keyboard enhancement)
Ctrl+Shift+C  Contact submissions (Alt+Shift+C on terminals
              without keyboard enhancement, where Ctrl+Shift+C
              arrives as Ctrl+C and quits)

CONTACT
-------
c           Edit the contact form
Tab         Next field (Shift+Tab for previous)
Enter       Send (from the message field)
Esc         Stop editing

DISPLAY
-------
t           Toggle light/dark theme
m           Toggle reduced motion
+/-         Larger/smaller text column

GENERAL
-------
?           Toggle this help
G           Show logs
q           Quit
Ctrl+C      Quit

Press 'Esc' or '?' to close this help
";

fn render_scrollbar(f: &mut Frame, area: Rect, palette: &Palette, scrollbar_state: &mut ScrollbarState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(palette.muted())
        .thumb_style(Style::default().fg(palette.text));

    f.render_stateful_widget(scrollbar, area, scrollbar_state);
}

/// Message dialog shared by the error and info variants
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    title: &str,
    message: &str,
    is_error: bool,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let color = if is_error { palette.error } else { palette.info };
    let block = create_dialog_block(title, color);

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let (text, total_lines, visible_height) =
        visible_window(message, content_area.height as usize, scroll_offset, scrollbar_state);

    f.render_widget(block, dialog_area);
    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(palette.text))
            .wrap(Wrap { trim: true }),
        content_area,
    );
    f.render_widget(
        Paragraph::new("Press any key to continue • j/k to scroll if needed")
            .style(palette.muted())
            .alignment(Alignment::Center),
        instructions_area,
    );

    if total_lines > visible_height {
        render_scrollbar(f, content_area, palette, scrollbar_state);
    }
}

/// Large scrollable panel used by help and logs
fn render_panel(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    title: &str,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let inner = Rect::new(
        panel_area.x + 2,
        panel_area.y + 1,
        panel_area.width.saturating_sub(4),
        panel_area.height.saturating_sub(2),
    );

    let visible_height = inner.height.saturating_sub(2) as usize;
    let (text, total_lines, _) = visible_window(content, visible_height, scroll_offset, scrollbar_state);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center)
                .border_style(palette.border()),
        )
        .style(palette.base());
    f.render_widget(paragraph, inner);

    if total_lines > visible_height {
        render_scrollbar(f, inner, palette, scrollbar_state);
    }
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    render_panel(
        f,
        area,
        palette,
        "📖 Help - Press 'Esc' or '?' to close",
        HELP_CONTENT,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    logs: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };
    render_panel(f, area, palette, DIALOG_TITLE_LOGS, &content, scroll_offset, scrollbar_state);
}
