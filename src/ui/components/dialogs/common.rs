use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, ScrollbarState},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block, with a cursor when focused
pub fn create_input_paragraph<'a>(value: &'a str, field_title: &str, focused: bool, accent: Color) -> Paragraph<'a> {
    let display = if focused {
        format!("{}█", value)
    } else {
        value.to_string()
    };

    let border = if focused {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .border_style(border);

    Paragraph::new(display)
        .block(input_block)
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Slice `content` to the lines visible at `scroll_offset` and update the
/// scrollbar. Returns the visible text, total and visible line counts.
pub fn visible_window(
    content: &str,
    visible_height: usize,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> (String, usize, usize) {
    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    (text, total_lines, visible_height)
}

/// Common instruction shortcuts
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_BACK: InstructionShortcut = ("Esc", Color::Red, " Back");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ENTER_OPEN: InstructionShortcut = ("Enter", Color::Green, " Open");
}
