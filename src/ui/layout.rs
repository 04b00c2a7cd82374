//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::FOOTER_HEIGHT;

/// Width of the footer logo hit box, in columns
const LOGO_WIDTH: u16 = 14;

/// Areas of the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub nav_bar: Rect,
    pub content: Rect,
    pub footer: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Navigation bar on top, content, footer at the bottom
    #[must_use]
    pub fn home_layout(area: Rect) -> HomeLayout {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        HomeLayout {
            nav_bar: chunks[0],
            content: chunks[1],
            footer: chunks[2],
        }
    }

    /// Area of the clickable logo inside the footer
    #[must_use]
    pub fn footer_logo_area(footer: Rect) -> Rect {
        let width = LOGO_WIDTH.min(footer.width);
        Rect::new(footer.x, footer.y, width, footer.height)
    }

    /// Horizontally centred content column. A larger font scale widens it so
    /// text wraps less; a smaller one narrows it.
    #[must_use]
    pub fn content_column(area: Rect, font_scale: f32) -> Rect {
        let percent = ((70.0 * font_scale).round() as u16).clamp(40, 100);
        let width = (u32::from(area.width) * u32::from(percent) / 100) as u16;
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        Rect::new(x, area.y, width, area.height)
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Grid of `count` cards, `columns` per row, each `card_height` lines tall
    #[must_use]
    pub fn card_grid(area: Rect, count: usize, columns: u16, card_height: u16) -> Vec<Rect> {
        let columns = columns.max(1);
        let card_width = area.width / columns;
        (0..count)
            .map(|i| {
                let row = (i as u16) / columns;
                let col = (i as u16) % columns;
                Rect::new(
                    area.x + col * card_width,
                    area.y + row * card_height,
                    card_width,
                    card_height,
                )
            })
            .filter(|rect| rect.bottom() <= area.bottom())
            .collect()
    }

    /// Whether a terminal cell lies inside `area`
    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}
