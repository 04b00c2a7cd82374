use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::catalog::{project_url, Crop, Project, Section};
use crate::ui::components::dialogs::common::{create_instructions_paragraph, shortcuts};
use crate::ui::core::{Action, Component, DialogType, RenderContext};
use crate::ui::error_boundary::UiError;
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;

/// Full-page case study for the selected project
#[derive(Default)]
pub struct ProjectDetailComponent {
    project: Option<Project>,
}

impl ProjectDetailComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync with the controller's selection
    pub fn set_project(&mut self, project: Option<Project>) {
        self.project = project;
    }

    /// Checked before rendering: the page must never show without a project
    pub fn ensure_renderable(&self) -> Result<(), UiError> {
        match &self.project {
            Some(_) => Ok(()),
            None => Err(UiError::Render("project detail opened without a project".to_string())),
        }
    }

    fn hero_lines(project: &Project, palette: &Palette) -> Vec<Line<'static>> {
        let treatment = project.treatment;
        let shade = if treatment.is_dimmed() { "▒" } else { "░" };
        let band = shade.repeat(48);
        let image = project.image.clone().unwrap_or_else(|| "no preview".to_string());
        let caption = Line::from(Span::styled(
            format!("  {}  ", image),
            Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
        ));
        let fill = Line::from(Span::styled(band, Style::default().fg(palette.border)));

        // Crop decides which rows of the frame the caption sits in
        match treatment.crop {
            Crop::Top => vec![caption, fill.clone(), fill],
            Crop::Center => vec![fill.clone(), caption, fill],
            Crop::Bottom => vec![fill.clone(), fill, caption],
        }
    }
}

impl Component for ProjectDetailComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => Action::CloseProjectDetail(Some(Section::Portfolio)),
            KeyCode::Char('o') => match self.project.as_ref().and_then(project_url) {
                Some(url) => Action::ShowDialog(DialogType::Info(format!("Visit the live site:\n{}", url))),
                None => Action::ShowDialog(DialogType::Info("This project has no public site".to_string())),
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let Some(project) = &self.project else {
            return;
        };
        let palette = &ctx.palette;

        f.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border())
            .title(Span::styled(format!(" {} ", project.title), palette.title()))
            .style(palette.base());
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let column = LayoutManager::content_column(inner, palette.font_scale);
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(column);

        f.render_widget(
            Paragraph::new(Span::styled(project.category.label(), palette.muted())),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(Self::hero_lines(project, palette)).alignment(Alignment::Center),
            chunks[1],
        );
        f.render_widget(
            Paragraph::new(project.description.clone())
                .style(palette.base())
                .wrap(Wrap { trim: true }),
            chunks[3],
        );

        let mut tech = vec![Span::styled("Built with: ", palette.muted())];
        tech.push(Span::styled(project.tech.join(" · "), Style::default().fg(palette.info)));
        f.render_widget(Paragraph::new(Line::from(tech)).wrap(Wrap { trim: true }), chunks[4]);

        f.render_widget(
            create_instructions_paragraph(&[
                ("o", palette.accent, " Live site"),
                shortcuts::SEPARATOR,
                shortcuts::ESC_BACK,
            ]),
            chunks[5],
        );
    }
}
