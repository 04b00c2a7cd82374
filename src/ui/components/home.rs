//! Home view: section tabs, section content and the footer.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use super::contact_form::ContactFormComponent;
use super::splash::LOGO;
use crate::catalog::{education, experience, featured_projects, Project, Section, ABOUT_TEXT};
use crate::constants::FEATURED_PROJECT_COUNT;
use crate::ui::core::{Action, Component, RenderContext};
use crate::ui::layout::LayoutManager;

pub struct HomeComponent {
    featured: Vec<Project>,
    list_state: ListState,
    pub contact: ContactFormComponent,
    section: Section,
    logo_area: Rect,
    tabs_area: Rect,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            featured: featured_projects(FEATURED_PROJECT_COUNT),
            list_state,
            contact: ContactFormComponent::new(),
            section: Section::default(),
            logo_area: Rect::default(),
            tabs_area: Rect::default(),
        }
    }

    pub fn featured(&self) -> &[Project] {
        &self.featured
    }

    pub fn selected_index(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    /// Footer logo hit box from the last render
    pub fn logo_area(&self) -> Rect {
        self.logo_area
    }

    /// Keep key handling in step with the section on screen
    pub fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    fn move_selection(&mut self, forward: bool) {
        if self.featured.is_empty() {
            return;
        }
        let len = self.featured.len();
        let current = self.selected_index();
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.list_state.select(Some(next));
    }

    fn adjacent_section(&self, forward: bool) -> Section {
        let index = self.section.index();
        let next = if forward {
            (index + 1).min(Section::ALL.len() - 1)
        } else {
            index.saturating_sub(1)
        };
        Section::ALL[next]
    }

    fn tab_at(&self, column: u16) -> Option<Section> {
        // Tabs render as " N Title │" segments; walk them to find the column
        let mut x = self.tabs_area.x;
        for section in Section::ALL {
            let width = section.title().chars().count() as u16 + 5;
            if column >= x && column < x + width {
                return Some(section);
            }
            x += width;
        }
        None
    }

    fn render_nav_bar(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let titles: Vec<Line> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| Line::from(format!("{} {}", i + 1, s.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .select(ctx.nav.scroll_section.index())
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(palette.border())
                    .title(Span::styled(LOGO, palette.title())),
            )
            .style(palette.muted())
            .highlight_style(palette.selected())
            .divider("│");

        self.tabs_area = area;
        f.render_widget(tabs, area);
    }

    fn render_about(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let lines = vec![
            Line::from(Span::styled("Hi, I build websites people can use.", palette.title())),
            Line::from(""),
            Line::from(Span::styled(ABOUT_TEXT, palette.base())),
            Line::from(""),
            Line::from(Span::styled("Press 2 to see recent work, 4 to get in touch.", palette.muted())),
        ];
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn render_portfolio(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);

        let items: Vec<ListItem> = self
            .featured
            .iter()
            .map(|project| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        project.title.clone(),
                        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("  {} · {}", project.category.label(), project.tech.join(", ")),
                        palette.muted(),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.border())
                    .title(Span::styled(" Featured work ", palette.title())),
            )
            .highlight_style(palette.selected())
            .highlight_symbol("→ ");

        f.render_stateful_widget(list, chunks[0], &mut self.list_state);
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Enter", palette.title()),
                Span::styled(" open • ", palette.muted()),
                Span::styled("a", palette.title()),
                Span::styled(" all projects", palette.muted()),
            ]))
            .alignment(Alignment::Center),
            chunks[1],
        );
    }

    fn render_resume(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let mut lines = vec![Line::from(Span::styled("Experience", palette.title()))];
        for entry in experience() {
            lines.push(Line::from(vec![
                Span::styled(entry.role, Style::default().fg(palette.text).add_modifier(Modifier::BOLD)),
                Span::styled(format!(" · {} · {}", entry.organization, entry.period), palette.muted()),
            ]));
            for highlight in entry.highlights {
                lines.push(Line::from(Span::styled(format!("  • {}", highlight), palette.base())));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Education", palette.title())));
        for entry in education() {
            lines.push(Line::from(vec![
                Span::styled(entry.credential, Style::default().fg(palette.text)),
                Span::styled(format!(" · {} · {}", entry.institution, entry.period), palette.muted()),
            ]));
        }
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn render_footer(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        f.render_widget(
            Block::default().borders(Borders::TOP).border_style(palette.border()),
            area,
        );

        let inner = Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(1));
        self.logo_area = LayoutManager::footer_logo_area(inner);
        let chunks = Layout::horizontal([Constraint::Length(self.logo_area.width), Constraint::Min(0)]).split(inner);

        f.render_widget(Paragraph::new(Span::styled(LOGO, palette.title())), chunks[0]);
        f.render_widget(
            Paragraph::new(Span::styled("? help • t theme • m motion • q quit", palette.muted()))
                .alignment(Alignment::Right),
            chunks[1],
        );
    }
}

impl Component for HomeComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.contact.is_editing() {
            return self.contact.handle_key_events(key);
        }

        match (self.section, key.code) {
            (Section::Portfolio, KeyCode::Char('j') | KeyCode::Down) => {
                self.move_selection(true);
                Action::None
            }
            (Section::Portfolio, KeyCode::Char('k') | KeyCode::Up) => {
                self.move_selection(false);
                Action::None
            }
            (Section::Portfolio, KeyCode::Enter) => match self.featured.get(self.selected_index()) {
                Some(project) => Action::SelectProject(project.clone()),
                None => Action::None,
            },
            (_, KeyCode::Char('j') | KeyCode::Down) => Action::ScrollTo(self.adjacent_section(true)),
            (_, KeyCode::Char('k') | KeyCode::Up) => Action::ScrollTo(self.adjacent_section(false)),
            (_, KeyCode::Char('a')) => Action::ViewAllProjects,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Action::None;
        }
        if LayoutManager::contains(self.logo_area, mouse.column, mouse.row) {
            return Action::LogoClicked;
        }
        if LayoutManager::contains(self.tabs_area, mouse.column, mouse.row) {
            if let Some(section) = self.tab_at(mouse.column) {
                return Action::ScrollTo(section);
            }
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        self.contact.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        self.section = ctx.nav.scroll_section;
        let layout = LayoutManager::home_layout(rect);
        self.render_nav_bar(f, layout.nav_bar, ctx);

        let content = LayoutManager::content_column(layout.content, ctx.palette.font_scale);
        let content = Rect::new(content.x, content.y + 1, content.width, content.height.saturating_sub(1));
        match self.section {
            Section::About => self.render_about(f, content, ctx),
            Section::Portfolio => self.render_portfolio(f, content, ctx),
            Section::Resume => self.render_resume(f, content, ctx),
            Section::Contact => self.contact.render(f, content, ctx),
        }

        self.render_footer(f, layout.footer, ctx);
    }
}
