use std::time::Duration;

use crate::catalog::Section;
use crate::constants::{MSG_NETWORK_ERROR, SUBMIT_MESSAGE_TTL_MS};
use crate::contact::SubmitOutcome;
use crate::navigation::{NavEvent, NavigationController, Page, TransitionKind, TransitionTimings};
use crate::settings::Settings;
use crate::ui::components::{
    AllProjectsComponent, DialogComponent, HiddenPageComponent, HomeComponent, LoadingOverlay,
    ProjectDetailComponent, SplashComponent, SubmissionsAdminComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    AppContext, Component, RenderContext,
};
use crate::ui::error_boundary::ErrorBoundary;
use crate::ui::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    widgets::{Block, Clear},
    Frame,
};
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    splash: SplashComponent,
    home: HomeComponent,
    loading: LoadingOverlay,
    project_detail: ProjectDetailComponent,
    all_projects: AllProjectsComponent,
    hidden_page: HiddenPageComponent,
    submissions_admin: SubmissionsAdminComponent,
    dialog: DialogComponent,
    boundary: ErrorBoundary,

    // Services
    ctx: AppContext,
    navigation: NavigationController,
    nav_events: mpsc::UnboundedReceiver<NavEvent>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    base_timings: TransitionTimings,
    palette: Palette,
    tick: u64,
    should_quit: bool,
}

impl AppComponent {
    /// Build the app and start the splash. Must run inside a tokio runtime.
    pub fn new(ctx: AppContext) -> Self {
        let settings = ctx.settings.current();
        let base_timings = ctx.config.transition_timings();
        let (navigation, nav_events) = NavigationController::new(Self::effective_timings(base_timings, &settings));
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut dialog = DialogComponent::new();
        dialog.set_logger(ctx.logger.clone());

        let mut app = Self {
            splash: SplashComponent::new(),
            home: HomeComponent::new(),
            loading: LoadingOverlay::new(),
            project_detail: ProjectDetailComponent::new(),
            all_projects: AllProjectsComponent::new(),
            hidden_page: HiddenPageComponent::new(),
            submissions_admin: SubmissionsAdminComponent::new(),
            dialog,
            boundary: ErrorBoundary::new(),
            ctx,
            navigation,
            nav_events,
            task_manager,
            background_action_rx,
            base_timings,
            palette: Palette::for_settings(&settings),
            tick: 0,
            should_quit: false,
        };

        app.ctx.logger.log("AppComponent: starting splash".to_string());
        app.navigation.start_splash();
        app
    }

    fn effective_timings(base: TransitionTimings, settings: &Settings) -> TransitionTimings {
        if settings.reduced_motion {
            base.reduced_motion()
        } else {
            base
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn boundary(&self) -> &ErrorBoundary {
        &self.boundary
    }

    pub fn home(&self) -> &HomeComponent {
        &self.home
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Pick up settings published through the store
    fn refresh_settings(&mut self) {
        if let Some(settings) = self.ctx.settings_changed() {
            self.palette = Palette::for_settings(&settings);
            self.navigation
                .set_timings(Self::effective_timings(self.base_timings, &settings));
            self.ctx.logger.log(format!(
                "Settings: theme {:?}, reduced motion {}, font scale {:.1}",
                settings.theme, settings.reduced_motion, settings.font_scale
            ));
        }
    }

    /// Pending transition, if any, for the loading overlay
    fn pending_transition(&self) -> Option<TransitionKind> {
        if self.navigation.is_project_loading() {
            Some(TransitionKind::ProjectDetail)
        } else if self.navigation.is_all_projects_loading() {
            Some(TransitionKind::AllProjects)
        } else {
            None
        }
    }

    /// Shortcuts that work on every page
    ///
    /// Without keyboard enhancement a terminal sends Ctrl+Shift+C as plain
    /// Ctrl+C, so Alt+Shift+D and Alt+Shift+C are bound as well.
    fn handle_chord(&self, key: KeyEvent) -> Option<Action> {
        let mods = key.modifiers;
        let chord = mods.contains(KeyModifiers::SHIFT)
            && (mods.contains(KeyModifiers::CONTROL) || mods.contains(KeyModifiers::SUPER));
        let alt_chord = mods.contains(KeyModifiers::ALT)
            && (mods.contains(KeyModifiers::SHIFT) || matches!(key.code, KeyCode::Char(c) if c.is_ascii_uppercase()));

        match key.code {
            KeyCode::Char('d' | 'D') if chord || alt_chord => Some(Action::OpenHiddenPage),
            KeyCode::Char('c' | 'C') if chord || alt_chord => Some(Action::OpenSubmissionsAdmin),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
            _ => None,
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let page = self.navigation.current_page();
        match key.code {
            KeyCode::Char('q') => {
                self.ctx.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('m') => Action::ToggleReducedMotion,
            KeyCode::Char('+' | '=') => Action::IncreaseFontScale,
            KeyCode::Char('-') => Action::DecreaseFontScale,
            KeyCode::Char('L') => Action::LogoClicked,
            KeyCode::Char(c @ '1'..='4') => match Section::from_digit(c) {
                Some(section) => self.navigate_home_to(page, section),
                None => Action::None,
            },
            KeyCode::Char('c') => match page {
                Page::Home => Action::FocusContactForm,
                _ => self.navigate_home_to(page, Section::Contact),
            },
            KeyCode::Char('a') if page != Page::AllProjects => Action::ViewAllProjects,
            _ => Action::None,
        }
    }

    /// Scroll on home, or close the open page and scroll once it is gone
    fn navigate_home_to(&self, page: Page, section: Section) -> Action {
        match page {
            Page::Home => Action::ScrollTo(section),
            Page::ProjectDetail => Action::CloseProjectDetail(Some(section)),
            Page::AllProjects => Action::CloseAllProjects(Some(section)),
            Page::HiddenPage => Action::CloseHiddenPage,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.boundary.has_error() {
            return match key.code {
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Reload,
                KeyCode::Char('q') => Action::Quit,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
                _ => Action::None,
            };
        }

        if self.navigation.is_app_loading() {
            let quit = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            return if quit { Action::Quit } else { self.splash.handle_key_events(key) };
        }

        if let Some(action) = self.handle_chord(key) {
            return action;
        }

        if self.dialog.is_visible() {
            // Dialog has priority when visible
            return self.dialog.handle_key_events(key);
        }

        if self.home.contact.is_editing() && self.navigation.current_page() == Page::Home {
            return self.home.handle_key_events(key);
        }

        let action = if self.navigation.is_submissions_admin_open() {
            self.submissions_admin.handle_key_events(key)
        } else if self.navigation.is_transitioning() {
            self.loading.handle_key_events(key)
        } else {
            match self.navigation.current_page() {
                Page::HiddenPage => self.hidden_page.handle_key_events(key),
                Page::ProjectDetail => self.project_detail.handle_key_events(key),
                Page::AllProjects => self.all_projects.handle_key_events(key),
                Page::Home => self.home.handle_key_events(key),
            }
        };

        if matches!(action, Action::None) {
            self.handle_global_key(key)
        } else {
            action
        }
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        let overlay_up = self.boundary.has_error()
            || self.navigation.is_app_loading()
            || self.dialog.is_visible()
            || self.navigation.is_submissions_admin_open()
            || self.navigation.is_transitioning();
        if overlay_up || self.navigation.current_page() != Page::Home {
            return Action::None;
        }
        self.home.handle_mouse_events(mouse)
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Navigation(event) => {
                self.navigation.apply(event);
                Action::None
            }
            Action::SkipSplash => {
                self.navigation.finish_splash();
                Action::None
            }
            Action::SelectProject(project) => {
                self.ctx.logger.log(format!("Navigation: opening '{}'", project.title));
                self.home.contact.blur();
                self.navigation.select_project(project);
                Action::None
            }
            Action::CloseProjectDetail(target) => {
                self.navigation.close_project_detail(target);
                Action::None
            }
            Action::ViewAllProjects => {
                self.home.contact.blur();
                self.navigation.view_all_projects();
                Action::None
            }
            Action::CloseAllProjects(target) => {
                self.navigation.close_all_projects(target);
                Action::None
            }
            Action::AnimationComplete(kind) => {
                self.navigation.signal_animation_complete(kind);
                Action::None
            }
            Action::ScrollTo(section) => {
                self.navigation.scroll_to(section);
                Action::None
            }
            Action::LogoClicked => {
                if self.navigation.logo_clicked(tokio::time::Instant::now()) {
                    self.ctx.logger.log("Easter egg: hidden page unlocked".to_string());
                }
                Action::None
            }
            Action::OpenHiddenPage => {
                self.navigation.open_hidden_page();
                Action::None
            }
            Action::CloseHiddenPage => {
                self.navigation.close_hidden_page();
                Action::None
            }
            Action::OpenSubmissionsAdmin => {
                self.navigation.open_submissions_admin();
                self.handle_app_action(Action::RefreshSubmissions)
            }
            Action::CloseSubmissionsAdmin => {
                self.navigation.close_submissions_admin();
                self.submissions_admin.reset();
                Action::None
            }
            Action::RefreshSubmissions => {
                match self.ctx.relay.clone() {
                    Some(client) if !self.submissions_admin.is_loading() => {
                        self.submissions_admin.start_loading();
                        self.task_manager.spawn_submissions_fetch(client);
                    }
                    Some(_) => {}
                    None => {
                        return Action::ShowDialog(DialogType::Error("Contact relay is not configured".to_string()));
                    }
                }
                Action::None
            }
            Action::SubmissionsFailed(error) => {
                if self.navigation.is_submissions_admin_open() {
                    self.boundary.catch(error);
                }
                Action::None
            }
            Action::FocusContactForm => {
                self.navigation.scroll_to(Section::Contact);
                Action::None
            }
            Action::SubmitContact => {
                let Some(submission) = self.home.contact.form.begin_submit() else {
                    return Action::None;
                };
                match self.ctx.relay.clone() {
                    Some(client) => {
                        self.task_manager.spawn_contact_submit(client, submission);
                        Action::None
                    }
                    None => self.handle_app_action(Action::ContactSubmitted(SubmitOutcome::Failure(
                        MSG_NETWORK_ERROR.to_string(),
                    ))),
                }
            }
            Action::ContactSubmitted(outcome) => {
                self.ctx.logger.log(format!("Contact: submission finished: {:?}", outcome));
                if let Some(id) = self.home.contact.submitted(outcome) {
                    self.task_manager.spawn_delayed(
                        Duration::from_millis(SUBMIT_MESSAGE_TTL_MS),
                        Action::ClearSubmitMessage(id),
                    );
                }
                Action::None
            }
            Action::ClearSubmitMessage(id) => {
                self.home.contact.form.clear_status(id);
                Action::None
            }
            Action::ToggleTheme => {
                self.ctx.settings.toggle_theme();
                Action::None
            }
            Action::ToggleReducedMotion => {
                self.ctx.settings.toggle_reduced_motion();
                Action::None
            }
            Action::IncreaseFontScale => {
                self.ctx.settings.increase_font_scale();
                Action::None
            }
            Action::DecreaseFontScale => {
                self.ctx.settings.decrease_font_scale();
                Action::None
            }
            Action::Reload => {
                self.reload();
                Action::None
            }
            other => other,
        }
    }

    /// Error boundary reset: back to a clean home page
    fn reload(&mut self) {
        self.ctx.logger.log("AppComponent: reloading UI".to_string());
        self.navigation.close_project_detail(None);
        self.navigation.close_all_projects(None);
        self.navigation.close_hidden_page();
        self.navigation.close_submissions_admin();
        self.navigation.scroll_to(Section::About);
        self.submissions_admin.reset();
        self.dialog.update(Action::HideDialog);
        self.boundary.reset();
    }

    /// Pass an action through the components, then the app
    pub fn dispatch(&mut self, action: Action) {
        let action = self.update(action);
        let follow_up = self.handle_app_action(action);
        if !matches!(follow_up, Action::None) {
            let follow_up = self.update(follow_up);
            self.handle_app_action(follow_up);
        }
    }

    /// Drain timer events and background results; returns them as actions
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(event) = self.nav_events.try_recv() {
            actions.push(Action::Navigation(event));
        }

        while let Ok(action) = self.background_action_rx.try_recv() {
            self.ctx.logger.log(format!("Background: Received action {:?}", action));
            actions.push(action);
        }

        let completed = self.task_manager.cleanup_finished_tasks();
        if !completed.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", completed.len());
        }

        actions
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Tick => {
                self.tick = self.tick.wrapping_add(1);
                for action in self.process_background_actions() {
                    self.dispatch(action);
                }
                let pending = self.pending_transition();
                let duration = pending
                    .map(|kind| self.navigation.timings().main_delay(kind))
                    .unwrap_or_default();
                self.loading.track(pending, duration);
                self.loading.poll_complete()
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };

        self.dispatch(action);
        self.refresh_settings();
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext {
            palette: self.palette,
            nav: self.navigation.snapshot(),
            tick: if self.palette.reduced_motion { 0 } else { self.tick },
        }
    }
}

impl AppComponent {
    /// Draw the whole screen
    pub fn draw(&mut self, f: &mut Frame, rect: Rect) {
        let ctx = self.render_context();
        self.render(f, rect, &ctx);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.home.update(action);
        self.submissions_admin.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        f.render_widget(Clear, rect);
        f.render_widget(Block::default().style(ctx.palette.base()), rect);

        if self.boundary.has_error() {
            self.boundary.render(f, rect, &ctx.palette);
            return;
        }

        if ctx.nav.app_loading {
            self.splash.render(f, rect, ctx);
            return;
        }

        self.project_detail.set_project(ctx.nav.selected_project.clone());
        match ctx.nav.page {
            Page::HiddenPage => self.hidden_page.render(f, rect, ctx),
            Page::ProjectDetail => match self.project_detail.ensure_renderable() {
                Ok(()) => self.project_detail.render(f, rect, ctx),
                Err(e) => {
                    self.boundary.catch(e);
                    self.boundary.render(f, rect, &ctx.palette);
                    return;
                }
            },
            Page::AllProjects => self.all_projects.render(f, rect, ctx),
            Page::Home => {
                self.home.set_section(ctx.nav.scroll_section);
                self.home.render(f, rect, ctx);
            }
        }

        if ctx.nav.project_loading || ctx.nav.all_projects_loading {
            self.loading.render(f, rect, ctx);
        }

        if ctx.nav.submissions_admin {
            self.submissions_admin.render(f, rect, ctx);
        }

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect, ctx);
        }
    }
}

impl Drop for AppComponent {
    fn drop(&mut self) {
        self.navigation.shutdown();
        self.task_manager.cancel_all_tasks();
    }
}
