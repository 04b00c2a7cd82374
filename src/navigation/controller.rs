use tokio::sync::mpsc;
use tokio::time::Instant;

use super::deadline::{schedule, CommitDeadline, DelayedEffect};
use super::easter_egg::TripleClick;
use super::{
    CommitSource, NavEvent, NavigationState, Page, TransitionId, TransitionKind, TransitionTimings,
};
use crate::catalog::{Project, Section};

/// Owns the visible page, the loading flags and the overlay flags.
///
/// All methods are synchronous and must be called from the event loop that
/// drains the [`NavEvent`] receiver returned by [`NavigationController::new`].
/// Timer tasks are spawned on the current tokio runtime.
pub struct NavigationController {
    timings: TransitionTimings,
    events: mpsc::UnboundedSender<NavEvent>,
    next_id: TransitionId,

    app_loading: bool,
    project_detail: bool,
    all_projects: bool,
    hidden_page: bool,
    submissions_admin: bool,
    selected_project: Option<Project>,
    scroll_section: Section,

    project_transition: Option<CommitDeadline>,
    all_projects_transition: Option<CommitDeadline>,
    selection_clear: Option<DelayedEffect>,
    pending_scroll: Option<DelayedEffect>,
    splash: Option<DelayedEffect>,

    logo_clicks: TripleClick,
}

impl NavigationController {
    pub fn new(timings: TransitionTimings) -> (Self, mpsc::UnboundedReceiver<NavEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                timings,
                events: tx,
                next_id: 1,
                app_loading: true,
                project_detail: false,
                all_projects: false,
                hidden_page: false,
                submissions_admin: false,
                selected_project: None,
                scroll_section: Section::default(),
                project_transition: None,
                all_projects_transition: None,
                selection_clear: None,
                pending_scroll: None,
                splash: None,
                logo_clicks: TripleClick::default(),
            },
            rx,
        )
    }

    fn next_id(&mut self) -> TransitionId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn timings(&self) -> TransitionTimings {
        self.timings
    }

    /// Replace the timings used by transitions armed from now on
    pub fn set_timings(&mut self, timings: TransitionTimings) {
        self.timings = timings;
    }

    // Splash

    /// Arm the splash timer. Input is ignored until the splash completes.
    pub fn start_splash(&mut self) {
        if !self.app_loading || self.splash.is_some() {
            return;
        }
        let id = self.next_id();
        let handle = schedule(self.timings.splash, NavEvent::SplashComplete, self.events.clone());
        self.splash = Some(DelayedEffect::new(id, handle));
    }

    /// End the splash right away (timer fired or the user skipped it)
    pub fn finish_splash(&mut self) {
        if let Some(splash) = self.splash.take() {
            splash.cancel();
        }
        if self.app_loading {
            log::debug!("Navigation: splash complete");
        }
        self.app_loading = false;
    }

    pub fn is_app_loading(&self) -> bool {
        self.app_loading
    }

    // Project detail

    /// Start the transition to the project detail page.
    ///
    /// Returns false and changes nothing while a project transition is
    /// already in flight.
    pub fn select_project(&mut self, project: Project) -> bool {
        if self.project_transition.is_some() {
            log::debug!("Navigation: project '{}' ignored, transition in flight", project.title);
            return false;
        }

        // A clear left over from an earlier close must not wipe the new selection
        if let Some(clear) = self.selection_clear.take() {
            clear.cancel();
        }

        log::info!("Navigation: loading project '{}' (id {})", project.title, project.id);
        self.selected_project = Some(project);
        self.arm(TransitionKind::ProjectDetail);
        true
    }

    /// Close the project detail page, optionally scrolling home to `nav_target`
    pub fn close_project_detail(&mut self, nav_target: Option<Section>) {
        if let Some(transition) = self.project_transition.take() {
            transition.cancel();
        }
        self.project_detail = false;

        if self.selected_project.is_some() {
            let id = self.next_id();
            let handle = schedule(
                self.timings.selection_clear,
                NavEvent::ClearSelection { id },
                self.events.clone(),
            );
            if let Some(previous) = self.selection_clear.replace(DelayedEffect::new(id, handle)) {
                previous.cancel();
            }
        }

        log::info!("Navigation: project detail closed");
        self.schedule_scroll(nav_target);
    }

    // All projects

    /// Start the transition to the all-projects grid.
    ///
    /// Returns false and changes nothing while that transition is in flight.
    pub fn view_all_projects(&mut self) -> bool {
        if self.all_projects_transition.is_some() {
            log::debug!("Navigation: all projects ignored, transition in flight");
            return false;
        }

        log::info!("Navigation: loading all projects");
        self.arm(TransitionKind::AllProjects);
        true
    }

    pub fn close_all_projects(&mut self, nav_target: Option<Section>) {
        if let Some(transition) = self.all_projects_transition.take() {
            transition.cancel();
        }
        self.all_projects = false;

        log::info!("Navigation: all projects closed");
        self.schedule_scroll(nav_target);
    }

    // Overlays

    pub fn open_hidden_page(&mut self) {
        if !self.hidden_page {
            log::info!("Navigation: hidden page opened");
        }
        self.hidden_page = true;
    }

    pub fn close_hidden_page(&mut self) {
        self.hidden_page = false;
        self.logo_clicks.reset();
    }

    pub fn open_submissions_admin(&mut self) {
        if !self.submissions_admin {
            log::info!("Navigation: submissions admin opened");
        }
        self.submissions_admin = true;
    }

    pub fn close_submissions_admin(&mut self) {
        self.submissions_admin = false;
    }

    /// Register a click on the footer logo. Opens the hidden page on the
    /// third click inside the rolling window and returns true in that case.
    pub fn logo_clicked(&mut self, now: Instant) -> bool {
        if self.logo_clicks.register(now) {
            self.open_hidden_page();
            true
        } else {
            false
        }
    }

    // Home scrolling

    /// Jump to a home section immediately
    pub fn scroll_to(&mut self, section: Section) {
        if let Some(pending) = self.pending_scroll.take() {
            pending.cancel();
        }
        self.scroll_section = section;
    }

    fn schedule_scroll(&mut self, nav_target: Option<Section>) {
        let Some(section) = nav_target else {
            return;
        };
        let id = self.next_id();
        let handle = schedule(
            self.timings.scroll_after_close,
            NavEvent::ScrollTo { section, id },
            self.events.clone(),
        );
        if let Some(previous) = self.pending_scroll.replace(DelayedEffect::new(id, handle)) {
            previous.cancel();
        }
    }

    // Transition plumbing

    fn transition_slot(&mut self, kind: TransitionKind) -> &mut Option<CommitDeadline> {
        match kind {
            TransitionKind::ProjectDetail => &mut self.project_transition,
            TransitionKind::AllProjects => &mut self.all_projects_transition,
        }
    }

    fn arm(&mut self, kind: TransitionKind) {
        let id = self.next_id();
        let deadline = CommitDeadline::arm(
            kind,
            id,
            self.timings.main_delay(kind),
            self.timings.safety,
            self.events.clone(),
        );
        *self.transition_slot(kind) = Some(deadline);
    }

    /// Commit a pending transition now, without waiting for its timers.
    /// Used when the entrance animation reports completion.
    pub fn signal_animation_complete(&mut self, kind: TransitionKind) -> bool {
        let Some(id) = self.transition_slot(kind).as_ref().map(CommitDeadline::id) else {
            return false;
        };
        self.commit(kind, id, CommitSource::Signal)
    }

    fn commit(&mut self, kind: TransitionKind, id: TransitionId, source: CommitSource) -> bool {
        let slot = self.transition_slot(kind);
        if !slot.as_ref().is_some_and(|deadline| deadline.matches(kind, id)) {
            log::debug!("Navigation: stale {:?} commit #{} from {:?} ignored", kind, id, source);
            return false;
        }
        if let Some(deadline) = slot.take() {
            deadline.cancel();
        }

        match kind {
            TransitionKind::ProjectDetail => {
                self.all_projects = false;
                self.project_detail = true;
            }
            TransitionKind::AllProjects => {
                self.project_detail = false;
                self.all_projects = true;
            }
        }

        match source {
            CommitSource::SafetyTimer => log::warn!("Navigation: {:?} committed by safety deadline", kind),
            _ => log::debug!("Navigation: {:?} committed by {:?}", kind, source),
        }
        true
    }

    /// Apply an event posted by one of the navigation timers.
    /// Returns true when the visible state changed.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        match event {
            NavEvent::Commit { kind, id, source } => self.commit(kind, id, source),
            NavEvent::ClearSelection { id } => {
                if self.selection_clear.as_ref().map(DelayedEffect::id) != Some(id) {
                    return false;
                }
                self.selection_clear = None;
                self.selected_project = None;
                true
            }
            NavEvent::ScrollTo { section, id } => {
                if self.pending_scroll.as_ref().map(DelayedEffect::id) != Some(id) {
                    return false;
                }
                self.pending_scroll = None;
                self.scroll_section = section;
                true
            }
            NavEvent::SplashComplete => {
                let was_loading = self.app_loading;
                self.splash = None;
                self.finish_splash();
                was_loading
            }
        }
    }

    // Queries

    pub fn current_page(&self) -> Page {
        if self.hidden_page {
            Page::HiddenPage
        } else if self.project_detail {
            Page::ProjectDetail
        } else if self.all_projects {
            Page::AllProjects
        } else {
            Page::Home
        }
    }

    pub fn is_project_loading(&self) -> bool {
        self.project_transition.is_some()
    }

    pub fn is_all_projects_loading(&self) -> bool {
        self.all_projects_transition.is_some()
    }

    /// Whether any loading overlay is up
    pub fn is_transitioning(&self) -> bool {
        self.is_project_loading() || self.is_all_projects_loading()
    }

    pub fn is_project_detail_open(&self) -> bool {
        self.project_detail
    }

    pub fn is_all_projects_open(&self) -> bool {
        self.all_projects
    }

    pub fn is_hidden_page_open(&self) -> bool {
        self.hidden_page
    }

    pub fn is_submissions_admin_open(&self) -> bool {
        self.submissions_admin
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected_project.as_ref()
    }

    pub fn scroll_section(&self) -> Section {
        self.scroll_section
    }

    pub fn snapshot(&self) -> NavigationState {
        NavigationState {
            page: self.current_page(),
            app_loading: self.app_loading,
            project_detail: self.project_detail,
            all_projects: self.all_projects,
            project_loading: self.is_project_loading(),
            all_projects_loading: self.is_all_projects_loading(),
            hidden_page: self.hidden_page,
            submissions_admin: self.submissions_admin,
            selected_project: self.selected_project.clone(),
            scroll_section: self.scroll_section,
        }
    }

    /// Cancel every outstanding timer
    pub fn shutdown(&mut self) {
        if let Some(transition) = self.project_transition.take() {
            transition.cancel();
        }
        if let Some(transition) = self.all_projects_transition.take() {
            transition.cancel();
        }
        if let Some(effect) = self.selection_clear.take() {
            effect.cancel();
        }
        if let Some(effect) = self.pending_scroll.take() {
            effect.cancel();
        }
        if let Some(effect) = self.splash.take() {
            effect.cancel();
        }
    }

    /// Number of timers still armed
    pub fn pending_timer_count(&self) -> usize {
        usize::from(self.project_transition.is_some())
            + usize::from(self.all_projects_transition.is_some())
            + usize::from(self.selection_clear.is_some())
            + usize::from(self.pending_scroll.is_some())
            + usize::from(self.splash.is_some())
    }
}

impl Drop for NavigationController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
