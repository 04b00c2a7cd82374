//! Page and overlay navigation.
//!
//! The [`NavigationController`] owns which page is visible and serialises the
//! transitions between them. Opening the project detail page or the
//! all-projects grid is a two-phase transition: a loading flag goes up
//! immediately and the page switch is committed later by a
//! [`CommitDeadline`], either when the entrance animation finishes or when
//! the safety deadline expires, whichever happens first.
//!
//! Timers never touch state directly. They post [`NavEvent`]s on a channel
//! that the UI event loop drains and feeds back through
//! [`NavigationController::apply`], so every mutation happens on one task.

pub mod controller;
pub mod deadline;
pub mod easter_egg;

use std::time::Duration;

use crate::catalog::{Project, Section};
use crate::constants::{
    ALL_PROJECTS_MAIN_DELAY_MS, PROJECT_MAIN_DELAY_MS, SAFETY_DEADLINE_MS, SCROLL_AFTER_CLOSE_MS,
    SELECTION_CLEAR_DELAY_MS, SPLASH_DURATION_MS,
};

pub use controller::NavigationController;
pub use deadline::CommitDeadline;
pub use easter_egg::TripleClick;

/// Identifier of one armed transition or delayed effect
pub type TransitionId = u64;

/// A primary page. Only one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    ProjectDetail,
    AllProjects,
    HiddenPage,
}

/// Destination of a deadline-guarded transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    ProjectDetail,
    AllProjects,
}

/// What caused a transition to commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitSource {
    MainTimer,
    SafetyTimer,
    Signal,
}

/// Events posted back to the event loop by navigation timers
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    Commit {
        kind: TransitionKind,
        id: TransitionId,
        source: CommitSource,
    },
    ClearSelection {
        id: TransitionId,
    },
    ScrollTo {
        section: Section,
        id: TransitionId,
    },
    SplashComplete,
}

/// Timings for every delayed navigation effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimings {
    pub project_main: Duration,
    pub all_projects_main: Duration,
    pub safety: Duration,
    pub selection_clear: Duration,
    pub scroll_after_close: Duration,
    pub splash: Duration,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            project_main: Duration::from_millis(PROJECT_MAIN_DELAY_MS),
            all_projects_main: Duration::from_millis(ALL_PROJECTS_MAIN_DELAY_MS),
            safety: Duration::from_millis(SAFETY_DEADLINE_MS),
            selection_clear: Duration::from_millis(SELECTION_CLEAR_DELAY_MS),
            scroll_after_close: Duration::from_millis(SCROLL_AFTER_CLOSE_MS),
            splash: Duration::from_millis(SPLASH_DURATION_MS),
        }
    }
}

impl TransitionTimings {
    /// Timings with every animation collapsed; the safety deadline is kept
    pub fn reduced_motion(self) -> Self {
        Self {
            project_main: Duration::ZERO,
            all_projects_main: Duration::ZERO,
            scroll_after_close: Duration::ZERO,
            splash: Duration::ZERO,
            ..self
        }
    }

    pub fn main_delay(&self, kind: TransitionKind) -> Duration {
        match kind {
            TransitionKind::ProjectDetail => self.project_main,
            TransitionKind::AllProjects => self.all_projects_main,
        }
    }
}

/// Read-only snapshot of the navigation state
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub page: Page,
    pub app_loading: bool,
    pub project_detail: bool,
    pub all_projects: bool,
    pub project_loading: bool,
    pub all_projects_loading: bool,
    pub hidden_page: bool,
    pub submissions_admin: bool,
    pub selected_project: Option<Project>,
    pub scroll_section: Section,
}

impl NavigationState {
    /// Home content is shown only when no page is open or loading
    pub fn shows_home(&self) -> bool {
        !self.app_loading
            && !self.project_detail
            && !self.all_projects
            && !self.project_loading
            && !self.all_projects_loading
    }
}
