use crate::catalog::{Project, Section};
use crate::contact::{SubmissionList, SubmitOutcome};
use crate::navigation::{NavEvent, TransitionKind};
use crate::ui::error_boundary::UiError;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigation(NavEvent),
    SkipSplash,
    SelectProject(Project),
    CloseProjectDetail(Option<Section>),
    ViewAllProjects,
    CloseAllProjects(Option<Section>),
    AnimationComplete(TransitionKind),
    ScrollTo(Section),
    LogoClicked,
    OpenHiddenPage,
    CloseHiddenPage,
    OpenSubmissionsAdmin,
    CloseSubmissionsAdmin,

    // Contact form
    FocusContactForm,
    BlurContactForm,
    SubmitContact,
    ContactSubmitted(SubmitOutcome),
    ClearSubmitMessage(u64),

    // Submissions admin
    RefreshSubmissions,
    SubmissionsLoaded(SubmissionList),
    SubmissionsFailed(UiError),

    // Settings
    ToggleTheme,
    ToggleReducedMotion,
    IncreaseFontScale,
    DecreaseFontScale,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    DialogScrollUp,
    DialogScrollDown,
    Reload,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Error(String),
    Info(String),
    Help,
    Logs,
}
