use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use folio::catalog::Section;
use folio::contact::{SubmissionList, SubmitOutcome};
use folio::navigation::TransitionKind;
use folio::ui::components::{
    AllProjectsComponent, ContactFormComponent, DialogComponent, HiddenPageComponent, LoadingOverlay,
    ProjectDetailComponent, SubmissionsAdminComponent,
};
use folio::ui::core::{Action, Component, DialogType};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_dialog_show_and_hide() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());

    assert!(matches!(dialog.update(Action::ShowDialog(DialogType::Help)), Action::None));
    assert!(dialog.is_visible());
    assert!(matches!(dialog.handle_key_events(press(KeyCode::Char('x'))), Action::None));
    assert!(matches!(dialog.handle_key_events(press(KeyCode::Esc)), Action::HideDialog));

    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
}

#[test]
fn test_info_dialog_closes_on_any_key() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Info("hello".to_string())));
    assert!(matches!(dialog.handle_key_events(press(KeyCode::Char('x'))), Action::HideDialog));
}

#[tokio::test(start_paused = true)]
async fn test_loading_overlay_reports_once() {
    let mut overlay = LoadingOverlay::new();
    assert!(matches!(overlay.poll_complete(), Action::None));

    overlay.track(Some(TransitionKind::ProjectDetail), Duration::from_millis(800));
    assert!(matches!(overlay.poll_complete(), Action::None));
    assert!(overlay.progress() < 1.0);

    tokio::time::advance(Duration::from_millis(800)).await;
    assert!(matches!(
        overlay.poll_complete(),
        Action::AnimationComplete(TransitionKind::ProjectDetail)
    ));
    assert!(matches!(overlay.poll_complete(), Action::None));

    // Tracking the same transition again does not restart it
    overlay.track(Some(TransitionKind::ProjectDetail), Duration::from_millis(800));
    assert!(matches!(overlay.poll_complete(), Action::None));
}

#[tokio::test(start_paused = true)]
async fn test_loading_overlay_enter_completes() {
    let mut overlay = LoadingOverlay::new();
    assert!(matches!(overlay.handle_key_events(press(KeyCode::Enter)), Action::None));

    overlay.track(Some(TransitionKind::AllProjects), Duration::from_millis(600));
    assert!(matches!(
        overlay.handle_key_events(press(KeyCode::Enter)),
        Action::AnimationComplete(TransitionKind::AllProjects)
    ));
    assert!(matches!(overlay.handle_key_events(press(KeyCode::Enter)), Action::None));
}

#[test]
fn test_all_projects_grid_navigation() {
    let mut grid = AllProjectsComponent::new();
    let count = grid.projects().len();
    assert!(count > 2);

    grid.handle_key_events(press(KeyCode::Char('l')));
    assert_eq!(grid.selected(), 1);
    grid.handle_key_events(press(KeyCode::Char('h')));
    grid.handle_key_events(press(KeyCode::Char('h')));
    assert_eq!(grid.selected(), count - 1);
    grid.handle_key_events(press(KeyCode::Char('j')));
    assert_eq!(grid.selected(), 1);

    match grid.handle_key_events(press(KeyCode::Enter)) {
        Action::SelectProject(project) => assert_eq!(project, grid.projects()[1]),
        other => panic!("expected SelectProject, got {:?}", other),
    }
    assert!(matches!(
        grid.handle_key_events(press(KeyCode::Esc)),
        Action::CloseAllProjects(Some(Section::Portfolio))
    ));
}

#[test]
fn test_project_detail_requires_project() {
    let mut detail = ProjectDetailComponent::new();
    assert!(detail.ensure_renderable().is_err());

    detail.set_project(folio::catalog::all_projects().into_iter().next());
    assert!(detail.ensure_renderable().is_ok());
    assert!(matches!(
        detail.handle_key_events(press(KeyCode::Char('o'))),
        Action::ShowDialog(DialogType::Info(_))
    ));
    assert!(matches!(
        detail.handle_key_events(press(KeyCode::Esc)),
        Action::CloseProjectDetail(Some(Section::Portfolio))
    ));
}

#[test]
fn test_hidden_page_closes() {
    let mut page = HiddenPageComponent::new();
    assert!(matches!(page.handle_key_events(press(KeyCode::Esc)), Action::CloseHiddenPage));
    assert!(matches!(page.handle_key_events(press(KeyCode::Char('x'))), Action::None));
}

#[test]
fn test_contact_form_keys() {
    let mut contact = ContactFormComponent::new();
    contact.focus();
    assert!(contact.is_editing());

    for c in "Ann".chars() {
        contact.handle_key_events(press(KeyCode::Char(c)));
    }
    contact.handle_key_events(press(KeyCode::Tab));
    contact.handle_key_events(press(KeyCode::Char('a')));
    contact.handle_key_events(press(KeyCode::Enter));
    contact.handle_key_events(press(KeyCode::Char('H')));
    contact.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));
    contact.handle_key_events(press(KeyCode::Char('i')));

    assert_eq!(contact.form.name, "Ann");
    assert_eq!(contact.form.email, "a");
    assert_eq!(contact.form.message, "H\ni");

    assert!(matches!(contact.handle_key_events(press(KeyCode::Enter)), Action::SubmitContact));
    assert!(matches!(contact.handle_key_events(press(KeyCode::Esc)), Action::BlurContactForm));

    contact.form.begin_submit();
    assert!(contact.submitted(SubmitOutcome::Success("ok".to_string())).is_some());
    assert!(!contact.is_editing());
}

#[test]
fn test_submissions_admin_loads_list() {
    let mut admin = SubmissionsAdminComponent::new();
    admin.start_loading();
    assert!(admin.is_loading());

    let action = admin.update(Action::SubmissionsLoaded(SubmissionList {
        count: 0,
        submissions: Vec::new(),
    }));
    assert!(matches!(action, Action::None));
    assert!(!admin.is_loading());
    assert!(admin.submissions().is_empty());

    assert!(matches!(admin.handle_key_events(press(KeyCode::Char('r'))), Action::RefreshSubmissions));
    assert!(matches!(admin.handle_key_events(press(KeyCode::Esc)), Action::CloseSubmissionsAdmin));
}
