use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};

use folio::catalog::Section;
use folio::config::Config;
use folio::constants::{ERROR_BOUNDARY_TITLE, MSG_NETWORK_ERROR};
use folio::contact::{MessageKind, SubmitOutcome};
use folio::navigation::Page;
use folio::settings::{Settings, SettingsStore, Theme};
use folio::ui::core::{Action, AppContext, EventType};
use folio::ui::{AppComponent, Palette, UiError};

fn app_with_relay(relay: bool) -> AppComponent {
    let mut ctx = AppContext::new(Config::default(), SettingsStore::in_memory(Settings::default()));
    if !relay {
        ctx.relay = None;
    }
    AppComponent::new(ctx)
}

fn key(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn code(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn chord(c: char, modifiers: KeyModifiers) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), modifiers))
}

async fn settle(delay: Duration) {
    tokio::time::sleep(delay).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

async fn ready_app(relay: bool) -> AppComponent {
    let mut app = app_with_relay(relay);
    settle(Duration::from_millis(1501)).await;
    app.handle_event(EventType::Tick);
    assert!(!app.navigation().is_app_loading());
    app
}

fn draw(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.draw(f, area);
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_splash_swallows_keys_except_ctrl_c() {
    let mut app = app_with_relay(false);
    assert!(app.navigation().is_app_loading());
    assert!(draw(&mut app).contains("folio"));

    app.handle_event(key('q'));
    assert!(!app.should_quit());

    app.handle_event(chord('c', KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_home_after_splash() {
    let mut app = ready_app(false).await;
    let screen = draw(&mut app);
    assert!(screen.contains("About"));
    assert!(screen.contains("Portfolio"));

    app.handle_event(key('q'));
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_number_keys_scroll_home() {
    let mut app = ready_app(false).await;

    app.handle_event(key('4'));
    assert_eq!(app.navigation().scroll_section(), Section::Contact);
    app.handle_event(key('3'));
    assert_eq!(app.navigation().scroll_section(), Section::Resume);
}

#[tokio::test(start_paused = true)]
async fn test_select_project_from_portfolio() {
    let mut app = ready_app(false).await;

    app.handle_event(key('2'));
    draw(&mut app);
    let expected = app.home().featured()[0].clone();

    app.handle_event(code(KeyCode::Enter));
    assert!(app.navigation().is_project_loading());
    assert_eq!(app.navigation().selected_project(), Some(&expected));
    assert_eq!(app.navigation().current_page(), Page::Home);

    app.handle_event(EventType::Tick);
    settle(Duration::from_millis(801)).await;
    app.handle_event(EventType::Tick);
    assert_eq!(app.navigation().current_page(), Page::ProjectDetail);
    assert!(!app.navigation().is_project_loading());
    assert!(draw(&mut app).contains(&expected.title));

    app.handle_event(code(KeyCode::Esc));
    assert_eq!(app.navigation().current_page(), Page::Home);
    assert!(app.navigation().selected_project().is_some());

    settle(Duration::from_millis(401)).await;
    app.handle_event(EventType::Tick);
    assert!(app.navigation().selected_project().is_none());
    assert_eq!(app.navigation().scroll_section(), Section::Portfolio);
}

#[tokio::test(start_paused = true)]
async fn test_enter_skips_entrance_animation() {
    let mut app = ready_app(false).await;

    app.handle_event(key('a'));
    assert!(app.navigation().is_all_projects_loading());
    app.handle_event(EventType::Tick);

    app.handle_event(code(KeyCode::Enter));
    assert!(app.navigation().is_all_projects_open());
    assert!(!app.navigation().is_all_projects_loading());
    assert!(draw(&mut app).contains("All projects"));

    app.handle_event(code(KeyCode::Esc));
    assert_eq!(app.navigation().current_page(), Page::Home);
}

#[tokio::test(start_paused = true)]
async fn test_logo_presses_open_hidden_page() {
    let mut app = ready_app(false).await;

    app.handle_event(key('L'));
    app.handle_event(key('L'));
    assert!(!app.navigation().is_hidden_page_open());
    app.handle_event(key('L'));
    assert_eq!(app.navigation().current_page(), Page::HiddenPage);

    app.handle_event(code(KeyCode::Esc));
    assert!(!app.navigation().is_hidden_page_open());
}

#[tokio::test(start_paused = true)]
async fn test_logo_clicks_open_hidden_page() {
    let mut app = ready_app(false).await;
    draw(&mut app);
    let logo = app.home().logo_area();
    assert!(logo.width > 0);

    let click = EventType::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: logo.x,
        row: logo.y,
        modifiers: KeyModifiers::NONE,
    });
    for _ in 0..3 {
        app.handle_event(click.clone());
    }
    assert!(app.navigation().is_hidden_page_open());
}

#[tokio::test(start_paused = true)]
async fn test_hidden_page_chord() {
    let mut app = ready_app(false).await;

    app.handle_event(chord('D', KeyModifiers::CONTROL | KeyModifiers::SHIFT));
    assert!(app.navigation().is_hidden_page_open());
    draw(&mut app);
}

#[tokio::test(start_paused = true)]
async fn test_legacy_terminal_chords() {
    let mut app = ready_app(false).await;

    // A terminal without keyboard enhancement drops Shift from Ctrl chords
    app.handle_event(chord('d', KeyModifiers::CONTROL));
    assert!(!app.navigation().is_hidden_page_open());
    assert!(!app.should_quit());

    // Alt+Shift+D arrives as an uppercase letter with Alt
    app.handle_event(chord('D', KeyModifiers::ALT));
    assert!(app.navigation().is_hidden_page_open());

    app.handle_event(chord('C', KeyModifiers::ALT | KeyModifiers::SHIFT));
    assert!(app.navigation().is_submissions_admin_open());
    assert!(!app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_legacy_ctrl_c_quits_without_opening_admin() {
    let mut app = ready_app(false).await;

    app.handle_event(chord('c', KeyModifiers::CONTROL));
    assert!(app.should_quit());
    assert!(!app.navigation().is_submissions_admin_open());
}

#[tokio::test(start_paused = true)]
async fn test_alt_without_shift_is_not_a_chord() {
    let mut app = ready_app(false).await;

    app.handle_event(chord('d', KeyModifiers::ALT));
    app.handle_event(chord('c', KeyModifiers::ALT));
    assert!(!app.navigation().is_hidden_page_open());
    assert!(!app.navigation().is_submissions_admin_open());
}

#[tokio::test(start_paused = true)]
async fn test_help_dialog_documents_chords() {
    let mut app = ready_app(false).await;

    app.handle_event(key('?'));
    let screen = draw(&mut app);
    assert!(screen.contains("Ctrl+Shift+D"));
    assert!(screen.contains("Alt+Shift+D"));
}

#[tokio::test(start_paused = true)]
async fn test_help_dialog_captures_keys() {
    let mut app = ready_app(false).await;

    app.handle_event(key('?'));
    assert!(app.is_dialog_visible());
    draw(&mut app);

    app.handle_event(key('q'));
    assert!(!app.is_dialog_visible());
    assert!(!app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_theme_toggle_updates_palette() {
    let mut app = ready_app(false).await;
    assert_eq!(*app.palette(), Palette::for_settings(&Settings::default()));

    app.handle_event(key('t'));
    let light = Settings {
        theme: Theme::Light,
        ..Settings::default()
    };
    assert_eq!(*app.palette(), Palette::for_settings(&light));
}

#[tokio::test(start_paused = true)]
async fn test_reduced_motion_collapses_animations() {
    let mut app = ready_app(false).await;
    let safety = app.navigation().timings().safety;

    app.handle_event(key('m'));
    assert!(app.palette().reduced_motion);
    assert_eq!(app.navigation().timings().project_main, Duration::ZERO);
    assert_eq!(app.navigation().timings().safety, safety);
}

#[tokio::test(start_paused = true)]
async fn test_contact_form_captures_typing() {
    let mut app = ready_app(false).await;

    app.handle_event(key('c'));
    assert!(app.home().contact.is_editing());
    assert_eq!(app.navigation().scroll_section(), Section::Contact);

    app.handle_event(key('q'));
    assert!(!app.should_quit());
    assert_eq!(app.home().contact.form.name, "q");

    app.handle_event(code(KeyCode::Esc));
    assert!(!app.home().contact.is_editing());
    app.handle_event(key('q'));
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_success_message_clears_after_delay() {
    let mut app = ready_app(false).await;

    app.dispatch(Action::ContactSubmitted(SubmitOutcome::Success(
        "Message sent successfully!".to_string(),
    )));
    let status = app.home().contact.form.status().unwrap();
    assert_eq!(status.kind, MessageKind::Success);
    assert_eq!(app.active_task_count(), 1);

    settle(Duration::from_millis(4900)).await;
    app.handle_event(EventType::Tick);
    assert!(app.home().contact.form.status().is_some());

    settle(Duration::from_millis(200)).await;
    app.handle_event(EventType::Tick);
    assert!(app.home().contact.form.status().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_submit_without_relay_reports_network_error() {
    let mut app = ready_app(false).await;

    app.dispatch(Action::SubmitContact);
    let status = app.home().contact.form.status().unwrap();
    assert_eq!(status.kind, MessageKind::Error);
    assert_eq!(status.text, MSG_NETWORK_ERROR);
    assert!(!app.home().contact.form.is_submitting());
}

#[tokio::test(start_paused = true)]
async fn test_admin_without_relay_shows_error_dialog() {
    let mut app = ready_app(false).await;

    app.handle_event(chord('C', KeyModifiers::CONTROL | KeyModifiers::SHIFT));
    assert!(app.navigation().is_submissions_admin_open());
    assert!(app.is_dialog_visible());
}

#[tokio::test(start_paused = true)]
async fn test_error_boundary_catches_and_reloads() {
    let mut app = ready_app(false).await;
    app.handle_event(chord('C', KeyModifiers::CONTROL | KeyModifiers::SHIFT));

    app.dispatch(Action::SubmissionsFailed(UiError::LoadTimeout {
        overlay: "Submissions",
    }));
    assert!(app.boundary().has_error());
    assert!(draw(&mut app).contains(ERROR_BOUNDARY_TITLE));

    // Only reload and quit reach the app while the boundary is up
    app.handle_event(key('4'));
    assert_eq!(app.navigation().scroll_section(), Section::About);

    app.handle_event(chord('r', KeyModifiers::CONTROL));
    assert!(!app.boundary().has_error());
    assert!(!app.navigation().is_submissions_admin_open());
    assert!(!app.is_dialog_visible());
    assert_eq!(app.navigation().current_page(), Page::Home);
}

#[tokio::test(start_paused = true)]
async fn test_failures_outside_admin_are_ignored() {
    let mut app = ready_app(false).await;

    app.dispatch(Action::SubmissionsFailed(UiError::LoadFailed {
        overlay: "Submissions",
        reason: "late reply".to_string(),
    }));
    assert!(!app.boundary().has_error());
}
