use crate::config::Config;
use crate::settings::SettingsStore;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{AppContext, EventHandler, EventType};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Set up the terminal, run the event loop and restore the terminal
pub async fn run_app(config: Config, settings: SettingsStore) -> anyhow::Result<()> {
    let mouse_enabled = config.ui.mouse_enabled;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    // Ctrl+Shift chords are indistinguishable from Ctrl ones without this
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
            )
        )?;
    }
    log::info!("Keyboard enhancement: {}", keyboard_enhanced);
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(AppContext::new(config, settings));
    let mut event_handler = EventHandler::new();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    if keyboard_enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            app.draw(f, area);
        })?;

        let event = event_handler.next_event().await?;
        app.handle_event(event);

        if app.should_quit() {
            break;
        }

        // Drain queued input before the next frame
        while crossterm::event::poll(std::time::Duration::ZERO)? {
            let event = EventHandler::convert(crossterm::event::read()?);
            if !matches!(event, EventType::Other) {
                app.handle_event(event);
            }
            if app.should_quit() {
                return Ok(());
            }
        }
    }

    Ok(())
}
