use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(theme = ?config.ui.theme, "calculator started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::CopyDisplay {
                    copy_display(&mut app);
                }
            }
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("calculator exiting");
    drop(events);
    drop(guard);
    Ok(())
}

fn copy_display(app: &mut App) {
    let Some(text) = app.copyable_value().map(str::to_string) else {
        app.set_status("Nothing to copy");
        return;
    };

    let result = ClipboardHandler::new().and_then(|mut clipboard| clipboard.set_text(&text));
    match result {
        Ok(()) => app.set_status("Copied"),
        Err(err) => {
            tracing::warn!(error = %err, "clipboard copy failed");
            app.set_status("Copy failed");
        }
    }
}
