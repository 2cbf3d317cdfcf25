mod draft;
mod navigate;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::app::{App, Mode};

use draft::handle_input;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.should_quit = true;
                return;
            }
            KeyCode::Char('z') => {
                undo(app);
                return;
            }
            _ => {}
        }
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Input => handle_input(app, key),
        Mode::Navigate => handle_navigate(app, key, now),
    }
}

/// Restore the pending deleted task and put the cursor on it
fn undo(app: &mut App) {
    if let Some(id) = app.list.undo_delete() {
        debug!(task = %id, "undo from keyboard");
        app.select_task(id);
    }
}
