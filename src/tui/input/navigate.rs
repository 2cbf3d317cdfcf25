use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::undo;

/// Keys while the task list has focus
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Up | KeyCode::Char('k') => app.cursor = app.cursor.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            app.cursor += 1;
            app.clamp_cursor();
        }
        KeyCode::Home | KeyCode::Char('g') => app.cursor = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.cursor = usize::MAX;
            app.clamp_cursor();
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => toggle(app),
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => delete(app, now),
        KeyCode::Char('e') | KeyCode::Enter => begin_edit(app),
        KeyCode::Char('u') => undo(app),
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab | KeyCode::Esc => {
            app.focus_input()
        }
        _ => {}
    }
}

/// Toggle the cursor task and keep the cursor on it as it changes section
fn toggle(app: &mut App) {
    let Some(id) = app.cursor_task() else {
        return;
    };
    if app.list.toggle_done(id) {
        app.select_task(id);
    }
}

fn delete(app: &mut App, now: Instant) {
    let Some(id) = app.cursor_task() else {
        return;
    };
    let was_editing = app.list.editing() == Some(id);
    if !app.list.delete(id, now) {
        return;
    }
    if was_editing {
        app.sync_draft_cursor();
    }
    app.clamp_cursor();
    if app.list.is_empty() {
        app.focus_input();
    }
}

fn begin_edit(app: &mut App) {
    let Some(id) = app.cursor_task() else {
        return;
    };
    if app.list.begin_edit(id) {
        app.focus_input();
    }
}
