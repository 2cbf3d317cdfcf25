use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::todo_list::SubmitOutcome;
use crate::tui::app::{App, Mode};
use crate::util::text;

/// Keys while the draft input has focus
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => submit(app),
        KeyCode::Esc | KeyCode::Tab | KeyCode::Down => app.focus_list(),
        KeyCode::Left => {
            if let Some(pos) = text::grapheme_before(app.list.draft(), app.draft_cursor) {
                app.draft_cursor = pos;
            }
        }
        KeyCode::Right => {
            if let Some(pos) = text::grapheme_after(app.list.draft(), app.draft_cursor) {
                app.draft_cursor = pos;
            }
        }
        KeyCode::Home => app.draft_cursor = 0,
        KeyCode::End => app.sync_draft_cursor(),
        KeyCode::Char('a') if ctrl => app.draft_cursor = 0,
        KeyCode::Char('e') if ctrl => app.sync_draft_cursor(),
        KeyCode::Char('w') if ctrl => {
            let start = text::word_start_before(app.list.draft(), app.draft_cursor);
            remove_range(app, start, app.draft_cursor);
        }
        KeyCode::Char('u') if ctrl => remove_range(app, 0, app.draft_cursor),
        KeyCode::Backspace => {
            if let Some(start) = text::grapheme_before(app.list.draft(), app.draft_cursor) {
                remove_range(app, start, app.draft_cursor);
            }
        }
        KeyCode::Delete => {
            if let Some(end) = text::grapheme_after(app.list.draft(), app.draft_cursor) {
                remove_range(app, app.draft_cursor, end);
            }
        }
        KeyCode::Char(c) if !ctrl => {
            let mut draft = app.list.draft().to_string();
            draft.insert(app.draft_cursor, c);
            let caret = app.draft_cursor + c.len_utf8();
            app.set_draft(draft, caret);
        }
        _ => {}
    }
}

fn remove_range(app: &mut App, start: usize, end: usize) {
    if start >= end {
        return;
    }
    let mut draft = app.list.draft().to_string();
    draft.replace_range(start..end, "");
    app.set_draft(draft, start);
}

fn submit(app: &mut App) {
    match app.list.submit() {
        SubmitOutcome::Added(id) => {
            app.draft_cursor = 0;
            app.select_task(id);
        }
        SubmitOutcome::Edited(id) => {
            app.draft_cursor = 0;
            app.mode = Mode::Navigate;
            app.select_task(id);
        }
        SubmitOutcome::Rejected => {}
    }
}
