use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::Variant;
use crate::model::config::Config;
use crate::ops::todo_list::TodoList;
use crate::tui::app::{App, Mode};

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 20;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole screen for `app`
pub fn render_app(app: &App, now: Instant) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _| super::render(frame, app, now))
}

/// An app of the given variant with tasks added in order (ids 1, 2, ...)
pub fn app_with(variant: Variant, texts: &[&str]) -> App {
    let config = Config {
        variant,
        ..Default::default()
    };
    let mut list = TodoList::from_config(&config);
    for text in texts {
        list.update_draft(*text);
        list.submit();
    }
    App::new(list, &config)
}

/// Same as `app_with`, with the list focused
pub fn navigating_app(variant: Variant, texts: &[&str]) -> App {
    let mut app = app_with(variant, texts);
    app.mode = Mode::Navigate;
    app
}
