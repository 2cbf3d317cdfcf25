pub mod header;
pub mod help_overlay;
pub mod helpers;
pub mod list_view;
pub mod status_row;
#[cfg(test)]
pub mod test_helpers;
pub mod toast;

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let toast_height = u16::from(app.list.pending_undo().is_some());

    // Layout: title | input box | helper | list | toast | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(toast_height),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_title(frame, app, chunks[0]);
    header::render_input_row(frame, app, chunks[1]);
    header::render_helper(frame, app, chunks[2]);
    list_view::render_list_view(frame, app, chunks[3]);
    if toast_height > 0 {
        toast::render_toast(frame, app, chunks[4], now);
    }
    status_row::render_status_row(frame, app, chunks[5]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}
