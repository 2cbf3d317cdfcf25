use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::labels;
use crate::tui::app::{App, Mode};
use crate::util::text;

use super::helpers::pad_to_width;

/// Width of the submit control, borders included
const BUTTON_WIDTH: u16 = 10;

/// Render the title row with the active variant on the right
pub fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(
        format!(" {}", labels::APP_TITLE),
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let variant = app.list.variant().as_str();
    let width = area.width as usize;
    pad_to_width(
        &mut spans,
        width.saturating_sub(variant.len() + 1),
        Style::default().bg(bg),
    );
    spans.push(Span::styled(
        variant,
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the draft input box and the Add/Save control beside it
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
        .split(area);

    render_input_box(frame, app, chunks[0]);
    render_button(frame, app, chunks[1]);
}

fn render_input_box(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Input;
    let border_color = if app.list.has_error() {
        app.theme.red
    } else if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let title = match app.list.editing() {
        Some(id) => format!(" Edit task {} ", id),
        None => " New task ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color).bg(bg));
    let inner = block.inner(area);

    // Scroll horizontally so the caret stays inside the box
    let draft = app.list.draft();
    let caret_col = text::column_at(draft, app.draft_cursor);
    let visible = (inner.width as usize).max(1);
    // Paragraph offsets are u16; very long drafts pin to the furthest offset
    let scroll = u16::try_from(caret_col.saturating_sub(visible - 1)).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(draft)
        .style(Style::default().fg(app.theme.text_bright).bg(bg))
        .scroll((0, scroll))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused && !app.show_help && inner.width > 0 {
        let col = caret_col.saturating_sub(scroll as usize).min(visible - 1);
        let x = inner.x + col as u16;
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_button(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let label = if app.list.editing().is_some() {
        labels::SAVE
    } else {
        labels::ADD
    };
    let ready = !app.list.draft().trim().is_empty();
    let style = if ready {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

/// Render the validation message under the input, if any
pub fn render_helper(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = if app.list.has_error() {
        Line::from(Span::styled(
            format!(" {}", app.list.variant().empty_draft_message()),
            Style::default().fg(app.theme.red).bg(bg),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
