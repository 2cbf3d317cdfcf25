use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::labels;
use crate::model::{Group, Task};
use crate::tui::app::{App, Mode};
use crate::util::text;

use super::helpers::{pad_to_width, spans_width};

/// Render the task area: flat list, ongoing/done sections, or the empty state
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    if app.list.is_empty() {
        let line = if app.list.features().empty_state {
            Line::from(Span::styled(
                format!(" {}", labels::EMPTY_STATE),
                Style::default().fg(app.theme.dim).bg(bg),
            ))
        } else {
            Line::from("")
        };
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    // Each line, tagged with its display index when it is a task row
    let mut rows: Vec<(Option<usize>, Line)> = Vec::new();
    let mut index = 0;

    if app.list.features().sections {
        for group in [Group::Ongoing, Group::Done] {
            let count = app.list.group_count(group);
            if count == 0 {
                continue;
            }
            if !rows.is_empty() {
                rows.push((None, Line::from("")));
            }
            rows.push((None, heading(app, labels::group_heading(group, count))));
            for task in app.list.in_group(group) {
                rows.push((Some(index), task_line(app, task, index, width)));
                index += 1;
            }
        }
    } else {
        for task in app.list.tasks() {
            rows.push((Some(index), task_line(app, task, index, width)));
            index += 1;
        }
    }

    // Keep the cursor row on screen
    let height = area.height as usize;
    let cursor_row = rows
        .iter()
        .position(|(i, _)| *i == Some(app.cursor))
        .unwrap_or(0);
    let offset = (cursor_row + 1).saturating_sub(height);

    let lines: Vec<Line> = rows
        .into_iter()
        .skip(offset)
        .take(height)
        .map(|(_, line)| line)
        .collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

fn heading(app: &App, label: String) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", label),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Key hints for the affordances available on `task`
fn affordances(app: &App, task: &Task) -> &'static str {
    if !app.list.can_modify(task.id) {
        return "";
    }
    if app.list.features().editing && app.list.editing().is_none() {
        "e edit  d delete "
    } else {
        "d delete "
    }
}

fn task_line<'a>(app: &App, task: &'a Task, index: usize, width: usize) -> Line<'a> {
    let is_cursor = app.mode == Mode::Navigate && index == app.cursor;
    let is_editing = app.list.editing() == Some(task.id);
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let mut spans: Vec<Span> = Vec::new();
    let marker = if is_cursor { " \u{25B8} " } else { "   " };
    spans.push(Span::styled(
        marker,
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    let box_color = if task.done {
        app.theme.green
    } else {
        app.theme.text
    };
    spans.push(Span::styled(
        format!("{} ", task.checkbox()),
        Style::default().fg(box_color).bg(bg),
    ));

    let hints = if is_cursor { affordances(app, task) } else { "" };
    let suffix = if is_editing { " \u{270E}" } else { "" };
    let budget = width
        .saturating_sub(spans_width(&spans))
        .saturating_sub(text::cell_width(hints) + text::cell_width(suffix) + 1);

    let mut title_style = Style::default().fg(app.theme.text_bright).bg(bg);
    if task.done {
        title_style = title_style
            .fg(app.theme.dim)
            .add_modifier(Modifier::CROSSED_OUT);
    }
    if is_editing {
        title_style = title_style.fg(app.theme.highlight);
    }
    spans.push(Span::styled(text::fit_to_width(&task.text, budget), title_style));
    if is_editing {
        spans.push(Span::styled(
            suffix,
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }

    if is_cursor {
        pad_to_width(
            &mut spans,
            width.saturating_sub(text::cell_width(hints)),
            Style::default().bg(bg),
        );
        spans.push(Span::styled(hints, Style::default().fg(app.theme.dim).bg(bg)));
    }
    Line::from(spans)
}
