use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::labels;
use crate::tui::app::App;
use crate::util::text;

use super::helpers::{pad_to_width, spans_width};

/// Render the delete-undo notification while an undo is pending
pub fn render_toast(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let Some(pending) = app.list.pending_undo() else {
        return;
    };
    let bg = app.theme.toast_bg;
    let width = area.width as usize;

    let remaining = pending.timer.remaining(now).as_millis().div_ceil(1000);
    let mut spans = vec![
        Span::styled(
            format!(" {} ", labels::TASK_DELETED),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled(
            format!("[u] {}", labels::UNDO),
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}s ", remaining),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ];

    // Deleted text fills whatever room is left
    let room = width.saturating_sub(spans_width(&spans) + 2);
    if room > 3 {
        spans.insert(
            1,
            Span::styled(
                format!("\u{201C}{}\u{201D} ", text::fit_to_width(&pending.task.text, room - 3)),
                Style::default().fg(app.theme.text).bg(bg),
            ),
        );
    }
    pad_to_width(&mut spans, width, Style::default().bg(bg));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::*;
    use crate::model::{TaskId, Variant};
    use std::time::Duration;

    #[test]
    fn shows_label_task_and_countdown() {
        let now = Instant::now();
        let mut app = app_with(Variant::Styled, &["Buy milk"]);
        app.list.delete(TaskId(1), now);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_toast(frame, &app, area, now + Duration::from_millis(1200))
        });
        assert_eq!(
            output,
            " Task deleted \u{201C}Buy milk\u{201D} [u] Undo  2s"
        );
    }

    #[test]
    fn nothing_without_pending_undo() {
        let app = app_with(Variant::Styled, &["Buy milk"]);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_toast(frame, &app, area, Instant::now())
        });
        assert_eq!(output, "");
    }
}
