use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Key hints for the current mode, limited to what the variant offers
pub fn key_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let features = app.list.features();
    match app.mode {
        Mode::Input => {
            let submit = if app.list.editing().is_some() {
                "save"
            } else {
                "add"
            };
            vec![("Enter", submit), ("Tab", "list"), ("^C", "quit")]
        }
        Mode::Navigate => {
            let mut hints = vec![("space", "toggle")];
            if features.editing {
                hints.push(("e", "edit"));
            }
            hints.push(("d", "delete"));
            if features.undo {
                hints.push(("u", "undo"));
            }
            hints.extend([("i", "input"), ("?", "help"), ("q", "quit")]);
            hints
        }
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();
    if app.show_key_hints {
        for (key, desc) in key_hints(app) {
            spans.push(Span::styled(
                format!(" {}", key),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ));
            spans.push(Span::styled(
                format!(" {} ", desc),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }
    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
