use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(70, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let features = app.list.features();

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(" Key Bindings", header_style)),
        Line::from(""),
        Line::from(Span::styled(" Input", header_style)),
    ];
    add_binding(&mut lines, " Enter", "Add task / save edit", key_style, desc_style);
    add_binding(&mut lines, " Tab/Esc", "Go to list", key_style, desc_style);
    add_binding(&mut lines, " ^W ^U", "Delete word / line", key_style, desc_style);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" List", header_style)));
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
    add_binding(&mut lines, " space/x", "Toggle done", key_style, desc_style);
    if features.editing {
        add_binding(&mut lines, " e/Enter", "Edit task", key_style, desc_style);
    }
    add_binding(&mut lines, " d/Del", "Delete task", key_style, desc_style);
    if features.undo {
        add_binding(&mut lines, " u/^Z", "Undo delete", key_style, desc_style);
    }
    add_binding(&mut lines, " i/Tab", "Go to input", key_style, desc_style);
    add_binding(&mut lines, " q/^C", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let padded_key = format!("{:<12}", key);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::*;
    use crate::model::Variant;

    fn render_help(app: &App) -> String {
        render_to_string(TERM_W, 30, |frame, area| render_help_overlay(frame, app, area))
    }

    #[test]
    fn styled_lists_edit_and_undo() {
        let output = render_help(&app_with(Variant::Styled, &[]));
        assert!(output.contains("Key Bindings"));
        assert!(output.contains("Edit task"));
        assert!(output.contains("Undo delete"));
    }

    #[test]
    fn basic_omits_edit_and_undo() {
        let output = render_help(&app_with(Variant::Basic, &[]));
        assert!(output.contains("Toggle done"));
        assert!(!output.contains("Edit task"));
        assert!(!output.contains("Undo delete"));
    }
}
