use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget};

use super::helpers::push_edit_spans;

/// Render the add-input row under the header: a dim placeholder when idle,
/// the live buffer with a cursor cell while a new task is being typed
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let adding = matches!(app.edit_target, Some(EditTarget::NewTask));

    let mut spans: Vec<Span> = Vec::new();
    if adding {
        spans.push(Span::styled(
            " + ",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        push_edit_spans(
            &mut spans,
            &app.edit_buffer,
            app.edit_cursor,
            Style::default().fg(app.theme.text_bright).bg(bg),
            Style::default().fg(bg).bg(app.theme.text_bright),
        );
    } else {
        spans.push(Span::styled(
            " + ",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(
            "add a task (a)",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn idle_placeholder() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_input_row(frame, &app, area);
        });
        assert_eq!(output, " + add a task (a)");
    }

    #[test]
    fn live_buffer_while_adding() {
        let mut app = app_with_tasks(&[]);
        app.edit_target = Some(EditTarget::NewTask);
        app.edit_buffer = "Buy milk".to_string();
        app.edit_cursor = app.edit_buffer.len();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_input_row(frame, &app, area);
        });
        // Trailing cursor cell is a styled space, trimmed from plain text
        assert_eq!(output, " + Buy milk");
    }
}
