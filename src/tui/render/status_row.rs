use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Mode};

/// Render the status row (bottom of screen): transient messages on the
/// left, mode-dependent key hints on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let left = match app.mode {
        Mode::Navigate => app.status_message.clone().unwrap_or_default(),
        _ => String::new(),
    };

    let hint = match app.mode {
        Mode::Navigate => {
            if app.show_key_hints {
                "a add  e edit  space toggle  d delete  q quit"
            } else {
                ""
            }
        }
        Mode::Edit => match app.edit_target {
            Some(EditTarget::NewTask) => "Enter add  Esc cancel",
            _ => "Enter save  Esc cancel",
        },
        Mode::Confirm => "y delete  n cancel",
    };

    let mut spans: Vec<Span> = Vec::new();
    if !left.is_empty() {
        spans.push(Span::styled(
            left.clone(),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    let left_width = left.chars().count();
    let hint_width = hint.chars().count();
    if left_width + hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - left_width - hint_width),
            Style::default().bg(bg),
        ));
    }
    if !hint.is_empty() {
        spans.push(Span::styled(
            hint,
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

    #[test]
    fn navigate_hints() {
        let app = app_with_tasks(&["a"]);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("a add"));
        assert!(output.contains("q quit"));
    }

    #[test]
    fn hints_hidden_when_configured_off() {
        let mut app = app_with_tasks(&[]);
        app.show_key_hints = false;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.is_empty());
    }

    #[test]
    fn edit_mode_replaces_hints_with_cancel() {
        let mut app = app_with_tasks(&["a"]);
        app.mode = Mode::Edit;
        app.edit_target = Some(EditTarget::TaskTitle {
            id: app.store.tasks()[0].id,
        });
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("Esc cancel"));
        assert!(!output.contains("d delete"));
    }

    #[test]
    fn confirm_mode_hints() {
        let mut app = app_with_tasks(&["a"]);
        app.mode = Mode::Confirm;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("y delete"));
    }

    #[test]
    fn status_message_on_the_left() {
        let mut app = app_with_tasks(&[]);
        app.status_message = Some("deleted \"milk\"".to_string());
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.starts_with("deleted \"milk\""));
    }
}
