use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget};
use crate::util::unicode;

use super::helpers::{checkbox, push_edit_spans, spans_width};

/// Render the task list
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_empty() {
        let empty = Paragraph::new(" No tasks yet")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    let width = area.width as usize;

    // Keep the cursor row visible
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let mut lines: Vec<Line> = Vec::new();

    for (i, task) in app
        .store
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor = i == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));

        let marker_style = if task.done {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };
        spans.push(Span::styled(checkbox(task.done), marker_style));
        spans.push(Span::styled("  ", Style::default().bg(row_bg)));

        let editing_this =
            matches!(&app.edit_target, Some(EditTarget::TaskTitle { id }) if *id == task.id);

        if editing_this {
            push_edit_spans(
                &mut spans,
                &app.edit_buffer,
                app.edit_cursor,
                Style::default().fg(app.theme.text_bright).bg(row_bg),
                Style::default().fg(row_bg).bg(app.theme.text_bright),
            );
        } else {
            let title_style = if task.done {
                Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if is_cursor {
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text_bright).bg(row_bg)
            };
            let prefix_width = spans_width(&spans);
            let available = width.saturating_sub(prefix_width + 1);
            let display_title = unicode::truncate_to_width(&task.title, available);
            spans.push(Span::styled(display_title, title_style));
        }

        // Pad cursor row to full width
        if is_cursor {
            let content_width = spans_width(&spans);
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
