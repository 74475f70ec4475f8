use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::spans_width;

/// Render the header: app name, live task count, separator rule beneath
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // name + count
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_title_row(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_title_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled("\u{25A0}", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            " slate",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let count = app.store.count();
    let count_text = if count == 1 {
        "1 task ".to_string()
    } else {
        format!("{} tasks ", count)
    };

    let left_width = spans_width(&spans);
    let count_width = count_text.chars().count();
    if left_width + count_width < width {
        spans.push(Span::styled(
            " ".repeat(width - left_width - count_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            count_text,
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let line = "\u{2500}".repeat(area.width as usize);
    let paragraph =
        Paragraph::new(line).style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
