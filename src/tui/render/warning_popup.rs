use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::centered_rect_fixed;

/// Render the blocking warning popup (duplicate add). A single
/// acknowledgement dismisses it.
pub fn render_warning_popup(frame: &mut Frame, app: &App, area: Rect) {
    let warning = match &app.warning {
        Some(w) => w,
        None => return,
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.yellow)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup_w: u16 = 50.min(area.width.saturating_sub(2));

    let message = unicode::truncate_to_width(warning, popup_w.saturating_sub(6) as usize);

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(" Duplicate Task", header_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(message, text_style),
        ]),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Enter", dim_style),
            Span::styled(" dismiss", text_style),
        ]),
    ];

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.yellow).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}
