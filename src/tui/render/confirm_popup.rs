use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::centered_rect_fixed;

/// Render the delete confirmation popup (yes/no prompt)
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let confirm = match &app.confirm {
        Some(c) => c,
        None => return,
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup_w: u16 = 44.min(area.width.saturating_sub(2));

    let title = unicode::truncate_to_width(&confirm.title, popup_w.saturating_sub(8) as usize);

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(" Delete Task", header_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(format!("\"{}\"", title), bright_style),
        ]),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("y", dim_style),
            Span::styled(" delete  ", text_style),
            Span::styled("n", dim_style),
            Span::styled(" cancel", text_style),
        ]),
    ];

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}
