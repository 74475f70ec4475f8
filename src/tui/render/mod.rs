pub mod confirm_popup;
pub mod header;
pub mod helpers;
pub mod input_row;
pub mod list_view;
pub mod status_row;
pub mod warning_popup;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | add-input (2 rows) | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + separator
            Constraint::Length(2), // add-input row + spacing
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    input_row::render_input_row(frame, app, chunks[1]);
    list_view::render_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Popups render on top of everything
    if app.confirm.is_some() {
        confirm_popup::render_confirm_popup(frame, app, area);
    }
    if app.warning.is_some() {
        warning_popup::render_warning_popup(frame, app, area);
    }
}
