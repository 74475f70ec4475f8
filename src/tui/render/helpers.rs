use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::util::unicode;

/// Checkbox symbol for a task's completion flag
pub(super) fn checkbox(done: bool) -> &'static str {
    if done { "[x]" } else { "[ ]" }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Push the edit buffer as spans with an inverse-video cursor cell.
/// The cursor sits on the grapheme at `cursor` (a trailing space cell when
/// the cursor is at the end of the buffer).
pub(super) fn push_edit_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    buf: &str,
    cursor: usize,
    base_style: Style,
    cursor_style: Style,
) {
    let cursor = cursor.min(buf.len());
    let before = &buf[..cursor];
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), base_style));
    }
    if cursor < buf.len() {
        let grapheme = unicode::grapheme_at(buf, cursor);
        spans.push(Span::styled(grapheme.to_string(), cursor_style));
        let after = &buf[cursor + grapheme.len()..];
        if !after.is_empty() {
            spans.push(Span::styled(after.to_string(), base_style));
        }
    } else {
        spans.push(Span::styled(" ".to_string(), cursor_style));
    }
}

/// A fixed-size rect centered inside `area`
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
