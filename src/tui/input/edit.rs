use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, EditTarget, Mode};
use crate::util::unicode;

use super::*;

/// Focus the add-input row with an empty buffer
pub(super) fn start_add(app: &mut App) {
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.edit_target = Some(EditTarget::NewTask);
    app.mode = Mode::Edit;
}

/// Enter edit mode for the task under the cursor, seeding the buffer with
/// its current title and the cursor at the end
pub(super) fn start_rename(app: &mut App) {
    let id = match app.cursor_task_id() {
        Some(id) => id,
        None => return,
    };
    let title = match app.store.get(id) {
        Some(task) => task.title.clone(),
        None => return,
    };
    app.edit_cursor = title.len();
    app.edit_buffer = title;
    app.edit_target = Some(EditTarget::TaskTitle { id });
    app.mode = Mode::Edit;
}

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Commit
        (_, KeyCode::Enter) => {
            confirm_edit(app);
        }
        // Cancel: discard the buffer, task keeps its original title
        (_, KeyCode::Esc) => {
            cancel_edit(app);
        }
        // Jump to start of line: Home or Ctrl+A
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_cursor = 0;
        }
        (_, KeyCode::Home) => {
            app.edit_cursor = 0;
        }
        // Jump to end of line: End or Ctrl+E
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_cursor = app.edit_buffer.len();
        }
        (_, KeyCode::End) => {
            app.edit_cursor = app.edit_buffer.len();
        }
        // Kill to start of line: Ctrl+U
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            if app.edit_cursor > 0 {
                app.edit_buffer.drain(..app.edit_cursor);
                app.edit_cursor = 0;
            }
        }
        // Word movement (Alt+arrow, or readline Alt+B / Alt+F)
        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => {
            app.edit_cursor = unicode::word_boundary_left(&app.edit_buffer, app.edit_cursor);
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::ALT) => {
            app.edit_cursor = unicode::word_boundary_right(&app.edit_buffer, app.edit_cursor);
        }
        (m, KeyCode::Char('b')) if m.contains(KeyModifiers::ALT) => {
            app.edit_cursor = unicode::word_boundary_left(&app.edit_buffer, app.edit_cursor);
        }
        (m, KeyCode::Char('f')) if m.contains(KeyModifiers::ALT) => {
            app.edit_cursor = unicode::word_boundary_right(&app.edit_buffer, app.edit_cursor);
        }
        // Cursor movement: single grapheme left/right
        (KeyModifiers::NONE, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        (KeyModifiers::NONE, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        // Word backspace (Alt or Ctrl)
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            let new_pos = unicode::word_boundary_left(&app.edit_buffer, app.edit_cursor);
            app.edit_buffer.drain(new_pos..app.edit_cursor);
            app.edit_cursor = new_pos;
        }
        // Backspace: delete the grapheme before the cursor
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.drain(prev..app.edit_cursor);
                app.edit_cursor = prev;
            }
        }
        // Type character
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => {}
    }
}

/// Commit the buffer to its target. An empty (whitespace-only) buffer is
/// discarded without touching the store.
pub(super) fn confirm_edit(app: &mut App) {
    let target = match app.edit_target.take() {
        Some(t) => t,
        None => {
            app.mode = Mode::Navigate;
            return;
        }
    };

    let title = app.edit_buffer.trim().to_string();
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.mode = Mode::Navigate;

    if title.is_empty() {
        return;
    }

    match target {
        EditTarget::NewTask => match app.store.add(&title) {
            Ok(_) => {
                // Land the cursor on the task just appended
                app.cursor = app.store.count() - 1;
            }
            Err(e) => {
                app.warning = Some(e.to_string());
            }
        },
        EditTarget::TaskTitle { id } => {
            // Unknown ids are silently ignored
            app.store.rename(id, &title);
        }
    }
}

/// Leave edit mode, discarding the buffer
pub(super) fn cancel_edit(app: &mut App) {
    app.edit_target = None;
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.mode = Mode::Navigate;
}
