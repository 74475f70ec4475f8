use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, ConfirmDelete, Mode};

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Clear any transient status message on keypress
    app.status_message = None;

    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            let count = app.store.count();
            if count > 0 && app.cursor + 1 < count {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            app.cursor = app.store.count().saturating_sub(1);
        }

        // Toggle completion of the task under the cursor
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            if let Some(id) = app.cursor_task_id() {
                app.store.toggle_done(id);
            }
        }

        // Add a new task (focus the add-input row)
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            start_add(app);
        }

        // Edit the title of the task under the cursor
        (KeyModifiers::NONE, KeyCode::Char('e') | KeyCode::Enter) => {
            start_rename(app);
        }

        // Delete the task under the cursor (asks first)
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            request_delete(app);
        }

        _ => {}
    }
}

/// Open the yes/no prompt for the task under the cursor
pub(super) fn request_delete(app: &mut App) {
    let id = match app.cursor_task_id() {
        Some(id) => id,
        None => return,
    };
    let title = match app.store.get(id) {
        Some(task) => task.title.clone(),
        None => return,
    };
    app.confirm = Some(ConfirmDelete { id, title });
    app.mode = Mode::Confirm;
}
