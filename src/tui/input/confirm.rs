use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

use super::*;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let confirm = app.confirm.take();
            app.mode = Mode::Navigate;
            if let Some(confirm) = confirm {
                if app.store.remove(confirm.id) {
                    app.status_message = Some(format!("deleted \"{}\"", confirm.title));
                }
                app.clamp_cursor();
            }
        }
        // Decline: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
