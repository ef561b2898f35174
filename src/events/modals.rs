//! Keys while a modal overlay is open.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal};

/// What: Handle a key for the open modal.
///
/// Details:
/// - Detail view: `Esc`/`q`/`Enter` close, `↑/↓` and `PgUp/PgDn` scroll.
pub(super) fn handle_modal_key(ke: KeyEvent, app: &mut AppState) {
    let close = match &mut app.modal {
        Modal::NewsDetail { scroll, .. } => {
            match ke.code {
                KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
                KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
                KeyCode::PageDown => *scroll = scroll.saturating_add(10),
                KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
                _ => {}
            }
            matches!(ke.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q'))
        }
        Modal::None => false,
    };
    if close {
        app.modal = Modal::None;
    }
}
