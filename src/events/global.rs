//! Global shortcuts: quitting, page navigation, theme toggle and scrolling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::EventOutcome;
use crate::state::{AppState, Page};

/// Ctrl+C quits from anywhere, including text input.
pub(super) fn is_force_quit(ke: &KeyEvent) -> bool {
    ke.modifiers.contains(KeyModifiers::CONTROL) && matches!(ke.code, KeyCode::Char('c' | 'C'))
}

/// What: Handle keys that work on every page in normal mode.
///
/// Output:
/// - `Some(outcome)` when the key was consumed; `None` to let the page handle it.
pub(super) fn handle_global_key(ke: KeyEvent, app: &mut AppState) -> Option<EventOutcome> {
    match ke.code {
        KeyCode::Char('q') => Some(EventOutcome::Quit),
        KeyCode::Char('t') => {
            let mode = app.toggle_theme();
            tracing::info!(mode = %mode, "theme toggled");
            Some(EventOutcome::ThemeChanged(mode))
        }
        KeyCode::Tab => {
            app.set_page(app.page.next());
            Some(EventOutcome::None)
        }
        KeyCode::BackTab => {
            app.set_page(app.page.prev());
            Some(EventOutcome::None)
        }
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c.to_digit(10).and_then(|d| usize::try_from(d).ok())?;
            app.set_page(Page::ALL[idx - 1]);
            Some(EventOutcome::None)
        }
        _ => None,
    }
}

/// Scroll long pages (profile, statistics).
pub(super) fn handle_scroll_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Down | KeyCode::Char('j') => app.page_scroll = app.page_scroll.saturating_add(1),
        KeyCode::Up | KeyCode::Char('k') => app.page_scroll = app.page_scroll.saturating_sub(1),
        KeyCode::PageDown => app.page_scroll = app.page_scroll.saturating_add(10),
        KeyCode::PageUp => app.page_scroll = app.page_scroll.saturating_sub(10),
        KeyCode::Home => app.page_scroll = 0,
        _ => {}
    }
}
