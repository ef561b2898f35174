//! News page keys: category buttons, card selection, load more and search input.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, InputMode};

/// What: Handle a key on the news page in normal mode.
///
/// Details:
/// - `←/→` (`h`/`l`) move between filter buttons and apply the filter.
/// - `↑/↓` (`k`/`j`) move the card highlight; `Enter` opens the detail view.
/// - `m` or `Space` shows the next page; `/` focuses the search box.
pub(super) fn handle_news_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Left | KeyCode::Char('h') => app.cycle_category(-1),
        KeyCode::Right | KeyCode::Char('l') => app.cycle_category(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_card(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_card(1),
        KeyCode::Enter => {
            let _ = app.open_selected_detail();
        }
        KeyCode::Char('m' | ' ') => app.load_more(),
        KeyCode::Char('/') => app.input_mode = InputMode::Search,
        _ => {}
    }
}

/// What: Handle a key while the search box has focus.
///
/// Details:
/// - `Enter` applies the search and leaves the box; `Esc` leaves without searching.
pub(super) fn handle_search_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Enter => {
            app.apply_search();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => app.search_input.push(c),
        _ => {}
    }
}
