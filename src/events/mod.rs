//! Event handling layer: maps terminal key presses to state changes.
//!
//! Handlers only mutate [`AppState`]; side effects that leave the process
//! (persisting the theme, handing over a service request) are returned as an
//! [`EventOutcome`] for the runtime to perform.

use crossterm::event::{Event as CEvent, KeyEventKind};

use crate::logic::ServiceRequest;
use crate::state::{AppState, InputMode};
use crate::theme::ThemeMode;

mod form;
mod global;
mod modals;
mod news;


/// What the runtime must do after an event was handled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing beyond redrawing.
    #[default]
    None,
    /// Leave the application.
    Quit,
    /// The theme changed and should be persisted.
    ThemeChanged(ThemeMode),
    /// A service request passed validation.
    Submitted(ServiceRequest),
}

/// What: Dispatch one terminal event.
///
/// Inputs:
/// - `ev`: Crossterm event
/// - `app`: Mutable application state
///
/// Output:
/// - [`EventOutcome`] describing follow-up work.
///
/// Details:
/// - Only key presses are handled; resize and release events just redraw.
/// - Order: open modal, text input modes, global shortcuts, page keys.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> EventOutcome {
    let CEvent::Key(ke) = ev else {
        return EventOutcome::None;
    };
    if ke.kind != KeyEventKind::Press {
        return EventOutcome::None;
    }
    if global::is_force_quit(ke) {
        return EventOutcome::Quit;
    }
    if app.loading {
        return EventOutcome::None;
    }
    if app.modal.is_open() {
        modals::handle_modal_key(*ke, app);
        return EventOutcome::None;
    }
    match app.input_mode {
        InputMode::Search => {
            news::handle_search_key(*ke, app);
            EventOutcome::None
        }
        InputMode::Form => form::handle_form_key(*ke, app),
        InputMode::Normal => {
            if let Some(outcome) = global::handle_global_key(*ke, app) {
                return outcome;
            }
            match app.page {
                crate::state::Page::News => news::handle_news_key(*ke, app),
                crate::state::Page::Services => form::handle_services_key(*ke, app),
                _ => global::handle_scroll_key(*ke, app),
            }
            EventOutcome::None
        }
    }
}
