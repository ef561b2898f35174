//! Services page keys and service request form editing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::EventOutcome;
use crate::logic::FieldName;
use crate::state::{AppState, InputMode};

/// Enter form editing from the services page (`i` or `Enter`).
pub(super) fn handle_services_key(ke: KeyEvent, app: &mut AppState) {
    if matches!(ke.code, KeyCode::Char('i') | KeyCode::Enter) {
        app.input_mode = InputMode::Form;
    }
}

/// What: Handle a key while editing the service request form.
///
/// Output:
/// - [`EventOutcome::Submitted`] when `Ctrl+S` (or `Enter` on the last field)
///   submits a valid form; otherwise [`EventOutcome::None`].
///
/// Details:
/// - Leaving a field validates it; typing clears its error.
/// - `←/→` cycle the service type option when that field is focused.
pub(super) fn handle_form_key(ke: KeyEvent, app: &mut AppState) -> EventOutcome {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Char('s' | 'S') if ctrl => return submit(app),
        KeyCode::Esc => {
            app.form.blur();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Enter => {
            if app.form.focused() == FieldName::Message {
                return submit(app);
            }
            app.form.focus_next();
        }
        KeyCode::Left if app.form.focused() == FieldName::ServiceType => {
            app.form.cycle_service_type(false);
        }
        KeyCode::Right if app.form.focused() == FieldName::ServiceType => {
            app.form.cycle_service_type(true);
        }
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Char(c) if !ctrl => app.form.push_char(c),
        _ => {}
    }
    EventOutcome::None
}

/// Submit the form, reporting the request on success.
fn submit(app: &mut AppState) -> EventOutcome {
    app.submit_form()
        .map_or(EventOutcome::None, EventOutcome::Submitted)
}
