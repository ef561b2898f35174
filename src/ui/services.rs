use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::helpers::panel;
use crate::logic::{FieldName, ServiceForm};
use crate::state::{AppState, InputMode};
use crate::theme::{Theme, theme};

/// What: Build the form lines: one label/value row per field plus its error.
///
/// Inputs:
/// - `form`: Form state
/// - `editing`: Whether keys currently edit the form (shows the cursor)
/// - `th`: Palette
#[must_use]
pub fn form_lines(form: &ServiceForm, editing: bool, th: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for field in FieldName::ALL {
        let focused = editing && form.focused() == field;
        let marker = if field.required() { " *" } else { "" };
        let label_style = if focused {
            Style::default().fg(th.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0)
        };
        let value = if field == FieldName::ServiceType {
            form.selected_type_label().map_or_else(
                || "(tidak ada pilihan)".to_string(),
                |l| format!("‹ {l} ›"),
            )
        } else {
            form.value(field).to_string()
        };
        let cursor = if focused && field != FieldName::ServiceType {
            "▏"
        } else {
            ""
        };
        let value_style = if form.error(field).is_some() {
            Style::default().fg(th.red)
        } else {
            Style::default().fg(th.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<16}", format!("{}{marker}", field.label())), label_style),
            Span::styled(value, value_style),
            Span::styled(cursor, Style::default().fg(th.primary)),
        ]));
        if let Some(err) = form.error(field) {
            lines.push(Line::from(Span::styled(
                format!("{:16}{err}", ""),
                Style::default().fg(th.red),
            )));
        }
    }
    lines
}

/// What: Render the services page: service cards beside the request form.
pub fn render_services(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme(app.mode);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for svc in &app.services {
        lines.push(Line::from(Span::styled(
            svc.title.clone(),
            Style::default().fg(th.primary).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            svc.description.clone(),
            Style::default().fg(th.subtext0),
        )));
        lines.push(Line::default());
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Informasi layanan belum tersedia.",
            Style::default().fg(th.overlay1),
        )));
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("Layanan", &th, false)),
        cols[0],
    );

    let editing = app.input_mode == InputMode::Form;
    f.render_widget(
        Paragraph::new(form_lines(&app.form, editing, &th))
            .block(panel("Formulir Permohonan", &th, editing)),
        cols[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::validation::MSG_NIK;
    use crate::state::types::ServiceType;
    use crate::theme::ThemeMode;

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    /// What: Errors appear under their field and the service type shows its label.
    fn form_lines_show_errors_and_selection() {
        let th = theme(ThemeMode::Dark);
        let mut form = ServiceForm::new(vec![ServiceType {
            value: "ktp".into(),
            label: "Pembuatan KTP".into(),
        }]);
        form.focus_next();
        form.push_char('1');
        form.focus_next();
        let text = text_of(&form_lines(&form, true, &th));
        assert!(text.contains(MSG_NIK));
        assert!(text.contains("‹ Pembuatan KTP ›"));
    }
}
