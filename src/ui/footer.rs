use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::helpers::panel;
use crate::state::{AppState, InputMode, Page};
use crate::theme::theme;

/// Key hints for the current page and input mode.
fn key_hints(app: &AppState) -> &'static str {
    match (app.input_mode, app.page) {
        (InputMode::Search, _) => "Enter cari  Esc batal",
        (InputMode::Form, _) => {
            "Tab/↓ berikut  ↑ sebelumnya  ←/→ jenis layanan  Ctrl+S kirim  Esc selesai"
        }
        (InputMode::Normal, Page::News) => {
            "←/→ kategori  ↑/↓ pilih  Enter baca  / cari  m muat lagi  t tema  q keluar"
        }
        (InputMode::Normal, Page::Services) => "i isi formulir  Tab halaman  t tema  q keluar",
        (InputMode::Normal, _) => "1-5/Tab halaman  ↑/↓ gulir  t tema  q keluar",
    }
}

/// What: Render the contact line plus either the toast or the key hints.
///
/// Details:
/// - The contact line is omitted when the site configuration has no contact block.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme(app.mode);
    let mut lines: Vec<Line> = Vec::new();
    if let Some(contact) = &app.site.contact {
        lines.push(Line::from(vec![
            Span::styled("⌂ ", Style::default().fg(th.primary)),
            Span::styled(contact.address.clone(), Style::default().fg(th.subtext0)),
            Span::styled("  ☎ ", Style::default().fg(th.primary)),
            Span::styled(contact.phone.clone(), Style::default().fg(th.subtext0)),
            Span::styled("  ✉ ", Style::default().fg(th.primary)),
            Span::styled(contact.email.clone(), Style::default().fg(th.subtext0)),
        ]));
    }
    match &app.toast_message {
        Some(msg) => lines.push(Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        ))),
        None => lines.push(Line::from(Span::styled(
            key_hints(app),
            Style::default().fg(th.overlay1),
        ))),
    }
    f.render_widget(Paragraph::new(lines).block(panel("", &th, false)), area);
}
