//! TUI rendering: header tabs, the active page, footer and modal overlays.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::{AppState, Page};
use crate::theme::theme;

mod footer;
mod header;
pub mod helpers;
mod home;
pub mod modals;
pub mod news;
mod profile;
pub mod services;
pub mod statistics;

/// Text of the loading screen.
pub const LOADING_TEXT: &str = "Memuat data desa...";

/// What: Render one frame of the portal.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; read only
///
/// Details:
/// - While loading, only the loading screen is drawn.
/// - The footer grows by one row when a contact block exists.
pub fn ui(f: &mut Frame, app: &AppState) {
    let th = theme(app.mode);
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    if app.loading {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .split(area);
        let text = Paragraph::new(Line::from(Span::styled(
            LOADING_TEXT,
            Style::default().fg(th.primary).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(text, rows[1]);
        return;
    }

    let footer_h = if app.site.contact.is_some() { 4 } else { 3 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(footer_h),
        ])
        .split(area);

    header::render_header(f, app, rows[0]);
    match app.page {
        Page::Home => home::render_home(f, app, rows[1]),
        Page::Profile => profile::render_profile(f, app, rows[1]),
        Page::Statistics => statistics::render_statistics(f, app, rows[1]),
        Page::Services => services::render_services(f, app, rows[1]),
        Page::News => news::render_news(f, app, rows[1]),
    }
    footer::render_footer(f, app, rows[2]);
    modals::render_modals(f, app, area);
}
