use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};

use super::helpers::panel;
use crate::state::{AppState, Page};
use crate::theme::{ThemeMode, theme};

/// Site title shown when `config.json` has none.
const FALLBACK_TITLE: &str = "Portal Desa";

/// What: Render the brand line and the page tabs.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (page, mode, site title)
/// - `area`: Header area (3 rows)
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme(app.mode);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(10)])
        .split(area);

    let title = if app.site.site.title.is_empty() {
        FALLBACK_TITLE
    } else {
        app.site.site.title.as_str()
    };
    let mode_glyph = match app.mode {
        ThemeMode::Light => "☀",
        ThemeMode::Dark => "☾",
    };
    let brand = Paragraph::new(Line::from(vec![
        Span::styled(
            title.to_string(),
            Style::default().fg(th.primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(mode_glyph, Style::default().fg(th.yellow)),
    ]))
    .block(panel("", &th, false));
    f.render_widget(brand, cols[0]);

    let selected = Page::ALL.iter().position(|p| *p == app.page).unwrap_or(0);
    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| Line::from(format!(" {} {} ", i + 1, p.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .block(panel("", &th, false))
        .style(Style::default().fg(th.subtext0))
        .highlight_style(
            Style::default()
                .fg(th.crust)
                .bg(th.primary)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    f.render_widget(tabs, cols[1]);
}
