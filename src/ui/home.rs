use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::helpers::{category_label, panel};
use crate::state::AppState;
use crate::theme::theme;
use crate::util::{format_date, truncate_to_width};

/// What: Render the landing page: hero banner, headline numbers and latest news.
pub fn render_home(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme(app.mode);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(3),
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            app.site.hero.title.clone(),
            Style::default().fg(th.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.site.hero.subtitle.clone(),
            Style::default().fg(th.subtext0),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(panel("", &th, false));
    f.render_widget(hero, rows[0]);

    let cards = &app.site.info_cards;
    if !cards.is_empty() {
        let constraints = vec![Constraint::Fill(1); cards.len()];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rows[1]);
        for (card, col) in cards.iter().zip(cols.iter()) {
            let p = Paragraph::new(vec![
                Line::from(Span::styled(
                    card.number.clone(),
                    Style::default().fg(th.primary).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(card.label.clone(), Style::default().fg(th.subtext0))),
            ])
            .alignment(Alignment::Center)
            .block(panel("", &th, false));
            f.render_widget(p, *col);
        }
    }

    let width = usize::from(rows[2].width.saturating_sub(4));
    let mut lines: Vec<Line> = Vec::new();
    for item in app.latest_news() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", category_label(&item.category)),
                Style::default().fg(th.sapphire),
            ),
            Span::styled(
                item.title.clone(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", format_date(&item.date)),
                Style::default().fg(th.overlay1),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            truncate_to_width(&item.excerpt, width),
            Style::default().fg(th.subtext0),
        )));
        lines.push(Line::default());
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Belum ada berita.",
            Style::default().fg(th.overlay1),
        )));
    }
    f.render_widget(
        Paragraph::new(lines).block(panel("Berita Terbaru", &th, false)),
        rows[2],
    );
}
