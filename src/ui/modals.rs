use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::helpers::{category_label, centered_rect};
use crate::state::{AppState, Modal, NewsItem};
use crate::theme::{Theme, theme};
use crate::util::format_date;

/// Maximum width of the news detail modal.
const DETAIL_MAX_WIDTH: u16 = 90;
/// Vertical padding kept around the detail modal.
const DETAIL_HEIGHT_PADDING: u16 = 4;

/// What: Lines of the detail view: meta row, title and the untruncated content.
#[must_use]
pub fn detail_lines(item: &NewsItem, th: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", category_label(&item.category)),
                Style::default().fg(th.crust).bg(th.primary),
            ),
            Span::styled(
                format!("  {}  · {}", format_date(&item.date), item.author),
                Style::default().fg(th.overlay1),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(
        item.content
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.text)))),
    );
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "↑/↓ gulir  Esc tutup",
        Style::default().fg(th.overlay1),
    )));
    lines
}

/// Draw a centered framed box with `lines`.
fn render_box(f: &mut Frame, rect: Rect, title: &str, lines: Vec<Line<'static>>, scroll: u16, th: &Theme) {
    f.render_widget(Clear, rect);
    let para = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(th.primary).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.primary))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(para, rect);
}

/// What: Render the active modal overlay, if any.
pub fn render_modals(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme(app.mode);
    match &app.modal {
        Modal::None => {}
        Modal::NewsDetail { item, scroll } => {
            let rect = centered_rect(
                DETAIL_MAX_WIDTH,
                area.height.saturating_sub(DETAIL_HEIGHT_PADDING),
                area,
            );
            render_box(f, rect, "Berita", detail_lines(item, &th), *scroll, &th);
        }
    }
}
