use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Tabs},
};

use super::helpers::{category_label, panel};
use crate::state::{AppState, InputMode, NewsItem};
use crate::theme::{Theme, theme};
use crate::util::{format_date, truncate_to_width};

/// Heading of the empty-result placeholder.
pub const NO_RESULTS_TITLE: &str = "Tidak ada berita ditemukan";
/// Hint under the empty-result placeholder.
pub const NO_RESULTS_HINT: &str = "Coba ubah filter atau kata kunci pencarian";
/// Text of the load-more affordance.
pub const LOAD_MORE_LABEL: &str = "[m] Muat Lebih Banyak";

/// Three-line card for one news item.
fn news_card(item: &NewsItem, width: usize, th: &Theme) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", category_label(&item.category)),
                Style::default().fg(th.crust).bg(th.primary),
            ),
            Span::styled(
                format!("  {}", format_date(&item.date)),
                Style::default().fg(th.overlay1),
            ),
            Span::styled(
                if item.author.is_empty() {
                    String::new()
                } else {
                    format!("  · {}", item.author)
                },
                Style::default().fg(th.overlay1),
            ),
        ]),
        Line::from(Span::styled(
            truncate_to_width(&item.title, width),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(&item.excerpt, width),
            Style::default().fg(th.subtext0),
        )),
        Line::default(),
    ])
}

/// What: Render the news page: filter buttons, search box, cards and load-more hint.
///
/// Details:
/// - Cards come from the listing's render target, never from the state directly.
pub fn render_news(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme(app.mode);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    let titles: Vec<Line> = app
        .category_options()
        .iter()
        .map(|c| Line::from(format!(" {} ", category_label(c))))
        .collect();
    let tabs = Tabs::new(titles)
        .block(panel("Kategori", &th, false))
        .style(Style::default().fg(th.subtext0))
        .highlight_style(
            Style::default()
                .fg(th.crust)
                .bg(th.primary)
                .add_modifier(Modifier::BOLD),
        )
        .select(app.category_index);
    f.render_widget(tabs, rows[0]);

    let searching = app.input_mode == InputMode::Search;
    let search_line = if app.search_input.is_empty() && !searching {
        Line::from(Span::styled(
            "Tekan / untuk mencari berita...",
            Style::default().fg(th.overlay1),
        ))
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(th.primary)),
            Span::styled(app.search_input.clone(), Style::default().fg(th.text)),
            Span::styled(
                if searching { "▏" } else { "" },
                Style::default().fg(th.primary),
            ),
        ])
    };
    f.render_widget(
        Paragraph::new(search_line).block(panel("Cari", &th, searching)),
        rows[1],
    );

    let view = app.news.target();
    let state = app.news.state();
    let title = format!(
        "Berita ({} ditemukan, halaman {}/{})",
        state.visible_items().len(),
        state.page(),
        state.page_count().max(1)
    );
    if view.no_results {
        let placeholder = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                NO_RESULTS_TITLE,
                Style::default().fg(th.subtext0).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(NO_RESULTS_HINT, Style::default().fg(th.overlay1))),
        ])
        .alignment(Alignment::Center)
        .block(panel(&title, &th, false));
        f.render_widget(placeholder, rows[2]);
    } else {
        let width = usize::from(rows[2].width.saturating_sub(6));
        let items: Vec<ListItem> = view
            .cards
            .iter()
            .map(|n| news_card(n, width, &th))
            .collect();
        let list = List::new(items)
            .block(panel(&title, &th, !searching))
            .highlight_style(Style::default().bg(th.surface1))
            .highlight_symbol("▌ ");
        let mut list_state = ListState::default();
        list_state.select(Some(app.selected_card));
        f.render_stateful_widget(list, rows[2], &mut list_state);
    }

    if view.load_more_visible {
        f.render_widget(
            Paragraph::new(Span::styled(
                LOAD_MORE_LABEL,
                Style::default().fg(th.primary).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            rows[3],
        );
    }
}
