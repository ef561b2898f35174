use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, GraphType, Paragraph},
};

use super::helpers::{css_color, panel};
use crate::logic::charts::{ChartColors, ChartPoint, points, themed};
use crate::state::AppState;
use crate::state::types::{ChartKind, ChartSpec};
use crate::theme::{Theme, theme};

/// Width reserved for labels in share charts.
const SHARE_LABEL_WIDTH: usize = 14;

/// Whole, non-negative bar value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> u64 {
    value.max(0.0).round() as u64
}

/// What: Build the lines of a share chart (pie/doughnut) as horizontal bars.
///
/// Inputs:
/// - `pts`: Points of the first dataset
/// - `bar_width`: Columns available for the bar itself
/// - `th`: Palette used when a point has no color
///
/// Output:
/// - One line per point: label, proportional bar and percentage.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn share_lines(pts: &[ChartPoint], bar_width: usize, th: &Theme) -> Vec<Line<'static>> {
    pts.iter()
        .map(|p| {
            let filled = usize::try_from(whole(p.percent * 0.01 * bar_width as f64))
                .unwrap_or(bar_width)
                .min(bar_width);
            let color = css_color(p.color.as_deref(), th.primary);
            Line::from(vec![
                Span::styled(
                    format!("{:<w$}", p.label, w = SHARE_LABEL_WIDTH),
                    Style::default().fg(th.text),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
                Span::styled(
                    "░".repeat(bar_width - filled),
                    Style::default().fg(th.surface1),
                ),
                Span::styled(format!(" {:>5.1}%", p.percent), Style::default().fg(th.subtext0)),
            ])
        })
        .collect()
}

/// Draw one chart into `area` according to its kind.
#[allow(clippy::cast_precision_loss)]
fn render_chart(f: &mut Frame, spec: &ChartSpec, area: Rect, app: &AppState) {
    let th = theme(app.mode);
    let colors = ChartColors::for_mode(app.mode);
    let spec = themed(spec, app.mode);
    let pts = points(&spec);
    let block = panel(&spec.title, &th, false);
    let first = spec.data.datasets.first();

    match spec.kind {
        ChartKind::Doughnut | ChartKind::Pie => {
            let inner = usize::from(area.width.saturating_sub(2));
            let bar_width = inner.saturating_sub(SHARE_LABEL_WIDTH + 8).max(1);
            f.render_widget(
                Paragraph::new(share_lines(&pts, bar_width, &th)).block(block),
                area,
            );
        }
        ChartKind::Bar => {
            let bars: Vec<Bar> = pts
                .iter()
                .map(|p| {
                    Bar::default()
                        .value(whole(p.value))
                        .label(Line::from(p.label.clone()))
                        .text_value(format!("{}", whole(p.value)))
                        .style(Style::default().fg(css_color(p.color.as_deref(), th.sapphire)))
                        .value_style(Style::default().fg(th.crust).bg(th.sapphire))
                })
                .collect();
            let n = u16::try_from(bars.len().max(1)).unwrap_or(u16::MAX);
            let bar_width = (area.width.saturating_sub(2) / n).saturating_sub(1).clamp(1, 9);
            let chart = BarChart::default()
                .block(block)
                .bar_width(bar_width)
                .bar_gap(1)
                .label_style(Style::default().fg(css_color(Some(colors.text_secondary), th.subtext0)))
                .data(BarGroup::default().bars(&bars));
            f.render_widget(chart, area);
        }
        ChartKind::Line => {
            let data: Vec<(f64, f64)> = pts
                .iter()
                .enumerate()
                .map(|(i, p)| (i as f64, p.value))
                .collect();
            let max = pts.iter().map(|p| p.value).fold(0.0_f64, f64::max);
            let line_color = css_color(
                first
                    .and_then(|d| d.border_color.as_ref())
                    .and_then(|c| c.at(0)),
                th.green,
            );
            let label = first.map(|d| d.label.clone()).unwrap_or_default();
            let dataset = ratatui::widgets::Dataset::default()
                .name(label)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(line_color))
                .data(&data);
            let axis_style = Style::default().fg(css_color(Some(colors.text_secondary), th.subtext0));
            let x_labels: Vec<Span> = match (pts.first(), pts.last()) {
                (Some(a), Some(b)) => vec![Span::raw(a.label.clone()), Span::raw(b.label.clone())],
                _ => Vec::new(),
            };
            let chart = Chart::new(vec![dataset])
                .block(block)
                .x_axis(
                    Axis::default()
                        .style(axis_style)
                        .bounds([0.0, (pts.len().saturating_sub(1)).max(1) as f64])
                        .labels(x_labels),
                )
                .y_axis(
                    Axis::default()
                        .style(axis_style)
                        .bounds([0.0, max * 1.1])
                        .labels(vec![Span::raw("0"), Span::raw(format!("{}", whole(max)))]),
                );
            f.render_widget(chart, area);
        }
    }
}

/// What: Render the statistics page: summary figures above a 2-column chart grid.
///
/// Details:
/// - Charts are laid out in key order; `page_scroll` skips whole chart rows.
pub fn render_statistics(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme(app.mode);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(area);

    let summary = &app.charts.summary;
    if !summary.is_empty() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Fill(1); summary.len()])
            .split(rows[0]);
        for (stat, col) in summary.iter().zip(cols.iter()) {
            let p = Paragraph::new(vec![
                Line::from(Span::styled(
                    stat.value.clone(),
                    Style::default().fg(th.primary).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(stat.title.clone(), Style::default().fg(th.text))),
                Line::from(Span::styled(
                    stat.description.clone(),
                    Style::default().fg(th.subtext0),
                )),
            ])
            .alignment(Alignment::Center)
            .block(panel("", &th, false));
            f.render_widget(p, *col);
        }
    }

    let specs: Vec<&ChartSpec> = app.charts.charts.values().collect();
    let grid_rows: Vec<&[&ChartSpec]> = specs
        .chunks(2)
        .skip(usize::from(app.page_scroll))
        .collect();
    if grid_rows.is_empty() {
        f.render_widget(
            Paragraph::new("Data statistik belum tersedia.").block(panel("Infografis", &th, false)),
            rows[1],
        );
        return;
    }
    let shown = grid_rows.len().min(2);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Fill(1); shown])
        .split(rows[1]);
    for (pair, row_area) in grid_rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Fill(1)])
            .split(*row_area);
        for (spec, cell) in pair.iter().zip(cells.iter()) {
            render_chart(f, spec, *cell, app);
        }
    }
}
