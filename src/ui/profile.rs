use ratatui::{
    Frame,
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::helpers::{css_color, panel};
use crate::state::AppState;
use crate::state::types::Profile;
use crate::theme::{Theme, theme};

/// Heading line of a profile section.
fn heading(title: &str, th: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(th.primary).add_modifier(Modifier::BOLD),
    ))
}

/// What: Build the text lines of the village profile.
///
/// Details:
/// - Sections missing from the data are skipped.
/// - Mission entries are numbered; leadership entries show name and term.
#[must_use]
pub fn profile_lines(profile: &Profile, th: &Theme) -> Vec<Line<'static>> {
    let text = Style::default().fg(th.text);
    let muted = Style::default().fg(th.subtext0);
    let mut lines = Vec::new();

    if let Some(history) = &profile.history {
        lines.push(heading(&history.title, th));
        for para in &history.content {
            lines.push(Line::from(Span::styled(para.clone(), text)));
            lines.push(Line::default());
        }
    }
    if let Some(vision) = &profile.vision {
        lines.push(heading(&vision.title, th));
        lines.push(Line::from(Span::styled(
            format!("\"{}\"", vision.content),
            text.add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::default());
    }
    if let Some(mission) = &profile.mission {
        lines.push(heading(&mission.title, th));
        for (i, m) in mission.content.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(th.primary)),
                Span::styled(m.clone(), text),
            ]));
        }
        lines.push(Line::default());
    }
    if let Some(map) = &profile.map {
        lines.push(heading(&map.title, th));
        for entry in &map.legend {
            lines.push(Line::from(vec![
                Span::styled(
                    "■ ",
                    Style::default().fg(css_color(Some(entry.color.as_str()), Color::Reset)),
                ),
                Span::styled(entry.label.clone(), muted),
            ]));
        }
        lines.push(Line::default());
    }
    if let Some(leadership) = &profile.leadership {
        lines.push(heading(&leadership.title, th));
        for pos in &leadership.positions {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", pos.title), muted),
                Span::styled(pos.name.clone(), text.add_modifier(Modifier::BOLD)),
                Span::styled(format!("  ({})", pos.period), muted),
            ]));
        }
    }
    lines
}

/// What: Render the profile page, scrolled by `app.page_scroll`.
pub fn render_profile(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme(app.mode);
    let lines = app.profile.as_ref().map_or_else(
        || {
            vec![Line::from(Span::styled(
                "Profil desa belum tersedia.",
                Style::default().fg(th.overlay1),
            ))]
        },
        |p| profile_lines(p, &th),
    );
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.page_scroll, 0))
        .block(panel("Profil Desa", &th, false));
    f.render_widget(para, area);
}
