//! Small rendering helpers shared by the page renderers.

use ratatui::{
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use crate::logic::charts::parse_css_color;
use crate::state::types::ALL_CATEGORIES;
use crate::theme::Theme;

/// What: Rounded panel block with a styled title.
///
/// Inputs:
/// - `title`: Border title; empty for none
/// - `th`: Active palette
/// - `focused`: Highlight the border
#[must_use]
pub fn panel<'a>(title: &str, th: &Theme, focused: bool) -> Block<'a> {
    let border = if focused { th.primary } else { th.surface2 };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(th.base));
    if !title.is_empty() {
        block = block.title(Span::styled(
            format!(" {title} "),
            Style::default().fg(th.primary).add_modifier(Modifier::BOLD),
        ));
    }
    block
}

/// What: Rectangle of `width` x `height` centered in `area`, clamped to it.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Terminal color for a CSS color string, or `fallback` when it cannot be parsed.
#[must_use]
pub fn css_color(css: Option<&str>, fallback: Color) -> Color {
    css.and_then(parse_css_color)
        .map_or(fallback, |(r, g, b)| Color::Rgb(r, g, b))
}

/// What: Display label of a category filter button.
///
/// Details:
/// - `"all"` reads "Semua"; other categories are capitalized.
#[must_use]
pub fn category_label(category: &str) -> String {
    if category == ALL_CATEGORIES {
        return "Semua".to_string();
    }
    let mut chars = category.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(80, 40, area), area);
    }

    #[test]
    fn category_labels() {
        assert_eq!(category_label("all"), "Semua");
        assert_eq!(category_label("kesehatan"), "Kesehatan");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn css_color_falls_back() {
        assert_eq!(css_color(Some("#4CAF50"), Color::Reset), Color::Rgb(0x4c, 0xaf, 0x50));
        assert_eq!(css_color(Some("teal"), Color::Blue), Color::Blue);
        assert_eq!(css_color(None, Color::Blue), Color::Blue);
    }
}
