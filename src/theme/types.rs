//! Color palettes for the portal's TUI.
//!
//! Colors are grouped into neutrals (base/mantle/crust/surfaces),
//! overlays/subtexts, and accents for highlighting and semantic states.
use ratatui::style::Color;

use super::ThemeMode;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly different background layer used behind panels.
    pub mantle: Color,
    /// Strongest contrast against `base`.
    pub crust: Color,
    /// Subtle surface color for component backgrounds (level 1).
    pub surface1: Color,
    /// Subtle surface color for component backgrounds (level 2).
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Tertiary text for captions and low-emphasis content.
    pub subtext1: Color,
    /// Brand accent (the portal's green).
    pub primary: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the palette for `mode`.
///
/// Example
///
/// ```rust
/// use portal_desa::theme::{ThemeMode, theme};
/// let t = theme(ThemeMode::Dark);
/// let primary_text = t.text;
/// ```
#[must_use]
pub const fn theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme {
            base: hex((0x1e, 0x1e, 0x2e)),
            mantle: hex((0x18, 0x18, 0x25)),
            crust: hex((0x11, 0x11, 0x1b)),
            surface1: hex((0x45, 0x47, 0x5a)),
            surface2: hex((0x58, 0x5b, 0x70)),
            overlay1: hex((0x7f, 0x84, 0x9c)),
            overlay2: hex((0x93, 0x99, 0xb2)),
            text: hex((0xcd, 0xd6, 0xf4)),
            subtext0: hex((0xa6, 0xad, 0xc8)),
            subtext1: hex((0xba, 0xc2, 0xde)),
            primary: hex((0x81, 0xc7, 0x84)),
            sapphire: hex((0x74, 0xc7, 0xec)),
            mauve: hex((0xcb, 0xa6, 0xf7)),
            green: hex((0xa6, 0xe3, 0xa1)),
            yellow: hex((0xf9, 0xe2, 0xaf)),
            red: hex((0xf3, 0x8b, 0xa8)),
            lavender: hex((0xb4, 0xbe, 0xfe)),
        },
        ThemeMode::Light => Theme {
            base: hex((0xef, 0xf1, 0xf5)),
            mantle: hex((0xe6, 0xe9, 0xef)),
            crust: hex((0xdc, 0xe0, 0xe8)),
            surface1: hex((0xbc, 0xc0, 0xcc)),
            surface2: hex((0xac, 0xb0, 0xbe)),
            overlay1: hex((0x8c, 0x8f, 0xa1)),
            overlay2: hex((0x7c, 0x7f, 0x93)),
            text: hex((0x4c, 0x4f, 0x69)),
            subtext0: hex((0x6c, 0x6f, 0x85)),
            subtext1: hex((0x5c, 0x5f, 0x77)),
            primary: hex((0x2e, 0x7d, 0x32)),
            sapphire: hex((0x20, 0x9f, 0xb5)),
            mauve: hex((0x88, 0x39, 0xef)),
            green: hex((0x40, 0xa0, 0x2b)),
            yellow: hex((0xdf, 0x8e, 0x1d)),
            red: hex((0xd2, 0x0f, 0x39)),
            lavender: hex((0x72, 0x87, 0xfd)),
        },
    }
}
