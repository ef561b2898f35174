//! Theme-aware chart preparation for the statistics page.
//!
//! Chart configuration arrives as typed [`ChartSpec`] values; nothing here
//! evaluates code carried in the data files.

use crate::state::types::{ChartSpec, ColorSpec};
use crate::theme::ThemeMode;

/// Colors chart decorations follow for a theme mode, as CSS hex strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartColors {
    /// Legend and label text.
    pub text: &'static str,
    /// Tick labels.
    pub text_secondary: &'static str,
    /// Grid lines.
    pub border: &'static str,
    /// Canvas background; also the slice separator of pie charts.
    pub background: &'static str,
}

impl ChartColors {
    /// Palette for `mode`.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                text: "#ffffff",
                text_secondary: "#9ca3af",
                border: "#374151",
                background: "#1f2937",
            },
            ThemeMode::Light => Self {
                text: "#111827",
                text_secondary: "#6b7280",
                border: "#e5e7eb",
                background: "#ffffff",
            },
        }
    }
}

/// What: Apply theme colors to a chart before drawing.
///
/// Inputs:
/// - `spec`: Chart as loaded
/// - `mode`: Active theme mode
///
/// Output:
/// - Copy of `spec` where pie/doughnut datasets lacking a border color get the
///   theme background as border with width 2.
#[must_use]
pub fn themed(spec: &ChartSpec, mode: ThemeMode) -> ChartSpec {
    let colors = ChartColors::for_mode(mode);
    let mut out = spec.clone();
    if out.kind.is_share() {
        for ds in &mut out.data.datasets {
            if ds.border_color.is_none() {
                ds.border_color = Some(ColorSpec::Single(colors.background.to_string()));
                ds.border_width = Some(2);
            }
        }
    }
    out
}

/// One labeled value ready for drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    /// Category label.
    pub label: String,
    /// Raw value.
    pub value: f64,
    /// Share of the dataset total in percent (0 when the total is 0).
    pub percent: f64,
    /// Fill color, if the dataset defines one.
    pub color: Option<String>,
}

/// What: Flatten the first dataset of a chart into labeled points.
///
/// Output:
/// - One point per label; missing values count as 0. Empty when the chart has
///   no dataset.
#[must_use]
pub fn points(spec: &ChartSpec) -> Vec<ChartPoint> {
    let Some(ds) = spec.data.datasets.first() else {
        return Vec::new();
    };
    let total: f64 = ds.data.iter().copied().filter(|v| *v > 0.0).sum();
    spec.data
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let value = ds.data.get(i).copied().unwrap_or(0.0);
            let percent = if total > 0.0 {
                value.max(0.0) * 100.0 / total
            } else {
                0.0
            };
            ChartPoint {
                label: label.clone(),
                value,
                percent,
                color: ds
                    .background_color
                    .as_ref()
                    .and_then(|c| c.at(i))
                    .map(str::to_string),
            }
        })
        .collect()
}

/// What: Parse a CSS color (`#RRGGBB`, `#RGB` or `rgba(r, g, b, a)`) into RGB.
///
/// Output:
/// - `None` for anything else.
#[must_use]
pub fn parse_css_color(s: &str) -> Option<(u8, u8, u8)> {
    let t = s.trim();
    if let Some(hex) = t.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        return match hex.len() {
            6 => Some((
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            3 => {
                let mut it = hex.chars().map(|c| c.to_digit(16));
                let r = u8::try_from(it.next()??).ok()?;
                let g = u8::try_from(it.next()??).ok()?;
                let b = u8::try_from(it.next()??).ok()?;
                Some((r * 17, g * 17, b * 17))
            }
            _ => None,
        };
    }
    let inner = t
        .strip_prefix("rgba(")
        .or_else(|| t.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let r = parts.next()?.parse::<u8>().ok()?;
    let g = parts.next()?.parse::<u8>().ok()?;
    let b = parts.next()?.parse::<u8>().ok()?;
    Some((r, g, b))
}
