//! Light/dark mode and the persisted `theme` preference.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// Preference key holding the mode.
const THEME_KEY: &str = "theme";

/// Color mode of the portal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light background (default).
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl ThemeMode {
    /// Preference value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme mode '{other}' (expected light or dark)")),
        }
    }
}

/// What: Read the theme preference from a file.
///
/// Inputs:
/// - `path`: Preference file (`theme = dark`)
///
/// Output:
/// - Stored mode, or [`ThemeMode::Light`] when the file, key or value is missing or invalid.
#[must_use]
pub fn load_theme_mode_from(path: &Path) -> ThemeMode {
    let Ok(content) = fs::read_to_string(path) else {
        return ThemeMode::default();
    };
    content
        .lines()
        .filter(|l| !skip_comment_or_empty(l))
        .filter_map(parse_key_value)
        .find(|(k, _)| k.eq_ignore_ascii_case(THEME_KEY))
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or_default()
}

/// What: Persist the theme preference.
///
/// Inputs:
/// - `path`: Preference file; parent directories are created
/// - `mode`: Mode to store
///
/// Output:
/// - I/O error when the file cannot be written.
///
/// Details:
/// - The file holds exactly one `theme = <mode>` line.
pub fn save_theme_mode_to(path: &Path, mode: ThemeMode) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, format!("{THEME_KEY} = {mode}\n"))
}

/// Stored theme mode from the default preference file.
#[must_use]
pub fn load_theme_mode() -> ThemeMode {
    load_theme_mode_from(&super::preferences_path())
}

/// Persist `mode` to the default preference file, logging failures.
pub fn save_theme_mode(mode: ThemeMode) {
    let path = super::preferences_path();
    match save_theme_mode_to(&path, mode) {
        Ok(()) => tracing::debug!(path = %path.display(), mode = %mode, "theme preference saved"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to save theme preference"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Preference round-trips through the file and defaults to light.
    fn theme_preference_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("preferences.conf");
        assert_eq!(load_theme_mode_from(&path), ThemeMode::Light);
        save_theme_mode_to(&path, ThemeMode::Dark).expect("write preference");
        assert_eq!(load_theme_mode_from(&path), ThemeMode::Dark);
        let text = std::fs::read_to_string(&path).expect("read preference");
        assert_eq!(text, "theme = dark\n");
    }

    #[test]
    fn invalid_values_fall_back_to_light() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("preferences.conf");
        std::fs::write(&path, "# comment\ntheme = sepia\n").expect("write");
        assert_eq!(load_theme_mode_from(&path), ThemeMode::Light);
        std::fs::write(&path, "THEME = Dark\n").expect("write");
        assert_eq!(load_theme_mode_from(&path), ThemeMode::Dark);
    }

    #[test]
    fn toggle_and_parse() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!("DARK".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("blue".parse::<ThemeMode>().is_err());
    }
}
