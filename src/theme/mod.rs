//! Theme system for the portal.
//!
//! Palettes, the persisted light/dark preference, settings parsing and the
//! config directory layout. Public re-exports keep the `crate::theme::*` API
//! short.

/// Light/dark mode and its persisted preference.
mod mode;
/// Path resolution for config directories.
mod paths;
/// Settings file parsing.
mod settings;
/// Palette definitions.
mod types;

pub use mode::{ThemeMode, load_theme_mode, load_theme_mode_from, save_theme_mode, save_theme_mode_to};
pub use paths::{config_dir, logs_dir, preferences_path, settings_path};
pub use settings::{SETTINGS_SKELETON_CONTENT, Settings, parse_settings, settings};
pub use types::{Theme, theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize filesystem-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Callers should lock the mutex to guard environment-variable or disk state changes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
