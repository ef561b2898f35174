use std::env;
use std::path::{Path, PathBuf};

/// Directory name under the user's config base.
const APP_DIR: &str = "portal-desa";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/portal-desa`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and the directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// Config directory for the portal (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/portal-desa/logs" (ensured to exist)
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Location of the single-key theme preference file.
#[must_use]
pub fn preferences_path() -> PathBuf {
    config_dir().join("preferences.conf")
}

/// Location of `settings.conf`.
#[must_use]
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

#[cfg(test)]
mod tests {
    #[test]
    fn paths_config_logs_under_home() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig_home = std::env::var_os("HOME");
        let base = tempfile::tempdir().expect("tempdir");
        unsafe { std::env::set_var("HOME", base.path()) };
        let cfg = super::config_dir();
        let logs = super::logs_dir();
        assert!(cfg.ends_with("portal-desa"));
        assert!(logs.ends_with("logs"));
        assert!(logs.is_dir());
        assert!(super::preferences_path().starts_with(&cfg));
        assert!(super::settings_path().ends_with("settings.conf"));
        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
        }
    }
}
