use std::fs;
use std::path::PathBuf;

use crate::logic::DEFAULT_PAGE_SIZE;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// Skeleton written on first run when no `settings.conf` exists.
pub const SETTINGS_SKELETON_CONTENT: &str = "# Portal Desa settings\n\
#\n\
# Format: key = value\n\
# Lines starting with #, // or ; are comments.\n\
#\n\
# Directory holding news.json, config.json, profile.json, services.json, charts.json\n\
data_dir = data\n\
#\n\
# Alternatively fetch the same files from a web server (overrides data_dir when set)\n\
# data_url = https://desa.example.id/data/\n\
#\n\
# News cards per page\n\
news_page_size = 6\n";

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Local directory with the JSON documents.
    pub data_dir: PathBuf,
    /// Base URL to fetch the JSON documents from; wins over `data_dir`.
    pub data_url: Option<String>,
    /// News cards per page, at least 1.
    pub news_page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            data_url: None,
            news_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content
///
/// Output:
/// - Settings with unknown keys ignored and invalid values left at their defaults.
///
/// Details:
/// - Keys are matched case-insensitively with `.`/`-` treated like `_`.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, val)) = parse_key_value(line) else {
            continue;
        };
        let key = raw_key.to_lowercase().replace(['.', '-', ' '], "_");
        match key.as_str() {
            "data_dir" | "data_directory" => {
                if !val.is_empty() {
                    out.data_dir = PathBuf::from(val);
                }
            }
            "data_url" | "base_url" => {
                out.data_url = if val.is_empty() { None } else { Some(val) };
            }
            "news_page_size" | "page_size" => {
                if let Ok(v) = val.parse::<usize>() {
                    out.news_page_size = v.max(1);
                }
            }
            _ => {
                tracing::debug!(key = %raw_key, "ignoring unknown setting");
            }
        }
    }
    out
}

/// What: Load settings from the config directory, writing a skeleton on first run.
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
#[must_use]
pub fn settings() -> Settings {
    let path = super::settings_path();
    if !path.exists() {
        match fs::write(&path, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default settings skeleton"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not write settings skeleton"),
        }
    }
    match fs::read_to_string(&path) {
        Ok(content) => parse_settings(&content),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "using default settings");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Parse known keys, tolerate aliases and ignore junk.
    fn parse_settings_keys_and_aliases() {
        let s = parse_settings(
            "# comment\n\
             data-dir = /srv/desa\n\
             base_url = https://desa.example.id/data/\n\
             news.page.size = 9\n\
             nonsense\n\
             unknown = 1\n",
        );
        assert_eq!(s.data_dir, PathBuf::from("/srv/desa"));
        assert_eq!(s.data_url.as_deref(), Some("https://desa.example.id/data/"));
        assert_eq!(s.news_page_size, 9);
    }

    #[test]
    fn skeleton_parses_to_defaults() {
        assert_eq!(parse_settings(SETTINGS_SKELETON_CONTENT), Settings::default());
    }

    #[test]
    fn invalid_page_size_keeps_default_and_zero_clamps() {
        assert_eq!(parse_settings("news_page_size = many").news_page_size, 6);
        assert_eq!(parse_settings("news_page_size = 0").news_page_size, 1);
    }
}
