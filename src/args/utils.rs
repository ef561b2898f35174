//! Shared utilities for argument processing.

use portal_desa::sources::DataSource;
use portal_desa::theme::Settings;

use crate::args::Args;

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - The verbose flag overrides `--log-level`.
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Merge CLI overrides into the settings file values.
///
/// Details:
/// - `--data-url` overrides `data_url` and always wins over any directory.
/// - `--data-dir` without `--data-url` overrides `data_dir` and also drops a
///   `data_url` from the settings file, so the given directory is used.
/// - Without either flag a settings-file URL wins over the settings-file directory.
/// - `--page-size 0` is clamped to 1.
pub fn effective_settings(args: &Args, mut settings: Settings) -> Settings {
    if let Some(dir) = &args.data_dir {
        settings.data_dir.clone_from(dir);
        if args.data_url.is_none() {
            settings.data_url = None;
        }
    }
    if let Some(url) = &args.data_url {
        settings.data_url = Some(url.clone());
    }
    if let Some(n) = args.page_size {
        settings.news_page_size = n.max(1);
    }
    settings
}

/// What: Build the data source from merged settings.
///
/// Output:
/// - The source, or the URL error message.
pub fn data_source(settings: &Settings) -> Result<DataSource, String> {
    DataSource::resolve(settings.data_dir.clone(), settings.data_url.as_deref())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    /// What: An explicit `--data-dir` beats a URL from the settings file.
    fn cli_dir_overrides_settings_url() {
        let args = Args::try_parse_from(["portal-desa", "--data-dir", "local", "--page-size", "0"])
            .expect("args");
        let file = Settings {
            data_dir: PathBuf::from("data"),
            data_url: Some("https://desa.example.id/data/".into()),
            news_page_size: 6,
        };
        let merged = effective_settings(&args, file);
        assert_eq!(merged.data_dir, PathBuf::from("local"));
        assert!(merged.data_url.is_none());
        assert_eq!(merged.news_page_size, 1);
        assert_eq!(
            data_source(&merged).expect("dir source"),
            DataSource::Dir(PathBuf::from("local"))
        );
    }

    #[test]
    /// What: Without flags a settings-file URL is used; `--data-url` beats `--data-dir`.
    fn url_precedence_without_dir_flag() {
        let file = Settings {
            data_dir: PathBuf::from("data"),
            data_url: Some("https://desa.example.id/data/".into()),
            news_page_size: 6,
        };
        let args = Args::try_parse_from(["portal-desa"]).expect("args");
        let merged = effective_settings(&args, file.clone());
        assert!(matches!(data_source(&merged), Ok(DataSource::Http(_))));

        let args = Args::try_parse_from([
            "portal-desa",
            "--data-dir",
            "local",
            "--data-url",
            "https://cdn.example.id/",
        ])
        .expect("args");
        let merged = effective_settings(&args, file);
        assert_eq!(merged.data_url.as_deref(), Some("https://cdn.example.id/"));
        assert!(matches!(data_source(&merged), Ok(DataSource::Http(_))));
    }

    #[test]
    fn verbose_forces_debug() {
        let args = Args::try_parse_from(["portal-desa", "-v", "--log-level", "warn"]).expect("args");
        assert_eq!(determine_log_level(&args), "debug");
        let args = Args::try_parse_from(["portal-desa", "--log-level", "warn"]).expect("args");
        assert_eq!(determine_log_level(&args), "warn");
    }
}
