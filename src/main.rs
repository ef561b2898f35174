//! Portal Desa binary entrypoint kept minimal. The full runtime lives in `app`.

mod args;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use portal_desa::app::{self, RunOptions};
use portal_desa::theme;

use crate::args::{Args, Command};

struct PortalTimer;

impl tracing_subscriber::fmt::time::FormatTime for PortalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Details:
/// - Writes to `<config>/logs/portal-desa.log`; falls back to stderr when the
///   file cannot be opened.
/// - `RUST_LOG` wins over `level`.
fn init_logging(level: &str) {
    let filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("portal-desa.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(PortalTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(PortalTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&args::determine_log_level(&args));

    let settings = args::effective_settings(&args, theme::settings());
    let source = match args::data_source(&settings) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("portal-desa: {msg}");
            tracing::error!(error = %msg, "invalid data source");
            std::process::exit(1);
        }
    };

    let code = match &args.command {
        Some(Command::News {
            category,
            search,
            page,
        }) => {
            args::news::handle_news(
                source,
                category.as_deref(),
                search.as_deref(),
                *page,
                settings.news_page_size,
            )
            .await
        }
        Some(Command::Validate {
            field,
            value,
            required,
        }) => args::validate::handle_validate(field, value, *required),
        None => {
            let mode = args.theme.unwrap_or_else(theme::load_theme_mode);
            let opts = RunOptions {
                source,
                mode,
                page_size: settings.news_page_size,
            };
            match app::run(opts).await {
                Ok(()) => 0,
                Err(err) => {
                    tracing::error!(error = ?err, "application error");
                    eprintln!("portal-desa: {err}");
                    1
                }
            }
        }
    };
    if code != 0 {
        std::process::exit(code);
    }
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    #[test]
    fn portal_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::PortalTimer;
        let _ = t.format_time(&mut writer);
        assert!(buf.contains("-T "));
    }
}
