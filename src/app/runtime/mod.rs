use std::sync::atomic::Ordering;
use std::time::Instant;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::events::{EventOutcome, handle_event};
use crate::logic::ServiceRequest;
use crate::sources::DataSource;
use crate::state::AppState;
use crate::theme::{ThemeMode, save_theme_mode};
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;

use background::{Channels, spawn_data_loader, spawn_event_thread, spawn_tick};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Startup parameters resolved from settings and CLI flags.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Where the JSON documents come from.
    pub source: DataSource,
    /// Initial color mode.
    pub mode: ThemeMode,
    /// News cards per page.
    pub page_size: usize,
}

/// What: Create the ratatui terminal on an already prepared screen.
///
/// Details:
/// - On failure the screen is restored before the error is returned, so the
///   shell is not left in raw mode or on the alternate screen.
fn open_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    or_restore(Terminal::new(CrosstermBackend::new(std::io::stdout())), || {
        if let Err(e) = restore_terminal() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    })
}

/// Pass `res` through, running `restore` first when it is an error.
fn or_restore<T, E>(res: std::result::Result<T, E>, restore: impl FnOnce()) -> Result<T>
where
    E: std::fmt::Display + Into<Box<dyn std::error::Error + Send + Sync>>,
{
    res.map_err(|e| {
        tracing::error!(error = %e, "terminal initialization failed");
        restore();
        e.into()
    })
}

/// Log a simulated service request submission.
fn record_submission(req: &ServiceRequest) {
    tracing::info!(
        service_type = %req.service_type,
        applicant = %req.full_name,
        has_email = !req.email.is_empty(),
        message_len = req.message.len(),
        "service request submitted"
    );
}

/// What: Run the portal TUI: load data in the background, drive the event loop and
/// restore the terminal on exit.
///
/// Inputs:
/// - `opts`: Data source, theme mode and page size
///
/// Output:
/// - `Ok(())` on a clean exit; `Err` when the terminal cannot be set up.
///
/// Details:
/// - With `PORTAL_DESA_TEST_HEADLESS=1` no terminal is touched and the loop ends
///   as soon as the data has loaded.
/// - Theme changes are persisted as they happen.
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless = std::env::var("PORTAL_DESA_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(open_terminal()?)
    };

    let mut app = AppState::new(opts.mode, opts.page_size);
    let mut channels = Channels::default();
    tracing::info!(source = %opts.source, mode = %opts.mode, headless, "starting portal");

    spawn_data_loader(opts.source, channels.data_tx.clone());
    spawn_tick(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, &app))
        {
            tracing::warn!(error = %e, "draw failed");
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                match handle_event(&ev, &mut app) {
                    EventOutcome::Quit => break,
                    EventOutcome::ThemeChanged(mode) => save_theme_mode(mode),
                    EventOutcome::Submitted(req) => record_submission(&req),
                    EventOutcome::None => {}
                }
            }
            Some(data) = channels.data_rx.recv() => {
                app.apply_data(data);
                if headless {
                    break;
                }
            }
            Some(()) = channels.tick_rx.recv() => {
                let _ = app.expire_toast(Instant::now());
            }
            else => break,
        }
    }

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    tracing::info!("portal exited");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::or_restore;

    #[test]
    /// What: A failed terminal creation restores the screen; success leaves it alone.
    fn failed_init_restores_terminal() {
        let mut restored = false;
        let res = or_restore(Err::<(), _>(std::io::Error::other("no tty")), || restored = true);
        assert!(res.is_err());
        assert!(restored);

        let mut restored = false;
        let res = or_restore(Ok::<u8, std::io::Error>(7), || restored = true);
        assert_eq!(res.ok(), Some(7));
        assert!(!restored);
    }
}
