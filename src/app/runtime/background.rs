//! Background workers: data load, terminal input thread and UI tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::{DataSource, PortalData, load_portal_data};

/// Interval of the UI tick driving toast expiry.
const TICK_INTERVAL: Duration = Duration::from_millis(250);
/// Poll timeout of the input thread between cancellation checks.
const EVENT_POLL: Duration = Duration::from_millis(50);

/// Channels connecting the workers to the event loop.
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Loaded portal data (sent once).
    pub data_tx: mpsc::UnboundedSender<PortalData>,
    /// Receiver side of `data_tx`.
    pub data_rx: mpsc::UnboundedReceiver<PortalData>,
    /// Periodic tick.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiver side of `tick_tx`.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    /// Set on exit so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
}

impl Default for Channels {
    fn default() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (data_tx, data_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            data_tx,
            data_rx,
            tick_tx,
            tick_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// What: Load every portal document off the event loop.
///
/// Details:
/// - Sends exactly one [`PortalData`]; failed documents already fell back.
pub fn spawn_data_loader(source: DataSource, data_tx: mpsc::UnboundedSender<PortalData>) {
    tokio::spawn(async move {
        let data = load_portal_data(&source).await;
        if data_tx.send(data).is_err() {
            tracing::debug!("event loop gone before portal data arrived");
        }
    });
}

/// Spawn the tick worker.
pub fn spawn_tick(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Read terminal events on a dedicated thread.
///
/// Inputs:
/// - `headless`: Skip the thread entirely (no terminal attached)
/// - `event_tx`: Where events go
/// - `cancelled`: Stop flag checked between polls
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(EVENT_POLL) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "terminal read failed"),
                },
                Ok(false) => {}
                Err(e) => tracing::debug!(error = %e, "terminal poll failed"),
            }
        }
    });
}
