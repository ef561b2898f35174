//! Portal application module: terminal setup and the TUI runtime.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{RunOptions, run};
