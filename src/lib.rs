//! Library entry for Portal Desa: news listing, data loading, theme and the
//! terminal UI, exposed for the binary and integration tests.

pub mod app;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
