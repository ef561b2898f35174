//! Command-line argument parsing and handling.

pub mod definition;
pub mod news;
pub mod utils;
pub mod validate;

// Re-export commonly used items
pub use definition::{Args, Command};
pub use utils::{data_source, determine_log_level, effective_settings};
