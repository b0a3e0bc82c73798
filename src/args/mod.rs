//! Command-line argument parsing and handling.

pub mod definition;
pub mod history;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, process_args};
pub use utils::{determine_log_level, resolve_settings_path, resolve_store_path};
