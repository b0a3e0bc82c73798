//! Application runtime: context wiring, terminal handling, and the event loop.

use std::path::PathBuf;

use crate::theme::Settings;

/// Services constructed once at startup.
mod context;
/// Runtime event loop and background input thread.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use context::{AppContext, SharedStore};
pub use runtime::{HEADLESS_ENV, run};

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Startup parameters for [`run`].
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Key-value store file.
    pub store_path: PathBuf,
    /// Effective settings.
    pub settings: Settings,
    /// Text to prefill the search input with.
    pub initial_query: Option<String>,
}
