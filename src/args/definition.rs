//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

/// marketiq - Terminal search prompt with debounced suggestions and search history
#[derive(Parser, Debug)]
#[command(name = "marketiq")]
#[command(version)]
#[command(
    about = "Terminal search prompt with debounced suggestions and search history",
    long_about = None
)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Key-value store file (default: ~/.config/marketiq/storage.json)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Settings file (default: ~/.config/marketiq/settings.conf)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Prefill the search input with a query
    #[arg(short, long)]
    pub search: Option<String>,

    /// Print the saved search history (most recent first) and exit
    #[arg(long)]
    pub history: bool,

    /// Clear the saved search history and exit
    #[arg(long)]
    pub clear_history: bool,
}

/// What: Handle one-shot CLI modes before the TUI starts.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Returns normally when the TUI should start; one-shot modes exit the process.
pub fn process_args(args: &Args) {
    let store_path = super::utils::resolve_store_path(args);
    if args.clear_history {
        super::history::handle_clear_history(&store_path);
    }
    if args.history {
        super::history::handle_print_history(&store_path);
    }
}
