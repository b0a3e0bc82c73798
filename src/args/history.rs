//! One-shot history commands (`--history`, `--clear-history`).

use std::path::Path;

use crate::history::SearchHistoryStore;
use crate::store::FileStore;

/// What: Print the saved history to stdout and exit.
///
/// Inputs:
/// - `store_path`: Key-value store file.
///
/// Output:
/// - Exits the process with code 0.
pub fn handle_print_history(store_path: &Path) -> ! {
    let history = SearchHistoryStore::new(FileStore::open(store_path));
    print!("{}", format_history(&history.load()));
    std::process::exit(0);
}

/// What: Clear the saved history and exit.
///
/// Output:
/// - Exits the process with code 0.
pub fn handle_clear_history(store_path: &Path) -> ! {
    let history = SearchHistoryStore::new(FileStore::open(store_path));
    history.clear();
    println!("Search history cleared.");
    std::process::exit(0);
}

/// What: Format history entries as numbered lines.
///
/// Output:
/// - `"1. entry\n"` per entry, or a single notice line when empty.
#[must_use]
pub fn format_history(list: &[String]) -> String {
    use std::fmt::Write;

    if list.is_empty() {
        return "No saved searches.\n".to_string();
    }
    let mut out = String::new();
    for (i, entry) in list.iter().enumerate() {
        let _ = writeln!(out, "{}. {entry}", i + 1);
    }
    out
}
