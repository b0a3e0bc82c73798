//! Helpers shared by argument handling and startup.

use std::path::PathBuf;

/// What: Determine the log level from command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// Store file from `--store`, or the default under the config directory.
#[must_use]
pub fn resolve_store_path(args: &crate::args::Args) -> PathBuf {
    args.store.clone().unwrap_or_else(crate::theme::store_path)
}

/// Settings file from `--config`, or the default under the config directory.
#[must_use]
pub fn resolve_settings_path(args: &crate::args::Args) -> PathBuf {
    args.config.clone().unwrap_or_else(crate::theme::settings_path)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::args::Args;

    #[test]
    /// What: `--verbose` wins over `--log-level`; explicit paths are used verbatim.
    fn verbose_and_explicit_paths() {
        let args = Args::parse_from([
            "marketiq",
            "--log-level",
            "warn",
            "--verbose",
            "--store",
            "s.json",
            "--config",
            "c.conf",
        ]);
        assert_eq!(determine_log_level(&args), "debug");
        assert_eq!(resolve_store_path(&args), PathBuf::from("s.json"));
        assert_eq!(resolve_settings_path(&args), PathBuf::from("c.conf"));

        let quiet = Args::parse_from(["marketiq", "--log-level", "warn"]);
        assert_eq!(determine_log_level(&quiet), "warn");
    }
}
