//! marketiq binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use marketiq::{app, args, theme};

struct MarketiqTimer;

impl tracing_subscriber::fmt::time::FormatTime for MarketiqTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Fallback filter used when `RUST_LOG` is unset.
///
/// Details:
/// - Writes to `~/.config/marketiq/logs/marketiq.log`; falls back to stderr when the file
///   cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("marketiq.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(MarketiqTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Stderr keeps startup going without a log file
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(MarketiqTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    args::process_args(&cli);

    let settings = theme::load_settings(&args::resolve_settings_path(&cli));
    let options = app::RunOptions {
        store_path: args::resolve_store_path(&cli),
        settings,
        initial_query: cli.search.clone(),
    };
    tracing::info!(store = %options.store_path.display(), "marketiq starting");
    if let Err(err) = app::run(options).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("marketiq exited");
}
