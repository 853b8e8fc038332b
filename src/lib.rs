pub mod models;
pub mod services;
pub mod api;
pub mod cli;

use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use services::config_store::{ConfigStore, LoggingConfig};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_PREFIX: &str = "scholarAI_";
const LOGS_KEPT: usize = 30;

fn env_flag(name: &str) -> bool {
    matches!(
        std::env::var(name).as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE")
    )
}

/// Initialize logging: console on stderr, plus an optional per-session log file
pub fn init_logging(config: &LoggingConfig, verbose: bool) {
    let default_level = if verbose { "debug" } else { config.level.as_str() };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries command output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let file_enabled = config.file_logging && !env_flag("SCHOLARAI_DISABLE_FILE_LOG");
    let mut log_path: Option<PathBuf> = None;
    let file_layer = if file_enabled {
        let logs_dir = get_logs_dir(config);
        match fs::create_dir_all(&logs_dir) {
            Ok(()) => {
                let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
                let log_filename = format!("{}{}.log", LOG_FILE_PREFIX, timestamp);
                let file_appender = rolling::never(&logs_dir, &log_filename);
                let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);
                let _ = LOG_GUARD.set(file_guard);
                log_path = Some(logs_dir.join(&log_filename));

                if !env_flag("SCHOLARAI_DISABLE_LOG_CLEANUP") {
                    // Prune old session logs in the background
                    std::thread::spawn(move || cleanup_old_logs(&logs_dir, LOGS_KEPT));
                }

                Some(
                    fmt::layer()
                        .with_writer(file_writer)
                        .with_ansi(false)
                        .with_target(true)
                        .with_thread_ids(false)
                        .with_file(true)
                        .with_line_number(true),
                )
            }
            Err(e) => {
                eprintln!("Failed to create logs directory {}: {}", logs_dir.display(), e);
                None
            }
        }
    } else {
        None
    };

    // A subscriber may already be installed (tests, embedding hosts).
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    info!(version = env!("CARGO_PKG_VERSION"), "logging.initialized");
    if let Some(path) = log_path {
        info!(log_file = %path.display(), "logging.file");
    }
}

/// `SCHOLARAI_LOG_DIR`, then the configured directory, then the platform data dir
fn get_logs_dir(config: &LoggingConfig) -> PathBuf {
    if let Ok(p) = std::env::var("SCHOLARAI_LOG_DIR") {
        if !p.trim().is_empty() {
            return PathBuf::from(p);
        }
    }
    if let Some(dir) = &config.log_dir {
        return dir.clone();
    }
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("scholarAI").join("logs");
    }
    PathBuf::from("logs")
}

fn cleanup_old_logs(logs_dir: &Path, keep: usize) {
    let mut entries: Vec<_> = match fs::read_dir(logs_dir) {
        Ok(rd) => rd.filter_map(|e| e.ok()).collect(),
        Err(_) => return,
    };

    entries.retain(|e| {
        let name = e.file_name().to_string_lossy().to_string();
        name.starts_with(LOG_FILE_PREFIX) && name.ends_with(".log")
    });

    if entries.len() <= keep {
        return;
    }

    entries.sort_by_key(|e| {
        e.metadata()
            .and_then(|m| m.modified())
            .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
    });

    let remove_count = entries.len().saturating_sub(keep);
    for entry in entries.into_iter().take(remove_count) {
        let _ = fs::remove_file(entry.path());
    }
}

/// Parse arguments, load configuration, initialize logging and dispatch
pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let store = match &args.config_dir {
        Some(dir) => ConfigStore::new(dir.clone()),
        None => ConfigStore::open_default()?,
    };
    let config = store
        .load()
        .with_context(|| format!("loading {}", store.config_file().display()))?;

    init_logging(&config.logging, args.verbose);

    cli::execute(args.command, &store, &config)
}
