//! escalog - terminal size check built on the escalog diagnostics
//!
//! Loads `~/.escalog/config.toml`, sets up the trace log, then reports the
//! size of the controlling terminal. A failure is escalated as a fatal
//! diagnostic, printed by `main`, and turned into exit status 1.
//!
//! ```text
//! $ escalog
//! INFO: src/main.rs:78: escalog::query_terminal:
//!   terminal is 120x40
//! ```

use std::io::IsTerminal;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use escalog::config::Config;
use escalog::{log_fatal, log_fatal_errno, log_info, log_warn, Logger};

/// Facade for the binary; fatal diagnostics surface as `anyhow::Error`
static LOG: Logger<anyhow::Error> = Logger::new();

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    if let Err(e) = run() {
        eprint!("Exception: {}", e);
        if !e.to_string().ends_with('\n') {
            eprintln!();
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::load();
    config.apply();

    if config.trace.enabled {
        init_trace(&config)?;
    }
    tracing::info!("escalog {} starting...", VERSION);

    log_info!(
        logger: LOG,
        "escape codes {}",
        if escalog::escape_codes_enabled() { "enabled" } else { "disabled" }
    );

    query_terminal()
}

/// Initialize tracing into the configured log file
fn init_trace(config: &Config) -> anyhow::Result<()> {
    let log_path = config.trace_path();

    // Create log directory if needed
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open trace log {}", log_path.display()))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(&config.trace.level))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Report the terminal size, escalating if it cannot be queried
fn query_terminal() -> anyhow::Result<()> {
    if !std::io::stdout().is_terminal() {
        log_warn!(logger: LOG, "stdout is not a terminal, size query may fail");
    }

    match crossterm::terminal::size() {
        Ok((cols, rows)) => {
            log_info!(logger: LOG, "terminal is {}x{}", cols, rows);
            Ok(())
        }
        Err(err) => match err.raw_os_error() {
            Some(code) => {
                log_fatal_errno!(logger: LOG, errno: code, "Couldn't query the terminal size")
            }
            None => log_fatal!(logger: LOG, "Couldn't query the terminal size: {}", err),
        },
    }
}
