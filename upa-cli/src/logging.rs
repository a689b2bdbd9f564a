//! stderr log output for the binaries

use tracing::Level;
use upa_config::LogLevel;

/// Level to run at. `-v` raises anything quieter than `debug` to `debug`.
pub fn effective_level(configured: LogLevel, verbose: bool) -> Level {
    let level = if verbose {
        configured.max(LogLevel::Debug)
    } else {
        configured
    };
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// Install the fmt subscriber. Logs go to stderr so stdout only carries the
/// tool's own messages and reports.
pub fn init(configured: LogLevel, verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(effective_level(configured, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
