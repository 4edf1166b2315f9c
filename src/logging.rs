//! Diagnostic logging bootstrap.
//!
//! The library only emits through the `log` facade. The binary installs a
//! `flexi_logger` backend writing to stderr, once per process.

use crate::errors::{AppError, AppResult};
use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

const SUPPORTED_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: String,
    _logger: LoggerHandle,
}

/// Start the stderr logger at `level`.
///
/// Calling again with the same level is a no-op; a different level is
/// rejected because the backend is already running.
pub fn init_logging(level: &str) -> AppResult<()> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.level == level {
            return Ok(());
        }
        return Err(AppError::Logging(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        )));
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> AppResult<LoggingState> {
        let logger = Logger::try_with_str(&level)
            .map_err(|e| AppError::Logging(e.to_string()))?
            .log_to_stderr()
            .start()
            .map_err(|e| AppError::Logging(e.to_string()))?;

        Ok(LoggingState {
            level: level.clone(),
            _logger: logger,
        })
    })?;

    log::debug!("logging initialized at level {}", state.level);
    Ok(())
}

fn normalize_level(level: &str) -> AppResult<String> {
    let lower = level.trim().to_lowercase();
    if SUPPORTED_LEVELS.contains(&lower.as_str()) {
        Ok(lower)
    } else {
        Err(AppError::Logging(format!(
            "unsupported log level `{level}` (expected one of: {})",
            SUPPORTED_LEVELS.join(", ")
        )))
    }
}
