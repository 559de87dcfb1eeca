//! Logging bootstrap for the CLI.
//!
//! # Invariants
//! - Initialization is idempotent; later calls keep the first logger.
//! - Initialization must not panic.
//! - Library code only uses the `log` facade; this module is for binaries.

use flexi_logger::{Logger, LoggerHandle, WriteMode};
use log::debug;
use once_cell::sync::OnceCell;

const DEFAULT_LEVEL: &str = "warn";
const SUPPORTED_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts a stderr logger. `RUST_LOG` overrides `level` when set.
pub fn init_logging(level: Option<&str>) -> Result<(), String> {
    let level = normalize_level(level.unwrap_or(DEFAULT_LEVEL))?;

    LOGGER.get_or_try_init(|| -> Result<LoggerHandle, String> {
        let handle = Logger::try_with_env_or_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_stderr()
            .write_mode(WriteMode::Direct)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;
        debug!(
            "event=logging_init status=ok level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );
        Ok(handle)
    })?;

    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    let lowered = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .find(|l| **l == lowered)
        .copied()
        .ok_or_else(|| format!("unsupported log level `{level}`"))
}

#[cfg(test)]
mod tests {
    use super::normalize_level;

    #[test]
    fn normalize_level_accepts_known_levels() {
        assert_eq!(normalize_level("INFO"), Ok("info"));
        assert_eq!(normalize_level(" debug "), Ok("debug"));
    }

    #[test]
    fn normalize_level_rejects_unknown() {
        assert!(normalize_level("verbose").is_err());
    }
}
