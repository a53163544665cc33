//! Runtime configuration for the hosting process.
//!
//! # Responsibility
//! - Normalize logging inputs (level + directory) from callers or env vars.
//!
//! # Invariants
//! - Levels are normalized to lowercase `trace|debug|info|warn|error`.
//! - Log directories must be absolute.
//! - Logging stays disabled unless a directory is configured.

use std::path::{Path, PathBuf};

/// Env var holding the log level.
pub const LOG_LEVEL_ENV: &str = "ROLLCALL_LOG_LEVEL";
/// Env var holding the absolute log directory. Unset means no file logging.
pub const LOG_DIR_ENV: &str = "ROLLCALL_LOG_DIR";

/// Validated logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: &'static str,
    pub log_dir: PathBuf,
}

impl LogConfig {
    /// Validates caller-provided level and directory.
    ///
    /// # Errors
    /// - Unsupported level.
    /// - Empty or relative directory.
    pub fn new(level: &str, log_dir: &str) -> Result<Self, String> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: normalize_log_dir(log_dir)?,
        })
    }

    /// Reads `ROLLCALL_LOG_LEVEL` / `ROLLCALL_LOG_DIR` from the process env.
    ///
    /// Returns `Ok(None)` when no directory is configured.
    pub fn from_env() -> Result<Option<Self>, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<Self>, String> {
        // Why: a level without a directory is inert, so only a directory opts in.
        let Some(log_dir) = lookup(LOG_DIR_ENV).filter(|value| !value.trim().is_empty()) else {
            return Ok(None);
        };
        let level = lookup(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());
        Self::new(&level, &log_dir).map(Some)
    }
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn normalize_level(level: &str) -> Result<&'static str, String> {
    let lowered = level.trim().to_ascii_lowercase();
    let wanted = if lowered == "warning" { "warn" } else { lowered.as_str() };
    LEVELS
        .iter()
        .copied()
        .find(|candidate| *candidate == wanted)
        .ok_or_else(|| {
            format!(
                "unsupported log level `{lowered}`; expected {}",
                LEVELS.join("|")
            )
        })
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}
