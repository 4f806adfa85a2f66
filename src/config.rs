//! Logger configuration.
//!
//! One knob: the process-wide debug flag gating all output. It is read at
//! construction time and immutable for the life of the logger.

use serde::{Deserialize, Serialize};

/// Environment variable controlling the debug flag for [`from_env`].
///
/// [`from_env`]: LoggerConfig::from_env
pub const DEBUG_ENV_VAR: &str = "PHENYL_DEBUG";

/// Configuration for a [`Logger`](crate::Logger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// When false, every emit is suppressed and returns `false`.
    pub debug: bool,
}

impl Default for LoggerConfig {
    // Logging ships enabled; production builds opt out.
    fn default() -> Self { Self { debug: true } }
}

impl LoggerConfig {
    /// Config with the debug flag set explicitly.
    pub fn new(debug: bool) -> Self { Self { debug } }

    /// Read the debug flag from `PHENYL_DEBUG`.
    ///
    /// `0`, `false`, and `off` (case-insensitive) disable logging; any other
    /// value, or an unset variable, leaves it enabled.
    pub fn from_env() -> Self {
        let debug = match std::env::var(DEBUG_ENV_VAR) {
            Ok(raw) => !matches!(raw.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off"),
            Err(_) => true,
        };
        Self { debug }
    }
}
