//! Severity levels and the integer codes the console API recognizes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a log line.
///
/// A level selects the destination console stream and nothing else: there
/// is no per-level filtering, and the numeric codes exist only because the
/// console convention lets a leading integer argument (0–3) pick the
/// severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Default severity, routed to standard output.
    #[default]
    Normal = 0,
    /// Informational, routed to the console's info stream (standard output).
    Info = 1,
    /// Warning, routed to standard error.
    Warning = 2,
    /// Error, routed to standard error.
    Error = 3,
}

/// Errors that can occur while parsing a severity level.
#[derive(Debug, Error)]
pub enum LevelError {
    /// The integer code was outside the recognized 0–3 range.
    #[error("Unrecognized level code: {0}")]
    UnknownCode(i64),
    /// The name did not match any level.
    #[error("Unrecognized level name: {0}")]
    UnknownName(String),
}

impl Level {
    /// Map one of the recognized integer codes (0–3) to a level.
    ///
    /// Anything outside the range returns `None`; emitters treat that as
    /// [`Level::Normal`] routing rather than an error.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Normal),
            1 => Some(Self::Info),
            2 => Some(Self::Warning),
            3 => Some(Self::Error),
            _ => None,
        }
    }

    /// The integer code for this level.
    pub fn code(self) -> i64 { self as i64 }

    /// Lowercase name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl TryFrom<i64> for Level {
    type Error = LevelError;

    fn try_from(code: i64) -> Result<Self, LevelError> {
        Self::from_code(code).ok_or(LevelError::UnknownCode(code))
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("normal") || s.eq_ignore_ascii_case("log") {
            Ok(Self::Normal)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("warning") || s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warning)
        } else if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else {
            Err(LevelError::UnknownName(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Level::from_code(0), Some(Level::Normal));
        assert_eq!(Level::from_code(1), Some(Level::Info));
        assert_eq!(Level::from_code(2), Some(Level::Warning));
        assert_eq!(Level::from_code(3), Some(Level::Error));
        assert_eq!(Level::from_code(4), None);
        assert_eq!(Level::from_code(-1), None);
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(Level::default(), Level::Normal);
    }

    #[test]
    fn test_code_roundtrip() {
        for level in [Level::Normal, Level::Info, Level::Warning, Level::Error] {
            assert_eq!(Level::from_code(level.code()), Some(level));
        }
    }

    #[test]
    fn test_try_from_out_of_range() {
        let result = Level::try_from(7);
        assert!(matches!(result, Err(LevelError::UnknownCode(7))));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("info".parse::<Level>().expect("parses"), Level::Info);
        assert_eq!("WARN".parse::<Level>().expect("parses"), Level::Warning);
        assert_eq!("Error".parse::<Level>().expect("parses"), Level::Error);
        assert!("verbose".parse::<Level>().is_err());
    }
}
