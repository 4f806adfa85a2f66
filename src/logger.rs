//! The two emit operations and the process-wide default logger.

use std::sync::OnceLock;

use serde_json::Value;

use crate::config::LoggerConfig;
use crate::format::format_template;
use crate::level::Level;
use crate::sink::{ConsoleSink, LogSink};
use crate::timestamp::timestamp_bracket;

/// Console logger: decorates messages with a timestamp and the calling
/// function's name, then routes them by severity.
///
/// The debug flag and the sink are injected at construction and immutable
/// afterwards. Each emit is stateless and terminal: no call influences a
/// later call.
pub struct Logger<S: LogSink = ConsoleSink> {
    sink: S,
    debug: bool,
}

impl Logger<ConsoleSink> {
    /// Logger writing to the process console.
    pub fn new(config: LoggerConfig) -> Self { Self::with_sink(ConsoleSink, config) }
}

impl<S: LogSink> Logger<S> {
    /// Logger writing to a custom sink.
    pub fn with_sink(sink: S, config: LoggerConfig) -> Self {
        Self { sink, debug: config.debug }
    }

    /// Whether emits are enabled.
    pub fn is_enabled(&self) -> bool { self.debug }

    /// Formatted emit: substitute placeholders in `template`, decorate, and
    /// dispatch.
    ///
    /// The composed line is
    /// `[MM/DD/YYYY HH:MM:SS] From <caller>(): <formatted message>`.
    /// Arguments the placeholders did not consume are passed to the sink
    /// alongside the line as trailing context.
    ///
    /// # Arguments
    ///
    /// * `caller` - Name of the invoking function; the [`log!`](crate::log)
    ///   macro captures this at compile time
    /// * `level` - Severity selecting the output stream
    /// * `template` - Message text with zero or more placeholders
    /// * `args` - Ordered positional values, consumed left to right
    ///
    /// # Returns
    ///
    /// `true` if a line was dispatched, `false` only when output is
    /// suppressed by the debug flag. Malformed input never fails the emit.
    pub fn log(&self, caller: &str, level: Level, template: &str, args: &[Value]) -> bool {
        if !self.debug {
            return false;
        }
        let outcome = format_template(template, args);
        let line = decorate(caller, &outcome.rendered);
        self.sink.write_line(level, &line, &outcome.rest);
        true
    }

    /// Plain emit: same gating and decoration as [`Logger::log`], but the
    /// message is written verbatim with no placeholder substitution and no
    /// trailing context.
    pub fn log_plain(&self, caller: &str, level: Level, message: &str) -> bool {
        if !self.debug {
            return false;
        }
        let line = decorate(caller, message);
        self.sink.write_line(level, &line, &[]);
        true
    }
}

fn decorate(caller: &str, message: &str) -> String {
    format!("{} From {}(): {}", timestamp_bracket(), caller, message)
}

static DEFAULT: OnceLock<Logger<ConsoleSink>> = OnceLock::new();

/// Initialize the process-wide default logger used by the macros.
///
/// The first initialization wins and the logger is immutable afterwards;
/// later calls are ignored.
pub fn init(config: LoggerConfig) {
    let _ = DEFAULT.set(Logger::new(config));
}

/// The process-wide default logger.
///
/// If [`init`] was never called, the first use builds one from
/// [`LoggerConfig::from_env`].
pub fn default_logger() -> &'static Logger<ConsoleSink> {
    DEFAULT.get_or_init(|| Logger::new(LoggerConfig::from_env()))
}
