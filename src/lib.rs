#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `phenyl-logger` — Decorated Console Logging
//!
//! A small console-logging helper: every emitted line carries a wall-clock
//! timestamp, the name of the calling function, and a severity level that
//! selects the destination console stream. Message templates support
//! printf-style placeholder substitution over heterogeneous argument values.
//!
//! ## Core Concepts
//!
//! ### `Logger`
//! The emitter. Holds a [`LogSink`] and the debug flag as explicit,
//! construction-time dependencies. Two operations: [`Logger::log`] runs the
//! placeholder formatter over a template, [`Logger::log_plain`] emits a
//! message verbatim. Both return `true` when a line was dispatched and
//! `false` when output is suppressed by the debug flag — that boolean never
//! signals any other condition.
//!
//! ### `Level`
//! One of four severities (`Normal`, `Info`, `Warning`, `Error`). A level
//! only chooses the output stream; it carries no other semantics and there
//! is no per-level filtering.
//!
//! ### Placeholders
//! Templates are scanned left to right for `%s %d %f %j %x %o %c %%`, each
//! consuming positional arguments from the front of the argument list.
//! Malformed or missing arguments never raise: coercion degrades to the
//! console's `undefined` / `NaN` text instead.
//!
//! ### `LogSink`
//! The seam between composing a line and writing it. [`ConsoleSink`] routes
//! by severity to stdout or stderr; tests substitute an in-memory sink.
//!
//! ## Example
//! ```no_run
//! use phenyl_logger::{log, log_plain, Level};
//!
//! fn connect(attempt: u32) {
//!     log!("attempt %d of %d", attempt, 3);
//!     log!(Level::Warning, "slow handshake: %f ms", 104.257);
//!     log_plain!(Level::Info, "connected");
//! }
//! ```

pub mod config;
pub mod format;
pub mod level;
pub mod logger;
pub mod sink;
pub mod timestamp;

mod macros;

pub use config::{LoggerConfig, DEBUG_ENV_VAR};
pub use format::{format_template, FormatOutcome};
pub use level::{Level, LevelError};
pub use logger::{default_logger, init, Logger};
pub use sink::{ConsoleSink, LogSink};
pub use timestamp::{current_date, current_time};

#[doc(hidden)]
pub mod __private {
    pub use serde_json::json;
}
