//! Output routing to the console streams.

use std::io::Write;

use serde_json::Value;

use crate::format::coerce_string;
use crate::level::Level;

/// Destination for decorated log lines.
///
/// The logger composes the line; the sink decides where it lands. The
/// console implementation routes by severity. Tests substitute an
/// in-memory sink to observe what would have been written.
pub trait LogSink: Send + Sync {
    /// Write one decorated line at `level`, with any leftover argument
    /// values passed through alongside it.
    fn write_line(&self, level: Level, line: &str, rest: &[Value]);
}

/// Routes lines to the process console: `Normal` and `Info` to standard
/// output, `Warning` and `Error` to standard error — mirroring the console
/// `log`/`info`/`warn`/`error` stream assignment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write_line(&self, level: Level, line: &str, rest: &[Value]) {
        let full = join_line(line, rest);
        // Write failures are absorbed: the emit boolean only ever reports
        // suppression by the debug flag.
        match level {
            Level::Normal | Level::Info => {
                let _ = writeln!(std::io::stdout(), "{}", full);
            }
            Level::Warning | Level::Error => {
                let _ = writeln!(std::io::stderr(), "{}", full);
            }
        }
    }
}

/// Append leftover values to the line, space separated, in their string
/// coercion form — the way a console prints trailing variadic context.
pub(crate) fn join_line(line: &str, rest: &[Value]) -> String {
    if rest.is_empty() {
        return line.to_string();
    }
    let mut out = String::from(line);
    for value in rest {
        out.push(' ');
        out.push_str(&coerce_string(Some(value)));
    }
    out
}
