//! Caller-facing macros over the default logger.
//!
//! The macros exist for two reasons: they capture the enclosing function's
//! name at compile time (the decorated line's `From <caller>():` segment),
//! and they convert heterogeneous arguments into JSON values for the
//! placeholder formatter.

/// Expands to the enclosing function's name as a `&'static str`.
///
/// Compile-time capture: the name is derived from the type of a local item,
/// so there is no runtime stack inspection. Inside a closure the name of
/// the closure's enclosing scope is reported.
#[macro_export]
macro_rules! caller_name {
    () => {{
        fn here() {}
        fn name_of<T>(_: T) -> &'static str { ::std::any::type_name::<T>() }
        let full = name_of(here);
        let full = full.strip_suffix("::here").unwrap_or(full);
        full.rsplit("::").next().unwrap_or(full)
    }};
}

/// Formatted emit through the [default logger](crate::default_logger).
///
/// Takes an optional leading [`Level`](crate::Level) (defaulting to
/// `Normal`), then a template literal and positional arguments. Each
/// argument is converted to a JSON value, so strings, numbers, booleans,
/// and anything `serde_json::json!` accepts all work.
///
/// Evaluates to the emit result: `true` if a line was written, `false` if
/// suppressed by the debug flag.
///
/// ```no_run
/// use phenyl_logger::{log, Level};
///
/// fn retry(attempt: u32) {
///     log!("attempt %d", attempt);
///     log!(Level::Error, "giving up after %d attempts", attempt);
/// }
/// ```
#[macro_export]
macro_rules! log {
    ($template:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($crate::Level::Normal, $template $(, $arg)*)
    };
    ($level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::default_logger().log(
            $crate::caller_name!(),
            $level,
            $template,
            &[$($crate::__private::json!($arg)),*],
        )
    };
}

/// Plain emit through the [default logger](crate::default_logger).
///
/// Same gating and decoration as [`log!`], but the message is written
/// verbatim — no placeholder substitution. The level is an optional
/// leading argument, defaulting to `Normal`.
#[macro_export]
macro_rules! log_plain {
    ($message:literal $(,)?) => {
        $crate::log_plain!($crate::Level::Normal, $message)
    };
    ($level:expr, $message:expr $(,)?) => {
        $crate::default_logger().log_plain($crate::caller_name!(), $level, $message)
    };
    ($message:expr $(,)?) => {
        $crate::log_plain!($crate::Level::Normal, $message)
    };
}
