//! Printf-style placeholder substitution over heterogeneous argument values.
//!
//! Templates are scanned left to right for the placeholder set
//! `%s %d %f %j %x %o %c %%`. Each placeholder consumes arguments from the
//! front of the argument list through an explicit cursor; the caller's slice
//! is never mutated. Substitution never fails: missing arguments render as
//! `undefined`, unparseable numeric input as `NaN`.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde_json::Value;

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder_re() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| Regex::new(r"%[sdjfxoc%]").expect("placeholder pattern is valid"))
}

/// Result of rendering a template.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOutcome {
    /// The template with every recognized placeholder substituted.
    pub rendered: String,
    /// Arguments left over after left-to-right consumption. Emitters pass
    /// these through to the sink alongside the decorated line.
    pub rest: Vec<Value>,
}

/// Substitute placeholders in `template` with values from `args`.
///
/// Arguments are consumed strictly left to right, one per placeholder
/// (`%c` takes two, `%%` takes none). A pure function: formatting the same
/// template and arguments twice yields identical output.
///
/// # Arguments
///
/// * `template` - Message text containing zero or more placeholders
/// * `args` - Ordered positional values; unconsumed values are returned in
///   [`FormatOutcome::rest`]
pub fn format_template(template: &str, args: &[Value]) -> FormatOutcome {
    let mut cursor = args.iter();
    let rendered = placeholder_re()
        .replace_all(template, |caps: &Captures<'_>| match &caps[0] {
            "%s" | "%o" => coerce_string(cursor.next()),
            "%d" => render_number(coerce_number(cursor.next())),
            "%f" => render_fixed(cursor.next()),
            "%j" => render_json(cursor.next()),
            "%x" => render_hex(cursor.next()),
            "%c" => {
                // The style token is consumed but never rendered; the two-part
                // token is left for a console that supports inline styling.
                let _style = cursor.next();
                format!("%c{}", coerce_string(cursor.next()))
            }
            "%%" => "%".to_string(),
            other => other.to_string(),
        })
        .into_owned();
    FormatOutcome { rendered, rest: cursor.cloned().collect() }
}

/// Render a value the way the console's string coercion does.
///
/// Strings pass through verbatim (no quoting), scalars use their display
/// form, arrays and objects render as compact JSON, and an absent argument
/// renders as `undefined`.
pub(crate) fn coerce_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Numeric coercion: numbers pass through, numeric strings parse, booleans
/// map to 1/0, `null` to 0, everything else (including absence) to NaN.
fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() { 0.0 } else { trimmed.parse().unwrap_or(f64::NAN) }
        }
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Null) => 0.0,
        Some(_) => f64::NAN,
    }
}

/// Console-style number rendering: integral values drop the decimal point.
fn render_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if n.fract() == 0.0 && n.abs() < 9e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn render_fixed(value: Option<&Value>) -> String {
    let parsed = leading_float(&coerce_string(value));
    if parsed.is_infinite() {
        return if parsed > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    // {:.2} renders NaN as "NaN", which is exactly the degraded form we want.
    format!("{:.2}", parsed)
}

fn render_json(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(v) => serde_json::to_string_pretty(v).unwrap_or_else(|_| "undefined".to_string()),
    }
}

fn render_hex(value: Option<&Value>) -> String {
    match leading_int(&coerce_string(value)) {
        Some(v) if v < 0 => format!("-{:x}", v.unsigned_abs()),
        Some(v) => format!("{:x}", v),
        None => "NaN".to_string(),
    }
}

/// Parse the longest numeric prefix of `s` as a float, `parseFloat`-style.
fn leading_float(s: &str) -> f64 {
    let trimmed = s.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit() && !matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .unwrap_or(trimmed.len());
    let mut prefix = &trimmed[..end];
    while !prefix.is_empty() {
        if let Ok(parsed) = prefix.parse::<f64>() {
            return parsed;
        }
        prefix = &prefix[..prefix.len() - 1];
    }
    f64::NAN
}

/// Parse the leading base-10 integer of `s`, `parseInt`-style: an optional
/// sign, then digits, stopping at the first non-digit.
fn leading_int(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
