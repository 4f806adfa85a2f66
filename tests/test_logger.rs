use std::sync::{Arc, Mutex};

use regex::Regex;
use serde_json::{json, Value};

use phenyl_logger::{Level, LogSink, Logger, LoggerConfig};

/// Records every dispatched line instead of writing to the console.
#[derive(Default, Clone)]
struct CaptureSink {
    lines: Arc<Mutex<Vec<(Level, String, Vec<Value>)>>>,
}

impl CaptureSink {
    fn lines(&self) -> Vec<(Level, String, Vec<Value>)> {
        self.lines.lock().expect("capture sink poisoned").clone()
    }
}

impl LogSink for CaptureSink {
    fn write_line(&self, level: Level, line: &str, rest: &[Value]) {
        self.lines
            .lock()
            .expect("capture sink poisoned")
            .push((level, line.to_string(), rest.to_vec()));
    }
}

fn capturing_logger(debug: bool) -> (Logger<CaptureSink>, CaptureSink) {
    let sink = CaptureSink::default();
    let logger = Logger::with_sink(sink.clone(), LoggerConfig::new(debug));
    (logger, sink)
}

#[test]
fn test_decoration_for_every_level() {
    let (logger, sink) = capturing_logger(true);
    let shape = Regex::new(r"^\[\d{2}/\d{2}/\d{4} \d{2}:\d{2}:\d{2}\] From startup\(\): all systems go$")
        .expect("valid pattern");

    for level in [Level::Normal, Level::Info, Level::Warning, Level::Error] {
        assert!(logger.log("startup", level, "all systems go", &[]));
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 4);
    for (i, level) in [Level::Normal, Level::Info, Level::Warning, Level::Error]
        .into_iter()
        .enumerate()
    {
        assert_eq!(lines[i].0, level);
        assert!(shape.is_match(&lines[i].1), "unexpected line: {}", lines[i].1);
    }
}

#[test]
fn test_formatted_emit_substitutes() {
    let (logger, sink) = capturing_logger(true);
    assert!(logger.log("worker", Level::Normal, "Value: %d", &[json!(42)]));

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].1.ends_with("From worker(): Value: 42"));
}

#[test]
fn test_leftover_arguments_pass_through() {
    let (logger, sink) = capturing_logger(true);
    assert!(logger.log("worker", Level::Info, "%s", &[json!("used"), json!(1), json!("extra")]));

    let lines = sink.lines();
    assert_eq!(lines[0].2, vec![json!(1), json!("extra")]);
}

#[test]
fn test_plain_emit_skips_substitution() {
    let (logger, sink) = capturing_logger(true);
    assert!(logger.log_plain("worker", Level::Warning, "literal %s stays"));

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].1.ends_with("From worker(): literal %s stays"));
    assert!(lines[0].2.is_empty());
}

#[test]
fn test_disabled_logger_suppresses_everything() {
    let (logger, sink) = capturing_logger(false);

    assert!(!logger.is_enabled());
    assert!(!logger.log("worker", Level::Error, "never: %s", &[json!("seen")]));
    assert!(!logger.log_plain("worker", Level::Normal, "never seen"));
    assert!(sink.lines().is_empty());
}

#[test]
fn test_enabled_logger_reports_dispatch() {
    let (logger, _sink) = capturing_logger(true);
    assert!(logger.is_enabled());
    // Malformed input still dispatches: the boolean only reports suppression.
    assert!(logger.log("worker", Level::Normal, "%d %f %x", &[]));
}
