//! Wall-clock timestamp strings for log line decoration.

use chrono::{DateTime, Local};

/// Current date as `MM/DD/YYYY`, zero-padded, from the local wall clock.
pub fn current_date() -> String { format_date(&Local::now()) }

/// Current time as `HH:MM:SS`, zero-padded, 24-hour clock.
pub fn current_time() -> String { format_time(&Local::now()) }

/// The `[MM/DD/YYYY HH:MM:SS]` bracket that opens every decorated line.
///
/// Date and time are read from the same instant so the bracket can never
/// straddle a second boundary.
pub(crate) fn timestamp_bracket() -> String {
    let now = Local::now();
    format!("[{} {}]", format_date(&now), format_time(&now))
}

fn format_date(at: &DateTime<Local>) -> String { at.format("%m/%d/%Y").to_string() }

fn format_time(at: &DateTime<Local>) -> String { at.format("%H:%M:%S").to_string() }

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_instant() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 7, 4, 5, 9).single().expect("valid local time")
    }

    #[test]
    fn test_date_is_zero_padded() {
        assert_eq!(format_date(&fixed_instant()), "03/07/2026");
    }

    #[test]
    fn test_time_is_zero_padded() {
        assert_eq!(format_time(&fixed_instant()), "04:05:09");
    }

    #[test]
    fn test_current_date_shape() {
        let date = current_date();
        let parts: Vec<&str> = date.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 2);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 4);
    }

    #[test]
    fn test_current_time_shape() {
        let time = current_time();
        let parts: Vec<&str> = time.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.len() == 2));
    }
}
