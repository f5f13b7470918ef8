//! Relative ages for posts and comments, shared by the desktop cards and
//! the CLI.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// "just now", "5m ago", "3h ago", "2d ago", then a short date once it is a
/// week old. Future timestamps read as "just now".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    match seconds {
        s if s < MINUTE => "just now".to_string(),
        s if s < HOUR => format!("{}m ago", s / MINUTE),
        s if s < DAY => format!("{}h ago", s / HOUR),
        s if s < WEEK => format!("{}d ago", s / DAY),
        _ => short_date(then),
    }
}

/// "Mar 5, 2025"
pub fn short_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = now();
        assert_eq!(time_ago(now - Duration::seconds(59), now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(time_ago(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(time_ago(now - Duration::hours(3), now), "3h ago");
        assert_eq!(time_ago(now - Duration::days(6), now), "6d ago");
        assert_eq!(time_ago(now - Duration::days(7), now), "Mar 13, 2025");
    }

    #[test]
    fn test_time_ago_future_is_just_now() {
        let now = now();
        assert_eq!(time_ago(now + Duration::hours(2), now), "just now");
    }

    #[test]
    fn test_short_date() {
        let date = Utc.with_ymd_and_hms(2024, 11, 2, 8, 30, 0).unwrap();
        assert_eq!(short_date(date), "Nov 2, 2024");
    }
}
