use chrono::{NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Eight consecutive digits: `20250102`
static COMPACT_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})(\d{2})(\d{2})").expect("valid compact date regex"));

/// Year, month and day with optional `-`/`_` separators: `2025-1-2`, `2025_01_02`
static FLEXIBLE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})[-_]?(\d{1,2})[-_]?(\d{1,2})").expect("valid flexible date regex")
});

/// Find a date in a filename and format it as `YYYY-MM-DD`.
///
/// Month and day are zero-padded but not range checked, `2025_13_40` yields `2025-13-40`.
pub fn parse_date_from_filename(filename: &str) -> Option<String> {
    [&*COMPACT_DATE, &*FLEXIBLE_DATE].iter().find_map(|pattern| {
        pattern.captures(filename).map(|caps| {
            format!("{}-{:0>2}-{:0>2}", &caps[1], &caps[2], &caps[3])
        })
    })
}

/// Date a report is filed under: the one in the filename, else `today`
pub fn extract_report_date(filename: &str, today: NaiveDate) -> String {
    parse_date_from_filename(filename).unwrap_or_else(|| format_date(today))
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date in UTC
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format duration for logging
pub fn format_duration(duration_ms: f64) -> String {
    if duration_ms < 1000.0 {
        format!("{:.1}ms", duration_ms)
    } else if duration_ms < 60000.0 {
        format!("{:.1}s", duration_ms / 1000.0)
    } else {
        let minutes = (duration_ms / 60000.0).floor();
        let seconds = (duration_ms % 60000.0) / 1000.0;
        format!("{}m{:.1}s", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_compact_date() {
        assert_eq!(parse_date_from_filename("NVDA_day_20250102.png").as_deref(), Some("2025-01-02"));
    }

    #[test]
    fn test_separated_dates() {
        assert_eq!(parse_date_from_filename("TSM_2025-01-02.png").as_deref(), Some("2025-01-02"));
        assert_eq!(parse_date_from_filename("TSM_2025_01_02.png").as_deref(), Some("2025-01-02"));
        assert_eq!(parse_date_from_filename("chart-2024-3-7.jpg").as_deref(), Some("2024-03-07"));
        assert_eq!(parse_date_from_filename("chart_2024_12_5.jpg").as_deref(), Some("2024-12-05"));
    }

    #[test]
    fn test_out_of_range_values_are_kept() {
        assert_eq!(parse_date_from_filename("x_2025_13_40.png").as_deref(), Some("2025-13-40"));
    }

    #[test]
    fn test_fallback_to_today() {
        assert_eq!(parse_date_from_filename("NVDA_3h.png"), None);
        assert_eq!(extract_report_date("NVDA_3h.png", fixed_today()), "2025-06-30");
        assert_eq!(extract_report_date("TSM_20240115.png", fixed_today()), "2024-01-15");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(12.34), "12.3ms");
        assert_eq!(format_duration(2500.0), "2.5s");
        assert_eq!(format_duration(90000.0), "1m30.0s");
    }
}
