//! String formatting for dates, times and table cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

/// Placeholder for an empty cell.
pub const EMPTY: &str = "-";

/// Truncate to `max_len` characters, ending with an ellipsis when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// First 8 characters of a record id.
pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}

pub fn date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Date with a short weekday, e.g. `Sat 2024-06-15`.
pub fn date_with_weekday(d: NaiveDate) -> String {
    d.format("%a %Y-%m-%d").to_string()
}

pub fn opt_date(d: Option<NaiveDate>) -> String {
    d.map(date).unwrap_or_else(|| EMPTY.to_string())
}

pub fn opt_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| EMPTY.to_string())
}

pub fn opt_datetime(dt: Option<NaiveDateTime>) -> String {
    dt.map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| EMPTY.to_string())
}

pub fn opt_text(s: Option<&str>) -> String {
    match s {
        Some(s) if !s.trim().is_empty() => single_line(s),
        _ => EMPTY.to_string(),
    }
}

pub fn opt_number(n: Option<f64>) -> String {
    n.map(|n| n.to_string()).unwrap_or_else(|| EMPTY.to_string())
}

/// Creation instant in the user's zone.
pub fn timestamp<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%Y-%m-%d %H:%M %Z").to_string()
}

/// Format bytes as human-readable size.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Replace newlines with spaces.
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}
