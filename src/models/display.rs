//! Small display helpers shared by the card and detail surfaces.

use crate::models::entities::DayOfWeek;
use chrono::NaiveTime;

/// Format a cent amount as whole dollars with standard rounding: 16900 →
/// "$169", 5633.33 (exact per-payment) → "$56".
pub fn format_whole_dollars(cents: f64) -> String {
    format!("${}", (cents / 100.0).round() as i64)
}

/// Format a cent amount with cents shown: 16900 → "$169.00".
pub fn format_dollars(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

/// Schedule label for a session slot, e.g. "Monday 4:00 PM".
pub fn schedule_label(day: DayOfWeek, start_time: NaiveTime) -> String {
    format!("{} {}", day.label(), start_time.format("%-I:%M %p"))
}
