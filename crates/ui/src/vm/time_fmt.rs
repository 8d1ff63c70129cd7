use chrono::{DateTime, Local, TimeZone, Utc};

/// Hour and minute of `value` in the viewer's local time.
#[must_use]
pub fn format_clock_time(value: DateTime<Utc>) -> String {
    format_clock_time_in(value, &Local)
}

#[must_use]
pub fn format_clock_time_in<Tz>(value: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    value.with_timezone(tz).format("%H:%M").to_string()
}
