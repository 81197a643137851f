use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

/// Same layout as C's `asctime`, trailing newline included.
const ASCTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y\n";

/// Renders a date-time the way `asctime` does, e.g. `"Wed Apr  7 09:05:03 2021\n"`.
pub fn asctime<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format(ASCTIME_FORMAT).to_string()
}

/// Current local time in `asctime` form.
pub fn current_date_string() -> String {
    let date = asctime(&Local::now());
    tracing::debug!(date = date.trim_end(), "read clock");
    date
}
