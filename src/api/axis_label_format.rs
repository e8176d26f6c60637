use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};

use crate::core::primitives::timestamp_ms_to_datetime;

/// Label formatter for axis tick values.
pub type AxisLabelFormatter = Box<dyn Fn(f64) -> String + Send + Sync>;

/// Multi-scale UTC date label: the coarsest unit the timestamp is not
/// aligned to decides the pattern.
///
/// | first non-zero unit | example      |
/// |---------------------|--------------|
/// | millisecond         | `.250`       |
/// | second              | `:45`        |
/// | minute              | `03:15`      |
/// | hour                | `03 PM`      |
/// | day (not Sunday)    | `Tue 07`     |
/// | day (Sunday)        | `Aug 05`     |
/// | month               | `August`     |
/// | year                | `2018`       |
#[must_use]
pub fn multi_date_format(timestamp_ms: f64) -> String {
    let Some(date) = timestamp_ms_to_datetime(timestamp_ms) else {
        return String::new();
    };
    date.format(date_pattern(date)).to_string()
}

fn date_pattern(date: DateTime<Utc>) -> &'static str {
    if date.timestamp_subsec_millis() != 0 {
        ".%3f"
    } else if date.second() != 0 {
        ":%S"
    } else if date.minute() != 0 {
        "%I:%M"
    } else if date.hour() != 0 {
        "%I %p"
    } else if date.day() != 1 {
        if date.weekday() == Weekday::Sun {
            "%b %d"
        } else {
            "%a %d"
        }
    } else if date.month() != 1 {
        "%B"
    } else {
        "%Y"
    }
}

/// Y-axis label: positive whole counts only, blank otherwise.
#[must_use]
pub fn default_y_axis_label(value: f64) -> String {
    if value > 0.0 && value.fract() == 0.0 && value.is_finite() {
        format!("{value}")
    } else {
        String::new()
    }
}
