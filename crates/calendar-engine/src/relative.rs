//! Relative time phrases.
//!
//! Turns the offset between a target instant and a reference "now" into a
//! magnitude, a unit and a phrase such as `"3 Days ago"`, `"in 2 Weeks"`,
//! `"yesterday"`, `"next year"` or `"just now"`.
//!
//! The caller passes "now" explicitly; only [`relative_time_from_now`] reads
//! the system clock, once per call.
//!
//! # Unit selection
//!
//! The first matching rule wins. All quantities are rounded half-to-even to
//! whole numbers before they are compared, and the chosen magnitude is rounded
//! the same way.
//!
//! | rule | unit | magnitude |
//! |---|---|---|
//! | days > 365.2425 | Year | days / 365.2425 |
//! | days > 365.2425 / 12 | Month | days / (365.2425 / 12) |
//! | days ≥ 1 and days divisible by 7 | Week | days / 7 |
//! | days ≥ 1 | Day | days |
//! | hours < 24 and minutes ≥ 60 | Hour | hours |
//! | minutes < 60 and seconds ≥ 60 | Minute | minutes |
//! | seconds < 60 | Second | seconds |
//! | otherwise | Millisecond | milliseconds |

use std::fmt;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calendar::{
    first_day_of_last_year, first_day_of_next_year, last_day_of_last_year, last_day_of_next_year,
};

/// Mean Gregorian year length in days.
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Mean Gregorian month length in days.
pub const DAYS_PER_MONTH: f64 = DAYS_PER_YEAR / 12.0;

const MILLIS_PER_SECOND: f64 = 1_000.0;
const MILLIS_PER_MINUTE: f64 = 60.0 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: f64 = 60.0 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: f64 = 24.0 * MILLIS_PER_HOUR;

/// Unit of a [`RelativeTime`] magnitude. Serializes as its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Singular label, e.g. `"Day"`.
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "Millisecond",
            TimeUnit::Second => "Second",
            TimeUnit::Minute => "Minute",
            TimeUnit::Hour => "Hour",
            TimeUnit::Day => "Day",
            TimeUnit::Week => "Week",
            TimeUnit::Month => "Month",
            TimeUnit::Year => "Year",
        }
    }

    /// Label pluralized for `magnitude`: `"Day"` for 1, `"Days"` otherwise.
    pub fn quantified(&self, magnitude: f64) -> String {
        if magnitude == 1.0 {
            self.label().to_string()
        } else {
            format!("{}s", self.label())
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptor words placed around the magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelativeLabels {
    /// Suffix for past offsets (`"3 Days ago"`).
    pub past: String,
    /// Prefix for future offsets (`"in 3 Days"`).
    pub future: String,
}

impl Default for RelativeLabels {
    fn default() -> Self {
        Self {
            past: "ago".to_string(),
            future: "in".to_string(),
        }
    }
}

impl RelativeLabels {
    pub fn new(past: impl Into<String>, future: impl Into<String>) -> Self {
        Self {
            past: past.into(),
            future: future.into(),
        }
    }
}

/// A formatted relative offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelativeTime {
    /// Whole number of `unit`s between target and now; never negative.
    pub magnitude: f64,
    pub unit: TimeUnit,
    /// Human-readable text, e.g. `"in 2 Weeks"` or `"yesterday"`.
    pub phrase: String,
}

/// Describe `target` relative to `now` with the default labels (`"ago"`, `"in"`).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use calendar_engine::relative::{relative_time, TimeUnit};
///
/// let now = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap().and_hms_opt(14, 30, 0).unwrap();
/// let target = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap().and_hms_opt(14, 30, 0).unwrap();
///
/// let result = relative_time(target, now);
/// assert_eq!(result.magnitude, 3.0);
/// assert_eq!(result.unit, TimeUnit::Day);
/// assert_eq!(result.phrase, "3 Days ago");
/// ```
pub fn relative_time(target: NaiveDateTime, now: NaiveDateTime) -> RelativeTime {
    relative_time_with_labels(target, now, &RelativeLabels::default())
}

/// Describe `target` relative to the current local time.
pub fn relative_time_from_now(target: NaiveDateTime, labels: &RelativeLabels) -> RelativeTime {
    relative_time_with_labels(target, Local::now().naive_local(), labels)
}

/// Describe `target` relative to `now` with custom past/future labels.
pub fn relative_time_with_labels(
    target: NaiveDateTime,
    now: NaiveDateTime,
    labels: &RelativeLabels,
) -> RelativeTime {
    let is_future = target > now;
    let delta = (target - now).abs();
    let total_millis = (delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9)
        * MILLIS_PER_SECOND;

    let (magnitude, unit) = select_unit(total_millis);
    let magnitude = round(magnitude);
    trace!(total_millis, magnitude, unit = %unit, is_future, "selected relative time unit");

    let phrase = phrase(target, now, magnitude, unit, is_future, labels);
    RelativeTime {
        magnitude,
        unit,
        phrase,
    }
}

/// Half-to-even rounding, used for every comparison and for the final value.
fn round(value: f64) -> f64 {
    value.round_ties_even()
}

fn select_unit(total_millis: f64) -> (f64, TimeUnit) {
    let days = round(total_millis / MILLIS_PER_DAY);
    let hours = round(total_millis / MILLIS_PER_HOUR);
    let minutes = round(total_millis / MILLIS_PER_MINUTE);
    let seconds = round(total_millis / MILLIS_PER_SECOND);

    if days > DAYS_PER_YEAR {
        (days / DAYS_PER_YEAR, TimeUnit::Year)
    } else if days > DAYS_PER_MONTH {
        (days / DAYS_PER_MONTH, TimeUnit::Month)
    } else if days >= 1.0 && days % 7.0 == 0.0 {
        (days / 7.0, TimeUnit::Week)
    } else if days >= 1.0 {
        (days, TimeUnit::Day)
    } else if hours < 24.0 && minutes >= 60.0 {
        (hours, TimeUnit::Hour)
    } else if minutes < 60.0 && seconds >= 60.0 {
        (minutes, TimeUnit::Minute)
    } else if seconds < 60.0 {
        (seconds, TimeUnit::Second)
    } else {
        (total_millis, TimeUnit::Millisecond)
    }
}

fn phrase(
    target: NaiveDateTime,
    now: NaiveDateTime,
    magnitude: f64,
    unit: TimeUnit,
    is_future: bool,
    labels: &RelativeLabels,
) -> String {
    if magnitude == 1.0 && unit == TimeUnit::Day {
        let word = if is_future { "tomorrow" } else { "yesterday" };
        return word.to_string();
    }

    if magnitude == 0.0 && unit == TimeUnit::Second {
        return "just now".to_string();
    }

    if magnitude == 1.0 && unit == TimeUnit::Year {
        let (day, today) = (target.date(), now.date());
        if first_day_of_next_year(today) <= day && day <= last_day_of_next_year(today) {
            return "next year".to_string();
        }
        if first_day_of_last_year(today) <= day && day <= last_day_of_last_year(today) {
            return "last year".to_string();
        }
    }

    let quantified = unit.quantified(magnitude);
    if is_future {
        format!("{} {} {}", labels.future, magnitude, quantified)
    } else {
        format!("{} {} {}", magnitude, quantified, labels.past)
    }
}
