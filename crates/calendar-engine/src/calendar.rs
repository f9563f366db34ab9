//! Stateless calendar primitives.
//!
//! Week, month and year boundary functions plus week-of-year numbering. Every
//! function takes a calendar date and returns a calendar date or an integer;
//! nothing here reads the system clock.
//!
//! Weeks always start on Monday for the boundary helpers. Week numbering is
//! configurable through [`week`] and [`WeekRule`]; [`iso_week`] gives the
//! ISO 8601 week number.
//!
//! The boundary helpers use chrono's `Days`/`Months` operators and therefore
//! panic only when the result would fall outside chrono's representable date
//! range.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

// ── Week boundaries ─────────────────────────────────────────────────────────

/// The Monday of the week containing `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use calendar_engine::calendar::first_day_of_week;
///
/// // Wednesday, February 18, 2026
/// let date = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
/// assert_eq!(first_day_of_week(date), NaiveDate::from_ymd_opt(2026, 2, 16).unwrap());
/// ```
pub fn first_day_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// The Sunday of the week containing `date`.
pub fn last_day_of_week(date: NaiveDate) -> NaiveDate {
    first_day_of_week(date) + Days::new(6)
}

pub fn first_day_of_last_week(date: NaiveDate) -> NaiveDate {
    first_day_of_week(date) - Days::new(7)
}

pub fn last_day_of_last_week(date: NaiveDate) -> NaiveDate {
    first_day_of_week(date) - Days::new(1)
}

pub fn first_day_of_next_week(date: NaiveDate) -> NaiveDate {
    last_day_of_week(date) + Days::new(1)
}

pub fn last_day_of_next_week(date: NaiveDate) -> NaiveDate {
    first_day_of_next_week(date) + Days::new(6)
}

// ── Month boundaries ────────────────────────────────────────────────────────

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// The last day of the month containing `date` (Feb 29 in leap years).
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date) + Months::new(1) - Days::new(1)
}

pub fn first_day_of_last_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date) - Months::new(1)
}

pub fn last_day_of_last_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date) - Days::new(1)
}

pub fn first_day_of_next_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date) + Months::new(1)
}

pub fn last_day_of_next_month(date: NaiveDate) -> NaiveDate {
    first_day_of_next_month(date) + Months::new(1) - Days::new(1)
}

// ── Year boundaries ─────────────────────────────────────────────────────────

/// January 1 of the year containing `date`.
pub fn first_day_of_year(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.ordinal0()))
}

/// December 31 of the year containing `date`.
pub fn last_day_of_year(date: NaiveDate) -> NaiveDate {
    first_day_of_year(date) + Months::new(12) - Days::new(1)
}

pub fn first_day_of_last_year(date: NaiveDate) -> NaiveDate {
    first_day_of_year(date) - Months::new(12)
}

pub fn last_day_of_last_year(date: NaiveDate) -> NaiveDate {
    first_day_of_year(date) - Days::new(1)
}

pub fn first_day_of_next_year(date: NaiveDate) -> NaiveDate {
    last_day_of_year(date) + Days::new(1)
}

pub fn last_day_of_next_year(date: NaiveDate) -> NaiveDate {
    first_day_of_next_year(date) + Months::new(12) - Days::new(1)
}

// ── Week numbering ──────────────────────────────────────────────────────────

/// How the first week of a year is determined for [`week`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekRule {
    /// Week 1 is the week containing January 1, however short.
    FirstDay,
    /// Week 1 begins on the first occurrence of the week-start day on or
    /// after January 1.
    FirstFullWeek,
    /// Week 1 is the first week with at least four days in the new year.
    #[default]
    FirstFourDayWeek,
}

/// Week-of-year number for `date` under the given rule and week-start day.
///
/// Days that precede week 1 of their year belong to the last week of the
/// previous year, so the result is always in `1..=54`.
pub fn week(date: NaiveDate, rule: WeekRule, first_day_of_week: Weekday) -> u32 {
    match rule {
        WeekRule::FirstDay => first_day_week_of_year(date, first_day_of_week),
        WeekRule::FirstFullWeek => full_days_week_of_year(date, first_day_of_week, 7),
        WeekRule::FirstFourDayWeek => full_days_week_of_year(date, first_day_of_week, 4),
    }
}

/// Week-of-year number with the default rule (first four-day week, Monday start).
pub fn week_of_year(date: NaiveDate) -> u32 {
    week(date, WeekRule::FirstFourDayWeek, Weekday::Mon)
}

/// ISO 8601 week number.
///
/// The first-four-day-week rule alone misnumbers the last days of December
/// when they already belong to week 1 of the next year. Shifting Monday to
/// Wednesday forward to the Thursday of the same week corrects that, since
/// ISO weeks are defined by the year their Thursday falls in.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use calendar_engine::calendar::iso_week;
///
/// assert_eq!(iso_week(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()), 52);
/// assert_eq!(iso_week(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()), 1);
/// ```
pub fn iso_week(date: NaiveDate) -> u32 {
    let date = match date.weekday() {
        Weekday::Mon | Weekday::Tue | Weekday::Wed => date + Days::new(3),
        _ => date,
    };
    week(date, WeekRule::FirstFourDayWeek, Weekday::Mon)
}

fn first_day_week_of_year(date: NaiveDate, first_day_of_week: Weekday) -> u32 {
    let day_of_year = i64::from(date.ordinal0());
    let jan1 = i64::from(date.weekday().num_days_from_sunday()) - day_of_year % 7;
    let offset = (jan1 - i64::from(first_day_of_week.num_days_from_sunday()) + 14) % 7;
    ((day_of_year + offset) / 7 + 1) as u32
}

fn full_days_week_of_year(date: NaiveDate, first_day_of_week: Weekday, full_days: i64) -> u32 {
    let day_of_year = i64::from(date.ordinal0());
    let jan1 = i64::from(date.weekday().num_days_from_sunday()) - day_of_year % 7;

    // Days from January 1 to the first week-start day of the year.
    let mut offset = (i64::from(first_day_of_week.num_days_from_sunday()) - jan1 + 14) % 7;
    if offset != 0 && offset >= full_days {
        offset -= 7;
    }

    let day = day_of_year - offset;
    if day >= 0 {
        return (day / 7 + 1) as u32;
    }

    // Before week 1: count from December 31 of the previous year.
    let dec31 = date - Days::new(u64::from(date.ordinal0()) + 1);
    full_days_week_of_year(dec31, first_day_of_week, full_days)
}

// ── Parsing helpers ─────────────────────────────────────────────────────────

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| CalendarError::InvalidDatetime(format!("'{}': {}", s, e)))
}

/// Parse an ISO 8601 local datetime (`YYYY-MM-DDTHH:MM:SS[.fff]`,
/// `YYYY-MM-DDTHH:MM`) or a bare date, which resolves to midnight.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, CalendarError> {
    let trimmed = s.trim();
    trimmed
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| parse_date(trimmed).map(|date| date.and_time(NaiveTime::MIN)))
        .map_err(|_| CalendarError::InvalidDatetime(format!("'{}'", s)))
}
