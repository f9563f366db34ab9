//! Inclusive calendar date ranges.
//!
//! A [`RangeBuilder`] resolves a start and end bound (either may be omitted)
//! under a [`RangeSettings`] configuration and yields every calendar date from
//! [`RangeBuilder::start_date`] to [`RangeBuilder::end_date`] inclusive.
//!
//! Resolution happens once, at construction:
//!
//! 1. Missing bounds are defaulted: start falls back to "today", end falls back
//!    to start. An end before the start is clamped up to the start.
//! 2. When both bounds were supplied, only the caller's [`Boundary`] is kept;
//!    `periods` and `frequency` revert to their defaults.
//! 3. The boundary mode trims one day off the end (`Left`), the start
//!    (`Right`), or both.
//! 4. The start steps back by `periods` units of `frequency`. The end is never
//!    stepped.
//!
//! Trimming can leave the end before the start; the date series is then empty.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use chrono::{Days, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalendarError;

// ── Settings ────────────────────────────────────────────────────────────────

/// Unit used when stepping the start bound back by a period count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Frequency {
    #[default]
    #[serde(rename = "D", alias = "day", alias = "d")]
    Day,
    #[serde(rename = "W", alias = "week", alias = "w")]
    Week,
    #[serde(rename = "M", alias = "month", alias = "m")]
    Month,
    #[serde(rename = "Y", alias = "year", alias = "y")]
    Year,
}

impl Frequency {
    /// The short wire token (`"D"`, `"W"`, `"M"`, `"Y"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Day => "D",
            Frequency::Week => "W",
            Frequency::Month => "M",
            Frequency::Year => "Y",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" | "day" | "days" => Ok(Frequency::Day),
            "w" | "week" | "weeks" => Ok(Frequency::Week),
            "m" | "month" | "months" => Ok(Frequency::Month),
            "y" | "year" | "years" => Ok(Frequency::Year),
            _ => Err(CalendarError::InvalidSettings(format!(
                "unknown frequency '{}' (expected D, W, M or Y)",
                s.trim()
            ))),
        }
    }
}

/// Which end(s) of the raw interval to exclude before stepping.
///
/// `Left` closes the interval on the left and drops the end date, `Right`
/// closes it on the right and drops the start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    #[default]
    None,
    Left,
    Right,
    Both,
}

impl Boundary {
    pub fn as_str(&self) -> &'static str {
        match self {
            Boundary::None => "none",
            Boundary::Left => "left",
            Boundary::Right => "right",
            Boundary::Both => "both",
        }
    }

    fn trims_start(&self) -> bool {
        matches!(self, Boundary::Right | Boundary::Both)
    }

    fn trims_end(&self) -> bool {
        matches!(self, Boundary::Left | Boundary::Both)
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Boundary {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Boundary::None),
            "left" => Ok(Boundary::Left),
            "right" => Ok(Boundary::Right),
            "both" => Ok(Boundary::Both),
            _ => Err(CalendarError::InvalidSettings(format!(
                "unknown boundary '{}' (expected none, left, right or both)",
                s.trim()
            ))),
        }
    }
}

/// Period and boundary configuration for a [`RangeBuilder`].
///
/// Every field is optional when deserialized:
///
/// ```
/// use calendar_engine::range::{Boundary, Frequency, RangeSettings};
///
/// let settings = RangeSettings::from_json(r#"{"periods": 2, "frequency": "M"}"#).unwrap();
/// assert_eq!(settings.periods, 2);
/// assert_eq!(settings.frequency, Frequency::Month);
/// assert_eq!(settings.boundary, Boundary::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeSettings {
    /// Number of `frequency` units to step the start bound back.
    pub periods: u32,
    pub frequency: Frequency,
    pub boundary: Boundary,
}

impl RangeSettings {
    pub fn new(periods: u32, frequency: Frequency, boundary: Boundary) -> Self {
        Self {
            periods,
            frequency,
            boundary,
        }
    }

    /// Settings that only trim, with no period stepping.
    pub fn with_boundary(boundary: Boundary) -> Self {
        Self {
            boundary,
            ..Self::default()
        }
    }

    /// Parse a settings object such as `{"periods": 1, "frequency": "W", "boundary": "both"}`.
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        serde_json::from_str(json).map_err(|e| CalendarError::InvalidSettings(e.to_string()))
    }

    /// Step `date` back by `periods` units of `frequency`.
    ///
    /// Month and year steps keep the day of month, clamped to the length of
    /// the target month (March 31 minus one month is February 28 or 29).
    fn step_back(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let periods = self.periods;
        let stepped = match self.frequency {
            Frequency::Day => date.checked_sub_days(Days::new(u64::from(periods))),
            Frequency::Week => date.checked_sub_days(Days::new(u64::from(periods) * 7)),
            Frequency::Month => date.checked_sub_months(Months::new(periods)),
            Frequency::Year => periods
                .checked_mul(12)
                .and_then(|months| date.checked_sub_months(Months::new(months))),
        };
        stepped.ok_or_else(|| {
            CalendarError::InvalidInstant(format!(
                "{} minus {} period(s) of {} is out of range",
                date, periods, self.frequency
            ))
        })
    }
}

// ── RangeBuilder ────────────────────────────────────────────────────────────

/// A resolved, inclusive date range.
///
/// The builder holds only the final bounds, so it is `Copy` and every call to
/// [`dates`](RangeBuilder::dates) starts a fresh series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeBuilder {
    start_date: NaiveDate,
    end_date: NaiveDate,
    settings: RangeSettings,
}

impl RangeBuilder {
    /// Resolve a range, defaulting a missing start to today's local date.
    ///
    /// The local date is read once; use [`with_today`](RangeBuilder::with_today)
    /// to supply it explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidInstant`] if trimming or period
    /// stepping leaves chrono's representable date range.
    pub fn new(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        settings: RangeSettings,
    ) -> Result<Self, CalendarError> {
        Self::with_today(start, end, settings, Local::now().date_naive())
    }

    /// Resolve a range with an explicit "today" used when `start` is omitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use calendar_engine::range::{Boundary, Frequency, RangeBuilder, RangeSettings};
    ///
    /// let end = NaiveDate::from_ymd_opt(2023, 3, 31).unwrap();
    /// let today = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
    /// let settings = RangeSettings::new(1, Frequency::Week, Boundary::None);
    ///
    /// let range = RangeBuilder::with_today(None, Some(end), settings, today).unwrap();
    /// assert_eq!(range.start_date(), NaiveDate::from_ymd_opt(2023, 3, 8).unwrap());
    /// assert_eq!(range.end_date(), end);
    /// assert_eq!(range.len(), 24);
    /// ```
    pub fn with_today(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        settings: RangeSettings,
        today: NaiveDate,
    ) -> Result<Self, CalendarError> {
        let raw_start = start.unwrap_or(today);
        let raw_end = end.map_or(raw_start, |end| end.max(raw_start));

        // Two explicit bounds are only ever trimmed, never period-shifted.
        let settings = if start.is_some() && end.is_some() {
            RangeSettings::with_boundary(settings.boundary)
        } else {
            settings
        };

        let range = Self::resolve(raw_start, raw_end, settings)?;
        debug!(
            raw_start = %raw_start,
            raw_end = %raw_end,
            periods = settings.periods,
            frequency = %settings.frequency,
            boundary = %settings.boundary,
            start_date = %range.start_date,
            end_date = %range.end_date,
            "resolved date range"
        );
        Ok(range)
    }

    /// A plain inclusive range with default settings: no trimming, no stepping.
    ///
    /// Unlike [`with_today`](RangeBuilder::with_today), the bounds are taken
    /// as given, so an `end` before `start` yields an empty series.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: start,
            end_date: end,
            settings: RangeSettings::default(),
        }
    }

    fn resolve(
        raw_start: NaiveDate,
        raw_end: NaiveDate,
        settings: RangeSettings,
    ) -> Result<Self, CalendarError> {
        let boundary = settings.boundary;

        let trimmed_start = if boundary.trims_start() {
            raw_start.succ_opt().ok_or_else(|| {
                CalendarError::InvalidInstant(format!("no day after {}", raw_start))
            })?
        } else {
            raw_start
        };

        let trimmed_end = if boundary.trims_end() {
            raw_end.pred_opt().ok_or_else(|| {
                CalendarError::InvalidInstant(format!("no day before {}", raw_end))
            })?
        } else {
            raw_end
        };

        Ok(Self {
            start_date: settings.step_back(trimmed_start)?,
            end_date: trimmed_end,
            settings,
        })
    }

    /// First date of the series: the trimmed start stepped back by the period.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last date of the series: the trimmed end.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// The settings actually applied, after the explicit-bounds override.
    pub fn settings(&self) -> RangeSettings {
        self.settings
    }

    /// Number of dates in the series; zero when the end precedes the start.
    pub fn len(&self) -> usize {
        let days = (self.end_date - self.start_date).num_days();
        if days < 0 {
            0
        } else {
            days as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end_date < self.start_date
    }

    /// Every calendar date from start to end inclusive, one day apart.
    pub fn dates(&self) -> DateSeries {
        DateSeries {
            next: Some(self.start_date),
            last: self.end_date,
            remaining: self.len(),
        }
    }
}

impl IntoIterator for &RangeBuilder {
    type Item = NaiveDate;
    type IntoIter = DateSeries;

    fn into_iter(self) -> DateSeries {
        self.dates()
    }
}

// ── DateSeries ──────────────────────────────────────────────────────────────

/// Lazy iterator over consecutive dates of a [`RangeBuilder`].
#[derive(Debug, Clone)]
pub struct DateSeries {
    next: Option<NaiveDate>,
    last: NaiveDate,
    remaining: usize,
}

impl Iterator for DateSeries {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = current.succ_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for DateSeries {
    fn next_back(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.last;
        self.remaining -= 1;
        if let Some(prev) = current.pred_opt() {
            self.last = prev;
        }
        Some(current)
    }
}

impl ExactSizeIterator for DateSeries {}

impl FusedIterator for DateSeries {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn today() -> NaiveDate {
        d(2026, 2, 18)
    }

    fn build(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        settings: RangeSettings,
    ) -> RangeBuilder {
        RangeBuilder::with_today(start, end, settings, today()).unwrap()
    }

    // ── Settings tests ──────────────────────────────────────────────────

    #[test]
    fn test_settings_defaults() {
        let settings = RangeSettings::default();
        assert_eq!(settings.periods, 0);
        assert_eq!(settings.frequency, Frequency::Day);
        assert_eq!(settings.boundary, Boundary::None);
    }

    #[test]
    fn test_settings_from_json_wire_tokens() {
        let settings =
            RangeSettings::from_json(r#"{"periods": 3, "frequency": "W", "boundary": "both"}"#)
                .unwrap();
        assert_eq!(settings, RangeSettings::new(3, Frequency::Week, Boundary::Both));
    }

    #[test]
    fn test_settings_from_json_long_aliases_and_empty() {
        let settings = RangeSettings::from_json(r#"{"frequency": "year"}"#).unwrap();
        assert_eq!(settings.frequency, Frequency::Year);
        assert_eq!(RangeSettings::from_json("{}").unwrap(), RangeSettings::default());
    }

    #[test]
    fn test_settings_from_json_rejects_unknown_boundary() {
        let err = RangeSettings::from_json(r#"{"boundary": "middle"}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("Invalid settings"), "got: {err}");
    }

    #[test]
    fn test_settings_serialize_round_trip_tokens() {
        let json =
            serde_json::to_string(&RangeSettings::new(2, Frequency::Month, Boundary::Left))
                .unwrap();
        assert_eq!(json, r#"{"periods":2,"frequency":"M","boundary":"left"}"#);
    }

    #[test]
    fn test_frequency_and_boundary_from_str() {
        assert_eq!("M".parse::<Frequency>().unwrap(), Frequency::Month);
        assert_eq!("weeks".parse::<Frequency>().unwrap(), Frequency::Week);
        assert_eq!("BOTH".parse::<Boundary>().unwrap(), Boundary::Both);
        assert!("fortnight".parse::<Frequency>().is_err());
        assert!("outer".parse::<Boundary>().is_err());
    }

    // ── Bound resolution tests ──────────────────────────────────────────

    #[test]
    fn test_no_bounds_defaults_to_today() {
        let range = build(None, None, RangeSettings::default());
        assert_eq!(range.start_date(), today());
        assert_eq!(range.end_date(), today());
        assert_eq!(range.dates().collect::<Vec<_>>(), vec![today()]);
    }

    #[test]
    fn test_missing_end_defaults_to_start() {
        let range = build(Some(d(2023, 5, 1)), None, RangeSettings::default());
        assert_eq!(range.end_date(), d(2023, 5, 1));
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn test_end_before_start_is_clamped() {
        let range = build(Some(d(2023, 5, 10)), Some(d(2023, 5, 1)), RangeSettings::default());
        assert_eq!(range.start_date(), d(2023, 5, 10));
        assert_eq!(range.end_date(), d(2023, 5, 10));
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn test_end_only_before_today_is_clamped_to_today() {
        let range = build(None, Some(d(2026, 1, 1)), RangeSettings::default());
        assert_eq!(range.start_date(), today());
        assert_eq!(range.end_date(), today());
    }

    #[test]
    fn test_explicit_bounds_ignore_periods_and_frequency() {
        let settings = RangeSettings::new(5, Frequency::Year, Boundary::None);
        let range = build(Some(d(2023, 1, 1)), Some(d(2023, 1, 10)), settings);

        let dates: Vec<_> = range.dates().collect();
        assert_eq!(dates.len(), 10);
        assert_eq!(dates[0], d(2023, 1, 1));
        assert_eq!(dates[9], d(2023, 1, 10));
        assert_eq!(range.settings(), RangeSettings::default());
    }

    #[test]
    fn test_explicit_bounds_keep_boundary() {
        let settings = RangeSettings::new(5, Frequency::Week, Boundary::Both);
        let range = build(Some(d(2023, 1, 1)), Some(d(2023, 1, 10)), settings);
        assert_eq!(range.start_date(), d(2023, 1, 2));
        assert_eq!(range.end_date(), d(2023, 1, 9));
        assert_eq!(range.settings(), RangeSettings::with_boundary(Boundary::Both));
    }

    // ── Boundary trimming tests ─────────────────────────────────────────

    #[test]
    fn test_boundary_left_drops_end() {
        let range = build(
            Some(d(2023, 1, 1)),
            Some(d(2023, 1, 10)),
            RangeSettings::with_boundary(Boundary::Left),
        );
        assert_eq!(range.start_date(), d(2023, 1, 1));
        assert_eq!(range.end_date(), d(2023, 1, 9));
        assert_eq!(range.len(), 9);
    }

    #[test]
    fn test_boundary_right_drops_start() {
        let range = build(
            Some(d(2023, 1, 1)),
            Some(d(2023, 1, 10)),
            RangeSettings::with_boundary(Boundary::Right),
        );
        assert_eq!(range.start_date(), d(2023, 1, 2));
        assert_eq!(range.end_date(), d(2023, 1, 10));
        assert_eq!(range.len(), 9);
    }

    #[test]
    fn test_boundary_both_on_ten_day_span() {
        let start = Some(d(2023, 1, 1));
        let end = Some(d(2023, 1, 10));
        let plain = build(start, end, RangeSettings::default());
        let both = build(start, end, RangeSettings::with_boundary(Boundary::Both));
        assert_eq!(plain.len(), 10);
        assert_eq!(both.len(), 8);
        assert_eq!(both.dates().next(), Some(d(2023, 1, 2)));
        assert_eq!(both.dates().last(), Some(d(2023, 1, 9)));
    }

    #[test]
    fn test_boundary_left_single_day_is_empty() {
        let day = Some(d(2023, 1, 5));
        let range = build(day, day, RangeSettings::with_boundary(Boundary::Left));
        assert_eq!(range.end_date(), d(2023, 1, 4));
        assert!(range.end_date() < range.start_date());
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.dates().count(), 0);
    }

    #[test]
    fn test_boundary_both_two_day_span_inverts() {
        let range = build(
            Some(d(2023, 1, 5)),
            Some(d(2023, 1, 6)),
            RangeSettings::with_boundary(Boundary::Both),
        );
        assert_eq!(range.start_date(), d(2023, 1, 6));
        assert_eq!(range.end_date(), d(2023, 1, 5));
        assert!(range.dates().next().is_none());
    }

    // ── Period stepping tests ───────────────────────────────────────────

    #[test]
    fn test_period_days_from_today() {
        let settings = RangeSettings::new(6, Frequency::Day, Boundary::None);
        let range = build(None, None, settings);
        assert_eq!(range.start_date(), d(2026, 2, 12));
        assert_eq!(range.end_date(), today());
        assert_eq!(range.len(), 7);
    }

    #[test]
    fn test_period_weeks() {
        let settings = RangeSettings::new(2, Frequency::Week, Boundary::None);
        let range = build(Some(d(2023, 3, 15)), None, settings);
        assert_eq!(range.start_date(), d(2023, 3, 1));
        assert_eq!(range.end_date(), d(2023, 3, 15));
        assert_eq!(range.len(), 15);
    }

    #[test]
    fn test_period_months_from_month_end() {
        // Only the end is explicit; start defaults to today and end clamps up to it.
        let today = d(2023, 3, 31);
        let settings = RangeSettings::new(2, Frequency::Month, Boundary::None);
        let range =
            RangeBuilder::with_today(None, Some(d(2023, 3, 31)), settings, today).unwrap();
        assert_eq!(range.start_date(), d(2023, 1, 31));
        assert_eq!(range.end_date(), d(2023, 3, 31));
        assert_eq!(range.len(), 60);
    }

    #[test]
    fn test_period_month_clamps_to_february() {
        let settings = RangeSettings::new(1, Frequency::Month, Boundary::None);
        let range =
            RangeBuilder::with_today(None, Some(d(2023, 3, 31)), settings, d(2023, 3, 31))
                .unwrap();
        assert_eq!(range.start_date(), d(2023, 2, 28));

        let leap =
            RangeBuilder::with_today(None, Some(d(2024, 3, 31)), settings, d(2024, 3, 31))
                .unwrap();
        assert_eq!(leap.start_date(), d(2024, 2, 29));
    }

    #[test]
    fn test_period_year_clamps_leap_day() {
        let settings = RangeSettings::new(1, Frequency::Year, Boundary::None);
        let range = build(Some(d(2024, 2, 29)), None, settings);
        assert_eq!(range.start_date(), d(2023, 2, 28));
        assert_eq!(range.end_date(), d(2024, 2, 29));
        assert_eq!(range.len(), 367);
    }

    #[test]
    fn test_period_applies_after_trimming() {
        let settings = RangeSettings::new(1, Frequency::Week, Boundary::Both);
        let range = build(Some(d(2023, 3, 15)), None, settings);
        // start 15 -> 16 (right trim) -> 9 (one week back); end 15 -> 14
        assert_eq!(range.start_date(), d(2023, 3, 9));
        assert_eq!(range.end_date(), d(2023, 3, 14));
        assert_eq!(range.len(), 6);
    }

    #[test]
    fn test_period_out_of_range_is_invalid_instant() {
        let settings = RangeSettings::new(u32::MAX, Frequency::Year, Boundary::None);
        let err = RangeBuilder::with_today(Some(d(2023, 1, 1)), None, settings, today())
            .unwrap_err()
            .to_string();
        assert!(err.contains("Invalid instant"), "got: {err}");
    }

    #[test]
    fn test_trim_past_max_date_is_invalid_instant() {
        let settings = RangeSettings::with_boundary(Boundary::Right);
        let result = RangeBuilder::with_today(Some(NaiveDate::MAX), None, settings, today());
        assert!(matches!(result, Err(CalendarError::InvalidInstant(_))));
    }

    // ── Two-argument constructor tests ──────────────────────────────────

    #[test]
    fn test_between_is_plain_inclusive() {
        let range = RangeBuilder::between(d(2023, 1, 28), d(2023, 2, 2));
        let dates: Vec<_> = range.dates().collect();
        assert_eq!(
            dates,
            vec![
                d(2023, 1, 28),
                d(2023, 1, 29),
                d(2023, 1, 30),
                d(2023, 1, 31),
                d(2023, 2, 1),
                d(2023, 2, 2),
            ]
        );
    }

    #[test]
    fn test_between_reversed_is_empty() {
        let range = RangeBuilder::between(d(2023, 2, 2), d(2023, 1, 28));
        assert!(range.is_empty());
        assert_eq!(range.dates().count(), 0);
    }

    // ── DateSeries tests ────────────────────────────────────────────────

    #[test]
    fn test_dates_restartable() {
        let range = RangeBuilder::between(d(2023, 1, 1), d(2023, 1, 3));
        let first: Vec<_> = range.dates().collect();
        let second: Vec<_> = (&range).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dates_reverse_and_exact_size() {
        let range = RangeBuilder::between(d(2023, 1, 1), d(2023, 1, 4));
        let mut series = range.dates();
        assert_eq!(series.len(), 4);
        assert_eq!(series.next_back(), Some(d(2023, 1, 4)));
        assert_eq!(series.next(), Some(d(2023, 1, 1)));
        assert_eq!(series.len(), 2);
        assert_eq!(series.rev().collect::<Vec<_>>(), vec![d(2023, 1, 3), d(2023, 1, 2)]);
    }

    #[test]
    fn test_dates_at_max_date() {
        let range = RangeBuilder::between(NaiveDate::MAX, NaiveDate::MAX);
        assert_eq!(range.dates().collect::<Vec<_>>(), vec![NaiveDate::MAX]);
    }

    // ── Properties ──────────────────────────────────────────────────────

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (1950i32..2100, 1u32..=365).prop_filter_map("valid ordinal", |(y, o)| {
            NaiveDate::from_yo_opt(y, o)
        })
    }

    proptest! {
        #[test]
        fn prop_plain_range_is_consecutive(start in any_date(), span in 0u64..400) {
            let end = start + Days::new(span);
            let range = build(Some(start), Some(end), RangeSettings::default());
            let dates: Vec<_> = range.dates().collect();

            prop_assert_eq!(dates.len() as u64, span + 1);
            prop_assert_eq!(dates.first().copied(), Some(start));
            prop_assert_eq!(dates.last().copied(), Some(end));
            for pair in dates.windows(2) {
                prop_assert_eq!(pair[1], pair[0].succ_opt().unwrap());
            }
        }

        #[test]
        fn prop_boundary_both_shrinks_by_two(start in any_date(), span in 2u64..400) {
            let end = Some(start + Days::new(span));
            let plain = build(Some(start), end, RangeSettings::default());
            let both = build(Some(start), end, RangeSettings::with_boundary(Boundary::Both));
            prop_assert_eq!(both.len() + 2, plain.len());
        }

        #[test]
        fn prop_len_matches_iteration(start in any_date(), periods in 0u32..30) {
            for frequency in [Frequency::Day, Frequency::Week, Frequency::Month, Frequency::Year] {
                let settings = RangeSettings::new(periods, frequency, Boundary::Both);
                let range = build(Some(start), None, settings);
                prop_assert_eq!(range.dates().count(), range.len());
                // Right trimming moves the start forward one day before stepping back.
                prop_assert!(range.start_date() <= start.succ_opt().unwrap());
                prop_assert_eq!(range.end_date(), start.pred_opt().unwrap());
            }
        }
    }
}
