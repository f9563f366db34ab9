use anyhow::{Context, Result};
use calendar_engine::calendar::{self, WeekRule};
use calendar_engine::{
    relative_time_with_labels, Boundary, Frequency, RangeBuilder, RangeSettings, RelativeLabels,
};
use chrono::{Local, NaiveDate, NaiveDateTime, Weekday};
use serde_json::json;
use tracing::debug;

use crate::RuleArg;

impl From<RuleArg> for WeekRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::FirstDay => WeekRule::FirstDay,
            RuleArg::FirstFullWeek => WeekRule::FirstFullWeek,
            RuleArg::FirstFourDayWeek => WeekRule::FirstFourDayWeek,
        }
    }
}

/// A `--settings` object plus the individual flags that override its fields.
pub struct SettingsOverrides {
    pub json: Option<String>,
    pub periods: Option<u32>,
    pub frequency: Option<Frequency>,
    pub boundary: Option<Boundary>,
}

impl SettingsOverrides {
    fn resolve(self) -> Result<RangeSettings> {
        let mut settings = match self.json {
            Some(json) => RangeSettings::from_json(&json).context("reading --settings")?,
            None => RangeSettings::default(),
        };
        if let Some(periods) = self.periods {
            settings.periods = periods;
        }
        if let Some(frequency) = self.frequency {
            settings.frequency = frequency;
        }
        if let Some(boundary) = self.boundary {
            settings.boundary = boundary;
        }
        Ok(settings)
    }
}

pub fn range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    overrides: SettingsOverrides,
    today: Option<NaiveDate>,
    as_json: bool,
) -> Result<String> {
    let settings = overrides.resolve()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    debug!(%today, ?settings, "building range");

    let range = RangeBuilder::with_today(start, end, settings, today)
        .context("resolving date range")?;

    if as_json {
        let dates: Vec<String> = range.dates().map(|d| d.to_string()).collect();
        let value = json!({
            "start_date": range.start_date(),
            "end_date": range.end_date(),
            "settings": range.settings(),
            "dates": dates,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&value)?));
    }

    Ok(range.dates().map(|d| format!("{d}\n")).collect())
}

pub fn relative(
    target: NaiveDateTime,
    now: Option<NaiveDateTime>,
    past_label: String,
    future_label: String,
    as_json: bool,
) -> Result<String> {
    let now = now.unwrap_or_else(|| Local::now().naive_local());
    let labels = RelativeLabels::new(past_label, future_label);
    let result = relative_time_with_labels(target, now, &labels);

    if as_json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&result)?));
    }
    Ok(format!("{}\n", result.phrase))
}

pub fn week(date: NaiveDate, rule: WeekRule, first_day: Weekday) -> Result<String> {
    let value = json!({
        "date": date,
        "iso_week": calendar::iso_week(date),
        "week": calendar::week(date, rule, first_day),
        "rule": rule,
        "first_day": first_day.to_string(),
    });
    Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
}

pub fn bounds(date: NaiveDate) -> Result<String> {
    let value = json!({
        "date": date,
        "week": {
            "first": calendar::first_day_of_week(date),
            "last": calendar::last_day_of_week(date),
            "first_of_last": calendar::first_day_of_last_week(date),
            "last_of_last": calendar::last_day_of_last_week(date),
            "first_of_next": calendar::first_day_of_next_week(date),
            "last_of_next": calendar::last_day_of_next_week(date),
        },
        "month": {
            "first": calendar::first_day_of_month(date),
            "last": calendar::last_day_of_month(date),
            "first_of_last": calendar::first_day_of_last_month(date),
            "last_of_last": calendar::last_day_of_last_month(date),
            "first_of_next": calendar::first_day_of_next_month(date),
            "last_of_next": calendar::last_day_of_next_month(date),
        },
        "year": {
            "first": calendar::first_day_of_year(date),
            "last": calendar::last_day_of_year(date),
            "first_of_last": calendar::first_day_of_last_year(date),
            "last_of_last": calendar::last_day_of_last_year(date),
            "first_of_next": calendar::first_day_of_next_year(date),
            "last_of_next": calendar::last_day_of_next_year(date),
        },
    });
    Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
}
