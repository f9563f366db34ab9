mod commands;

use anyhow::Result;
use calendar_engine::{parse_date, parse_datetime, Boundary, Frequency};
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calendar", version, about)]
/// Calendar date ranges, relative time phrases and week numbers
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every date of an inclusive range
    ///
    /// With both --start and --end only --boundary applies; period stepping
    /// is used when either bound is omitted.
    Range {
        /// First date of the raw interval [YYYY-MM-DD], defaults to today
        #[arg(short, long, value_parser = parse_date)]
        start: Option<NaiveDate>,
        /// Last date of the raw interval [YYYY-MM-DD], defaults to the start
        #[arg(short, long, value_parser = parse_date)]
        end: Option<NaiveDate>,
        /// Settings object, e.g. '{"periods": 2, "frequency": "M", "boundary": "left"}'
        #[arg(long)]
        settings: Option<String>,
        /// Number of frequency units to step the start back
        #[arg(short, long)]
        periods: Option<u32>,
        /// Step unit [D, W, M, Y]
        #[arg(short, long)]
        frequency: Option<Frequency>,
        /// Endpoints to exclude [none, left, right, both]
        #[arg(short, long)]
        boundary: Option<Boundary>,
        /// Date used as "today" [YYYY-MM-DD], defaults to the local date
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
        /// Print the resolved range as JSON
        #[arg(long)]
        json: bool,
    },
    /// Describe a datetime relative to now, e.g. "3 Days ago"
    Relative {
        /// Target datetime [YYYY-MM-DDTHH:MM[:SS]] or date [YYYY-MM-DD]
        #[arg(value_parser = parse_datetime)]
        target: NaiveDateTime,
        /// Reference datetime, defaults to the local time
        #[arg(long, value_parser = parse_datetime)]
        now: Option<NaiveDateTime>,
        /// Suffix for past offsets
        #[arg(long, default_value = "ago")]
        past_label: String,
        /// Prefix for future offsets
        #[arg(long, default_value = "in")]
        future_label: String,
        /// Print magnitude, unit and phrase as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the ISO week and the week-of-year of a date as JSON
    Week {
        /// Date [YYYY-MM-DD]
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
        /// Rule deciding which week is week 1
        #[arg(short, long, value_enum, default_value_t = RuleArg::FirstFourDayWeek)]
        rule: RuleArg,
        /// First day of the week
        #[arg(long, value_parser = parse_weekday, default_value = "monday")]
        first_day: Weekday,
    },
    /// Print the week, month and year boundaries around a date as JSON
    Bounds {
        /// Date [YYYY-MM-DD]
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleArg {
    FirstDay,
    FirstFullWeek,
    FirstFourDayWeek,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = match cli.command {
        Command::Range {
            start,
            end,
            settings,
            periods,
            frequency,
            boundary,
            today,
            json,
        } => {
            let overrides = commands::SettingsOverrides {
                json: settings,
                periods,
                frequency,
                boundary,
            };
            commands::range(start, end, overrides, today, json)?
        }
        Command::Relative {
            target,
            now,
            past_label,
            future_label,
            json,
        } => commands::relative(target, now, past_label, future_label, json)?,
        Command::Week {
            date,
            rule,
            first_day,
        } => commands::week(date, rule.into(), first_day)?,
        Command::Bounds { date } => commands::bounds(date)?,
    };

    print!("{output}");
    Ok(())
}

/// Log to stderr so stdout stays machine-readable. `RUST_LOG` overrides the
/// default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn parse_weekday(s: &str) -> Result<Weekday, String> {
    s.parse::<Weekday>()
        .map_err(|_| format!("'{s}' is not a weekday (e.g. mon, monday)"))
}
