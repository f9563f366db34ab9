//! # calendar-engine
//!
//! Calendar arithmetic and human-readable relative time.
//!
//! Pure functions over explicit inputs: date ranges with boundary trimming
//! and period stepping, relative time phrases ("3 Days ago", "next year",
//! "just now"), and week/month/year boundary helpers with ISO 8601 week
//! numbering. Nothing here performs I/O; the only clock reads are in the
//! convenience constructors that default "today" or "now".
//!
//! ## Modules
//!
//! - [`calendar`] — Week/month/year boundaries, week-of-year and ISO week numbers
//! - [`range`] — `RangeSettings` and `RangeBuilder`: inclusive date sequences
//! - [`relative`] — Relative time magnitude, unit and phrase
//! - [`error`] — Error types

pub mod calendar;
pub mod error;
pub mod range;
pub mod relative;

pub use calendar::{iso_week, parse_date, parse_datetime, week, week_of_year, WeekRule};
pub use error::CalendarError;
pub use range::{Boundary, DateSeries, Frequency, RangeBuilder, RangeSettings};
pub use relative::{
    relative_time, relative_time_from_now, relative_time_with_labels, RelativeLabels,
    RelativeTime, TimeUnit,
};
