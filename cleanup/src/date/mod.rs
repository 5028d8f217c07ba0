//! # Date
//!
//! Module dedicated to deletion condition dates. It parses the
//! `month/day/year` text typed by the operator into a [`DateTuple`],
//! then turns it into a local [`DateTime`] bounding a date range.

mod error;

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, TimeZone};
use tracing::trace;

#[doc(inline)]
pub use self::error::{Error, Result};

/// The only separator accepted between date values.
pub const SEPARATOR: char = '/';

/// The format used to display condition dates.
pub const DISPLAY_FORMAT: &str = "%m/%d/%Y";

/// A calendar date as typed by the operator.
///
/// Days are only checked against the `1..=31` range: whether the day
/// exists in the given month is only known when building the
/// instant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateTuple {
    pub month: u32,
    pub day: u32,
    pub year: i32,
}

impl DateTuple {
    pub fn new(month: u32, day: u32, year: i32) -> Self {
        Self { month, day, year }
    }
}

impl fmt::Display for DateTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

/// The bound of a date range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DateBound {
    /// The lower bound, starting at 00:00:00.
    Start,
    /// The upper bound, ending at 23:59:59.
    End,
}

impl DateBound {
    fn hms(&self) -> (u32, u32, u32) {
        match self {
            Self::Start => (0, 0, 0),
            Self::End => (23, 59, 59),
        }
    }
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Parses a `month/day/year` date string.
///
/// Whitespaces are removed before parsing. The text must contain
/// exactly 3 numeric values separated by `/`, the month must be
/// between 1 and 12, the day between 1 and 31 and the year must be
/// composed of exactly 4 characters.
pub fn parse_date_string(text: impl AsRef<str>) -> Result<DateTuple> {
    let text = text.as_ref();

    if !text.contains(SEPARATOR) {
        return Err(Error::MissingSeparatorError(text.to_owned()));
    }

    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let values: Vec<&str> = compact.split(SEPARATOR).collect();

    let count = values.len();
    if count != 3 {
        return Err(Error::InvalidValuesCountError(compact, count));
    }

    if values[2].chars().count() != 4 {
        return Err(Error::InvalidYearLengthError(compact));
    }

    let parse = |value: &str| {
        value
            .parse::<u32>()
            .map_err(|err| Error::ParseValueError(err, value.to_owned()))
    };

    let month = parse(values[0])?;
    let day = parse(values[1])?;
    let year = parse(values[2])?;

    if !(1..=12).contains(&month) {
        return Err(Error::MonthOutOfRangeError(month));
    }

    if !(1..=31).contains(&day) {
        return Err(Error::DayOutOfRangeError(day));
    }

    let date = DateTuple::new(month, day, year as i32);
    trace!("parsed date {date} from `{text}`");

    Ok(date)
}

/// Builds the local instant of the given date at the given bound.
///
/// Fails when the date does not exist in the local timezone (for
/// example `2/31/2001`, or a time skipped by a daylight saving
/// transition).
pub fn to_instant(date: DateTuple, bound: DateBound) -> Result<DateTime<Local>> {
    let (hour, min, sec) = bound.hms();

    Local
        .with_ymd_and_hms(date.year, date.month, date.day, hour, min, sec)
        .earliest()
        .ok_or(Error::BuildLocalDateTimeError(date))
}

/// Parses the given text then builds its local instant at the given
/// bound.
pub fn parse_instant(text: impl AsRef<str>, bound: DateBound) -> Result<DateTime<Local>> {
    to_instant(parse_date_string(text)?, bound)
}

/// Formats the given instant using [`DISPLAY_FORMAT`].
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    date.format(DISPLAY_FORMAT).to_string()
}

/// Transforms a [`mail_parser::DateTime`] into a fixed offset
/// [`chrono::DateTime`].
pub fn from_mail_parser_datetime(dt: &mail_parser::DateTime) -> Option<DateTime<FixedOffset>> {
    let tz_secs = (dt.tz_hour as i32) * 3600 + (dt.tz_minute as i32) * 60;
    let tz_sign = if dt.tz_before_gmt { -1 } else { 1 };

    FixedOffset::east_opt(tz_sign * tz_secs)?
        .with_ymd_and_hms(
            dt.year as i32,
            dt.month as u32,
            dt.day as u32,
            dt.hour as u32,
            dt.minute as u32,
            dt.second as u32,
        )
        .earliest()
}
