use std::{num::ParseIntError, result};

use thiserror::Error;

use super::DateTuple;

/// The global `Result` alias of the module.
pub type Result<T> = result::Result<T, Error>;

/// The global `Error` enum of the module.
///
/// Every variant but [`Error::BuildLocalDateTimeError`] means that
/// the date text does not follow the `month/day/year` format.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot parse date `{0}`: missing `/` separator")]
    MissingSeparatorError(String),
    #[error("cannot parse date `{0}`: expected 3 values (month/day/year), got {1}")]
    InvalidValuesCountError(String, usize),
    #[error("cannot parse date `{0}`: year must contain 4 digits")]
    InvalidYearLengthError(String),
    #[error("cannot parse date value `{1}`")]
    ParseValueError(#[source] ParseIntError, String),
    #[error("cannot parse date: month {0} is not between 1 and 12")]
    MonthOutOfRangeError(u32),
    #[error("cannot parse date: day {0} is not between 1 and 31")]
    DayOutOfRangeError(u32),
    #[error("cannot build local date time from {0}")]
    BuildLocalDateTimeError(DateTuple),
}
