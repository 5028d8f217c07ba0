use std::result;

use thiserror::Error;

use crate::date::DateBound;

/// The global `Result` alias of the module.
pub type Result<T> = result::Result<T, Error>;

/// The global `Error` enum of the module.
#[derive(Debug, Error)]
pub enum Error {
    /// The date text is malformed, or it names a day that does not
    /// exist in the local timezone. In zones with daylight saving
    /// time, a real calendar day whose midnight falls in a skipped
    /// hour cannot be converted either.
    #[error("cannot convert date `{1}`, please make sure it follows the format month/day/year")]
    DateConversionError(#[source] crate::date::Error, String),
    #[error("cannot set date range: start date and end date must be filled together")]
    MissingStartDateError,
    #[error("cannot verify deletion conditions: at least one condition must be filled")]
    EmptyConditionsError,
    #[error("cannot verify deletion conditions: date range is missing its {0} date")]
    IncompleteDateRangeError(DateBound),
}
