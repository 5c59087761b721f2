//! Errors reported by date construction and calendar conversion.
//!
//! Every failure is returned to the caller immediately, carrying the
//! offending value and the range it should have fallen in. Use
//! [`Error::kind`] to tell caller mistakes apart from a defective calendar
//! table.

use thiserror::Error;

use crate::date::Date;
use crate::lunisolar::Month;

/// Shorthand for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error from this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A Gregorian date falls outside the range the calendar supports.
    #[error("date {date} is outside the supported range {min}..={max}")]
    DateOutOfRange { date: Date, min: Date, max: Date },

    /// A lunar year falls outside the years covered by the calendar table.
    #[error("lunar year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// A lunar date that looks well-formed but does not exist.
    #[error("no such lunar date: year {year}, month {month}, day {day} ({reason})")]
    InvalidLunarDate {
        year: i32,
        month: Month,
        day: u32,
        reason: &'static str,
    },

    /// A day past the end of its lunar month.
    #[error("day {day} of lunar year {year}, month {month} is outside 1..={max}")]
    DayOutOfRange {
        year: i32,
        month: Month,
        day: u32,
        max: u32,
    },

    /// No era covers the requested year. `min..=max` is the year range of
    /// the nearest era, in the same numbering as `year`.
    #[error("year {year} is not covered by era {era}, which spans {min}..={max}")]
    EraOutOfRange {
        era: u32,
        year: i32,
        min: i32,
        max: i32,
    },

    /// The era number does not exist in the calendar.
    #[error("unknown era {0}")]
    UnknownEra(u32),

    /// A Gregorian year/month/day triple that is not a real date.
    #[error("invalid Gregorian date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    /// Some other argument is out of its documented range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A built-in calendar table contradicts itself.
    ///
    /// This is a defect in the static data, never a result of user input.
    #[error("corrupt calendar table: {0}")]
    DataIntegrity(String),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    DateOutOfRange,
    InvalidLunarDate,
    EraOutOfRange,
    InvalidArgument,
    DataIntegrity,
}

impl Error {
    /// Returns the kind of this error.
    ///
    /// # Example
    ///
    /// ```
    /// use kalendarilo_lunisolar::{Date, ErrorKind};
    /// use kalendarilo_lunisolar::lunisolar::taiwan;
    ///
    /// let date = Date::from_gregorian(1900, 1, 1).unwrap();
    /// let err = taiwan::calendar().to_lunar(date).unwrap_err();
    /// assert_eq!(ErrorKind::DateOutOfRange, err.kind());
    /// ```
    pub fn kind(&self) -> ErrorKind {
        use Error::*;
        match self {
            DateOutOfRange { .. } | YearOutOfRange { .. } => ErrorKind::DateOutOfRange,
            InvalidLunarDate { .. } | DayOutOfRange { .. } => ErrorKind::InvalidLunarDate,
            EraOutOfRange { .. } | UnknownEra(_) => ErrorKind::EraOutOfRange,
            InvalidDate { .. } | InvalidArgument(_) => ErrorKind::InvalidArgument,
            DataIntegrity(_) => ErrorKind::DataIntegrity,
        }
    }

    pub(crate) fn data_integrity(msg: impl Into<String>) -> Self {
        Error::DataIntegrity(msg.into())
    }
}
