//! Utilities for converting between Gregorian dates and East Asian lunisolar
//! calendars.
//!
//! Lunisolar calendars are driven by precomputed tables: one packed record
//! per lunar year giving its New Year's day, its leap month and the length of
//! each month, plus an era table for year numbering. See [`lunisolar`] for
//! the conversion engine and [`lunisolar::taiwan`] for the bundled Taiwan
//! calendar, which covers 1912-02-18 through 2051-02-10.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use kalendarilo_lunisolar::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(2451545, date.jdn());
//! assert_eq!("2000-01-01", date.to_string());
//! ```
//!
//! Taiwan lunisolar calendar:
//!
//! ```
//! use kalendarilo_lunisolar::Date;
//! use kalendarilo_lunisolar::lunisolar::{taiwan, LunarDate, Month::*};
//!
//! let cal = taiwan::calendar();
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(Ok(LunarDate::new(1999, Common(11), 25)), cal.to_lunar(date));
//! ```
//!
//! # Logging
//!
//! Events are emitted through [`tracing`]; install a subscriber to see them.

pub mod date;
pub mod error;
pub mod lunisolar;

pub use date::{Date, YearType};
pub use error::{Error, ErrorKind, Result};
