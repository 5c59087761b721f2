//! Table-driven East Asian lunisolar calendars.
//!
//! A calendar is described by a [`CalendarData`]: one packed [`YearInfo`]
//! per lunar year, an era table and the Gregorian range it supports. A
//! [`CalendarVariant`] validates that data once and then converts between
//! [`Date`]s and [`LunarDate`]s.
//!
//! Lunar year numbers are the Gregorian year in which the lunar year begins.
//! Era-relative numbering is applied only by [`CalendarVariant::year`] and
//! [`CalendarVariant::gregorian_year`].
//!
//! # Example
//!
//! ```
//! use kalendarilo_lunisolar::Date;
//! use kalendarilo_lunisolar::lunisolar::{taiwan, LunarDate, Month::*};
//!
//! let cal = taiwan::calendar();
//!
//! let date = Date::from_gregorian(2023, 3, 22).unwrap();
//! let lunar = cal.to_lunar(date).unwrap();
//! assert_eq!(LunarDate::new(2023, Leap(2), 1), lunar);
//!
//! assert_eq!(Ok(date), cal.to_solar(lunar));
//! ```

use std::fmt;

use crate::date::Date;
use crate::error::{Error, Result};

pub mod era;
pub mod taiwan;
pub mod year_info;

pub use era::{CURRENT_ERA, EraInfo};
pub use year_info::{YearInfo, YearInfoField, YearLayout};

/// Month of a lunar year. `Common` is an ordinary month, `Leap` the leap month
/// following the ordinary month of the same number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// Returns the month number, leap or not.
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// `true` for a leap month.
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Month::Common(n) => write!(f, "{n}"),
            Month::Leap(n) => write!(f, "leap {n}"),
        }
    }
}

/// A date in a lunisolar calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    /// Lunar year, numbered by the Gregorian year it begins in.
    pub year: i32,
    pub month: Month,
    /// Day of month, from 1.
    pub day: u32,
}

impl LunarDate {
    pub fn new(year: i32, month: Month, day: u32) -> Self {
        Self { year, month, day }
    }
    /// `true` if the date falls in a leap month.
    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }
}

/// Static description of a calendar variant.
///
/// `years[i]` describes lunar year `min_lunar_year + i`. Dates are Gregorian
/// `(year, month, day)` triples and both bounds are inclusive.
#[derive(Debug)]
pub struct CalendarData {
    pub name: &'static str,
    pub min_lunar_year: i32,
    pub years: &'static [YearInfo],
    pub eras: &'static [EraInfo],
    pub min_date: (i32, i32, i32),
    pub max_date: (i32, i32, i32),
}

#[derive(Debug, Clone)]
struct YearEntry {
    epoch: Date,
    layout: YearLayout,
}

/// A validated calendar, ready for conversions.
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone)]
pub struct CalendarVariant {
    data: &'static CalendarData,
    min_date: Date,
    max_date: Date,
    years: Vec<YearEntry>,
}

impl CalendarVariant {
    /// Validates `data` and builds the calendar.
    ///
    /// Fails with [`Error::DataIntegrity`] if a year record does not decode,
    /// if consecutive years do not join up day for day, if the supported
    /// range reaches outside the table, or if the era table is malformed.
    pub fn new(data: &'static CalendarData) -> Result<Self> {
        let name = data.name;
        if data.years.is_empty() {
            return Err(Error::data_integrity(format!("{name}: year table is empty")));
        }

        let mut years: Vec<YearEntry> = Vec::with_capacity(data.years.len());
        for (year, info) in (data.min_lunar_year..).zip(data.years) {
            let layout = info.decode().map_err(|e| in_table(name, year, e))?;
            let epoch = Date::from_gregorian(
                year,
                info.epoch_month.into(),
                info.epoch_day.into(),
            )
            .map_err(|e| in_table(name, year, e))?;
            if let Some(prev) = years.last() {
                let expected = prev.epoch + prev.layout.total_days() as i32;
                if expected != epoch {
                    return Err(Error::data_integrity(format!(
                        "{name} lunar year {year}: begins on {epoch}, but the previous year ends before {expected}"
                    )));
                }
            }
            years.push(YearEntry { epoch, layout });
        }

        era::validate(data.eras)
            .map_err(|e| in_table(name, data.min_lunar_year, e))?;

        let bound = |(y, m, d): (i32, i32, i32)| {
            Date::from_gregorian(y, m, d).map_err(|e| {
                Error::data_integrity(format!("{name}: supported range bound: {e}"))
            })
        };
        let min_date = bound(data.min_date)?;
        let max_date = bound(data.max_date)?;

        let (first, last) = match (years.first(), years.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(Error::data_integrity(format!("{name}: year table is empty"))),
        };
        let table_end = last.epoch + (last.layout.total_days() as i32 - 1);
        if min_date > max_date || min_date < first.epoch || max_date > table_end {
            return Err(Error::data_integrity(format!(
                "{name}: supported range {min_date}..={max_date} is not within the table {}..={table_end}",
                first.epoch
            )));
        }

        tracing::debug!(
            variant = name,
            years = years.len(),
            eras = data.eras.len(),
            %min_date,
            %max_date,
            "calendar tables validated"
        );

        Ok(Self {
            data,
            min_date,
            max_date,
            years,
        })
    }

    /// Name of the calendar.
    pub fn name(&self) -> &'static str {
        self.data.name
    }
    /// First supported Gregorian date.
    pub fn min_date(&self) -> Date {
        self.min_date
    }
    /// Last supported Gregorian date.
    pub fn max_date(&self) -> Date {
        self.max_date
    }
    pub fn min_lunar_year(&self) -> i32 {
        self.data.min_lunar_year
    }
    pub fn max_lunar_year(&self) -> i32 {
        self.data.min_lunar_year + self.years.len() as i32 - 1
    }
    /// Era numbers, oldest first.
    pub fn eras(&self) -> Vec<u32> {
        self.data.eras.iter().map(|e| e.era).collect()
    }
    /// The era table.
    pub fn era_table(&self) -> &'static [EraInfo] {
        self.data.eras
    }

    /// Converts a Gregorian date into the lunisolar calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use kalendarilo_lunisolar::Date;
    /// use kalendarilo_lunisolar::lunisolar::{taiwan, LunarDate, Month::*};
    ///
    /// let cal = taiwan::calendar();
    /// let date = Date::from_gregorian(1912, 2, 18).unwrap();
    ///
    /// assert_eq!(Ok(LunarDate::new(1912, Common(1), 1)), cal.to_lunar(date));
    /// ```
    pub fn to_lunar(&self, date: Date) -> Result<LunarDate> {
        self.check_date(date)?;
        let idx = self
            .years
            .partition_point(|y| y.epoch <= date)
            .checked_sub(1)
            .ok_or_else(|| {
                Error::data_integrity(format!("{}: no lunar year contains {date}", self.name()))
            })?;
        let entry = &self.years[idx];
        let year = self.data.min_lunar_year + idx as i32;

        let mut offset = (date - entry.epoch) as u32;
        for (pos, len) in (1..).zip(entry.layout.lengths().iter().map(|&l| u32::from(l))) {
            if offset < len {
                let month = entry.layout.month_at(pos).ok_or_else(|| {
                    Error::data_integrity(format!("lunar year {year} has no month {pos}"))
                })?;
                tracing::trace!(%date, year, %month, day = offset + 1, "converted to lunar");
                return Ok(LunarDate::new(year, month, offset + 1));
            }
            offset -= len;
        }
        Err(Error::data_integrity(format!(
            "{}: {date} is past the end of lunar year {year}",
            self.name()
        )))
    }

    /// Converts a lunar date into a Gregorian date.
    ///
    /// Fails with [`Error::InvalidLunarDate`] if the month is not in `1..=12`,
    /// if a leap month is requested that the year does not have, or if the
    /// day is beyond the end of the month.
    ///
    /// # Example
    ///
    /// ```
    /// use kalendarilo_lunisolar::{Date, ErrorKind};
    /// use kalendarilo_lunisolar::lunisolar::{taiwan, LunarDate, Month::*};
    ///
    /// let cal = taiwan::calendar();
    ///
    /// let date = cal.to_solar(LunarDate::new(1914, Leap(5), 1)).unwrap();
    /// assert_eq!("1914-06-23", date.iso_gregorian());
    ///
    /// let err = cal.to_solar(LunarDate::new(1914, Leap(4), 1)).unwrap_err();
    /// assert_eq!(ErrorKind::InvalidLunarDate, err.kind());
    /// ```
    pub fn to_solar(&self, lunar: LunarDate) -> Result<Date> {
        let LunarDate { year, month, day } = lunar;
        let entry = self.entry(year)?;
        let invalid = |reason: &'static str| Error::InvalidLunarDate {
            year,
            month,
            day,
            reason,
        };

        if !(1..=12).contains(&month.num()) {
            return Err(invalid("month not in 1..=12"));
        }
        let pos = entry
            .layout
            .position_of(month)
            .ok_or_else(|| invalid("year has no such leap month"))?;
        let len = entry
            .layout
            .month_len(pos)
            .ok_or_else(|| invalid("year has no such month"))?;
        if !(1..=len).contains(&day) {
            return Err(Error::DayOutOfRange {
                year,
                month,
                day,
                max: len,
            });
        }

        let date = entry.epoch + (entry.layout.days_before(pos) + day - 1) as i32;
        self.check_date(date)?;
        tracing::trace!(%date, year, %month, day, "converted to solar");
        Ok(date)
    }

    /// Era-relative year of the lunar year containing `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use kalendarilo_lunisolar::Date;
    /// use kalendarilo_lunisolar::lunisolar::taiwan;
    ///
    /// let cal = taiwan::calendar();
    /// // Still lunar year 1912 until New Year on 1913-02-06.
    /// let date = Date::from_gregorian(1913, 2, 5).unwrap();
    /// assert_eq!(Ok(1), cal.year(date));
    /// ```
    pub fn year(&self, date: Date) -> Result<i32> {
        let lunar = self.to_lunar(date)?;
        let info = era::info_at(self.data.eras, date)?;
        Ok(lunar.year - info.year_offset)
    }

    /// Era in effect on `date`.
    pub fn era(&self, date: Date) -> Result<u32> {
        self.check_date(date)?;
        era::era_at(self.data.eras, date)
    }

    /// Lunar year number for an era-relative year.
    ///
    /// `era` may be [`CURRENT_ERA`]. Fails if the era year is not valid in the
    /// era, or if the resulting year is outside the table.
    pub fn gregorian_year(&self, era_year: i32, era: u32) -> Result<i32> {
        let year = era::era_year_to_absolute(self.data.eras, era, era_year)?;
        self.entry(year)?;
        Ok(year)
    }

    /// Raw table record of `lunar_year`.
    pub fn year_info(&self, lunar_year: i32) -> Result<&'static YearInfo> {
        let years: &'static [YearInfo] = self.data.years;
        self.index(lunar_year).map(|i| &years[i])
    }
    /// One field of the raw table record of `lunar_year`.
    pub fn year_info_field(&self, lunar_year: i32, field: YearInfoField) -> Result<u32> {
        self.year_info(lunar_year).map(|info| info.field(field))
    }
    /// Decoded month structure of `lunar_year`.
    pub fn layout(&self, lunar_year: i32) -> Result<&YearLayout> {
        self.entry(lunar_year).map(|e| &e.layout)
    }

    /// Gregorian date of the first day of `lunar_year`.
    pub fn epoch(&self, lunar_year: i32) -> Result<Date> {
        self.entry(lunar_year).map(|e| e.epoch)
    }
    /// The ordinary month the leap month follows, if the year has one.
    pub fn leap_month(&self, lunar_year: i32) -> Result<Option<u32>> {
        self.layout(lunar_year).map(|l| l.leap_month())
    }
    pub fn is_leap_year(&self, lunar_year: i32) -> Result<bool> {
        self.leap_month(lunar_year).map(|m| m.is_some())
    }
    pub fn months_in_year(&self, lunar_year: i32) -> Result<u32> {
        self.layout(lunar_year).map(|l| l.months_in_year())
    }
    pub fn days_in_year(&self, lunar_year: i32) -> Result<u32> {
        self.layout(lunar_year).map(|l| l.total_days())
    }
    /// Number of days in `month` of `lunar_year`.
    pub fn days_in_month(&self, lunar_year: i32, month: Month) -> Result<u32> {
        let layout = self.layout(lunar_year)?;
        layout
            .position_of(month)
            .and_then(|pos| layout.month_len(pos))
            .ok_or(Error::InvalidLunarDate {
                year: lunar_year,
                month,
                day: 1,
                reason: "year has no such month",
            })
    }
    /// Day of the lunar year, from 1.
    pub fn day_of_year(&self, date: Date) -> Result<u32> {
        let lunar = self.to_lunar(date)?;
        let epoch = self.epoch(lunar.year)?;
        Ok((date - epoch) as u32 + 1)
    }
    /// Position of the lunar year containing `date` in the sexagenary cycle,
    /// from 1 (甲子) to 60 (癸亥).
    pub fn sexagenary_year(&self, date: Date) -> Result<u32> {
        self.to_lunar(date).map(|l| sexagenary_for_year(l.year))
    }

    fn check_date(&self, date: Date) -> Result<()> {
        if (self.min_date..=self.max_date).contains(&date) {
            Ok(())
        } else {
            Err(Error::DateOutOfRange {
                date,
                min: self.min_date,
                max: self.max_date,
            })
        }
    }

    fn index(&self, lunar_year: i32) -> Result<usize> {
        let (min, max) = (self.min_lunar_year(), self.max_lunar_year());
        if (min..=max).contains(&lunar_year) {
            Ok((lunar_year - min) as usize)
        } else {
            Err(Error::YearOutOfRange {
                year: lunar_year,
                min,
                max,
            })
        }
    }

    fn entry(&self, lunar_year: i32) -> Result<&YearEntry> {
        self.index(lunar_year).map(|i| &self.years[i])
    }
}

fn in_table(name: &str, year: i32, err: Error) -> Error {
    match err {
        Error::DataIntegrity(msg) => {
            Error::data_integrity(format!("{name} lunar year {year}: {msg}"))
        }
        other => Error::data_integrity(format!("{name} lunar year {year}: {other}")),
    }
}

/// Position of a Gregorian-numbered year in the sexagenary cycle, from 1
/// (甲子) to 60 (癸亥).
///
/// # Example
///
/// ```
/// use kalendarilo_lunisolar::lunisolar::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(-2696));
/// assert_eq!(1, sexagenary_for_year(1984));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}

/// Celestial stem (天干) of a sexagenary number, `1..=10` for 甲 to 癸.
pub fn celestial_stem(sexagenary: u32) -> Result<u32> {
    check_sexagenary(sexagenary).map(|n| (n - 1) % 10 + 1)
}

/// Terrestrial branch (地支) of a sexagenary number, `1..=12` for 子 to 亥.
pub fn terrestrial_branch(sexagenary: u32) -> Result<u32> {
    check_sexagenary(sexagenary).map(|n| (n - 1) % 12 + 1)
}

fn check_sexagenary(n: u32) -> Result<u32> {
    if (1..=60).contains(&n) {
        Ok(n)
    } else {
        Err(Error::InvalidArgument(format!(
            "sexagenary number {n} not in 1..=60"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use Month::*;

    const ERAS: &[EraInfo] = &[EraInfo {
        era: 1,
        start_year: 1912,
        start_month: 1,
        start_day: 1,
        year_offset: 1911,
        min_era_year: 1,
        max_era_year: 100,
    }];

    // Lunar years 1912..=1914 of the Taiwan table.
    const YEARS: &[YearInfo] = &[
        YearInfo::new(0, 2, 18, 42192),
        YearInfo::new(0, 2, 6, 53840),
        YearInfo::new(5, 1, 26, 54568),
    ];

    static SMALL: CalendarData = CalendarData {
        name: "small",
        min_lunar_year: 1912,
        years: YEARS,
        eras: ERAS,
        min_date: (1912, 2, 18),
        max_date: (1915, 2, 13),
    };

    // Starts a month into the first year, stops before the table ends.
    static NARROW: CalendarData = CalendarData {
        name: "narrow",
        min_lunar_year: 1912,
        years: YEARS,
        eras: ERAS,
        min_date: (1912, 3, 19),
        max_date: (1914, 12, 31),
    };

    fn date(y: i32, m: i32, d: i32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn month_basics() {
        assert_eq!(5, Leap(5).num());
        assert!(Leap(5).is_leap());
        assert!(!Common(5).is_leap());
        assert_eq!("5", Common(5).to_string());
        assert_eq!("leap 5", Leap(5).to_string());
        assert!(LunarDate::new(1914, Leap(5), 1).is_leap_month());
    }

    #[test]
    fn bounds() {
        let cal = CalendarVariant::new(&SMALL).unwrap();
        assert_eq!("small", cal.name());
        assert_eq!(1912, cal.min_lunar_year());
        assert_eq!(1914, cal.max_lunar_year());
        assert_eq!(date(1912, 2, 18), cal.min_date());
        assert_eq!(date(1915, 2, 13), cal.max_date());
        assert_eq!(vec![1], cal.eras());
    }

    #[test]
    fn to_lunar_walks_months() {
        let cal = CalendarVariant::new(&SMALL).unwrap();
        let data = [
            ((1912, 2, 18), (1912, Common(1), 1)),
            ((1912, 3, 18), (1912, Common(1), 30)),
            ((1912, 3, 19), (1912, Common(2), 1)),
            ((1913, 2, 5), (1912, Common(12), 30)),
            ((1913, 2, 6), (1913, Common(1), 1)),
            ((1914, 1, 25), (1913, Common(12), 30)),
            ((1914, 1, 26), (1914, Common(1), 1)),
            ((1914, 6, 22), (1914, Common(5), 29)),
            ((1914, 6, 23), (1914, Leap(5), 1)),
            ((1914, 7, 22), (1914, Leap(5), 30)),
            ((1914, 7, 23), (1914, Common(6), 1)),
            ((1915, 2, 13), (1914, Common(12), 30)),
        ];
        for ((y, m, d), (ly, lm, ld)) in data {
            let solar = date(y, m, d);
            let lunar = LunarDate::new(ly, lm, ld);
            assert_eq!(Ok(lunar), cal.to_lunar(solar), "{solar}");
            assert_eq!(Ok(solar), cal.to_solar(lunar), "{lunar:?}");
        }
    }

    #[test]
    fn to_lunar_out_of_range() {
        let cal = CalendarVariant::new(&SMALL).unwrap();
        for solar in [date(1912, 2, 17), date(1915, 2, 14)] {
            assert_eq!(
                Err(Error::DateOutOfRange {
                    date: solar,
                    min: cal.min_date(),
                    max: cal.max_date(),
                }),
                cal.to_lunar(solar)
            );
        }
    }

    #[test]
    fn to_solar_rejects_invalid() {
        let cal = CalendarVariant::new(&SMALL).unwrap();
        let invalid = [
            LunarDate::new(1914, Common(0), 1),
            LunarDate::new(1914, Common(13), 1),
            LunarDate::new(1914, Leap(4), 1),
            LunarDate::new(1914, Leap(13), 1),
            LunarDate::new(1913, Leap(5), 1),
            LunarDate::new(1914, Common(3), 30),
            LunarDate::new(1914, Common(3), 0),
            LunarDate::new(1914, Leap(5), 31),
        ];
        for lunar in invalid {
            let err = cal.to_solar(lunar).unwrap_err();
            assert_eq!(ErrorKind::InvalidLunarDate, err.kind(), "{lunar:?}");
        }
        assert_eq!(
            Err(Error::DayOutOfRange {
                year: 1914,
                month: Common(3),
                day: 30,
                max: 29,
            }),
            cal.to_solar(LunarDate::new(1914, Common(3), 30))
        );
        assert_eq!(
            Err(Error::DayOutOfRange {
                year: 1914,
                month: Leap(5),
                day: 31,
                max: 30,
            }),
            cal.to_solar(LunarDate::new(1914, Leap(5), 31))
        );
        assert!(cal.to_solar(LunarDate::new(1914, Common(3), 29)).is_ok());

        for year in [1911, 1915] {
            assert_eq!(
                Err(Error::YearOutOfRange {
                    year,
                    min: 1912,
                    max: 1914
                }),
                cal.to_solar(LunarDate::new(year, Common(1), 1))
            );
        }
    }

    #[test]
    fn narrow_range_still_bounds_results() {
        let cal = CalendarVariant::new(&NARROW).unwrap();
        let err = cal.to_solar(LunarDate::new(1912, Common(1), 30)).unwrap_err();
        assert_eq!(ErrorKind::DateOutOfRange, err.kind());
        assert_eq!(
            Ok(date(1912, 3, 19)),
            cal.to_solar(LunarDate::new(1912, Common(2), 1))
        );
        let err = cal.to_solar(LunarDate::new(1914, Common(12), 1)).unwrap_err();
        assert_eq!(ErrorKind::DateOutOfRange, err.kind());
        assert!(cal.to_lunar(date(1915, 1, 1)).is_err());
    }

    #[test]
    fn eras_and_years() {
        let cal = CalendarVariant::new(&SMALL).unwrap();
        assert_eq!(Ok(1), cal.era(date(1912, 2, 18)));
        assert_eq!(Ok(1), cal.year(date(1912, 2, 18)));
        assert_eq!(Ok(1), cal.year(date(1913, 2, 5)));
        assert_eq!(Ok(2), cal.year(date(1913, 2, 6)));
        assert_eq!(Ok(1914), cal.gregorian_year(3, 1));
        assert_eq!(Ok(1914), cal.gregorian_year(3, CURRENT_ERA));
        assert_eq!(
            ErrorKind::DateOutOfRange,
            cal.gregorian_year(4, 1).unwrap_err().kind()
        );
        assert_eq!(
            ErrorKind::EraOutOfRange,
            cal.gregorian_year(0, 1).unwrap_err().kind()
        );
        assert_eq!(Err(Error::UnknownEra(2)), cal.gregorian_year(1, 2));
        assert_eq!(
            ErrorKind::DateOutOfRange,
            cal.era(date(1900, 1, 1)).unwrap_err().kind()
        );
    }

    #[test]
    fn year_queries() {
        let cal = CalendarVariant::new(&SMALL).unwrap();
        assert_eq!(Ok(date(1914, 1, 26)), cal.epoch(1914));
        assert_eq!(Ok(Some(5)), cal.leap_month(1914));
        assert_eq!(Ok(None), cal.leap_month(1913));
        assert_eq!(Ok(true), cal.is_leap_year(1914));
        assert_eq!(Ok(13), cal.months_in_year(1914));
        assert_eq!(Ok(12), cal.months_in_year(1912));
        assert_eq!(Ok(384), cal.days_in_year(1914));
        assert_eq!(Ok(30), cal.days_in_month(1914, Leap(5)));
        assert_eq!(Ok(29), cal.days_in_month(1914, Common(3)));
        assert!(cal.days_in_month(1913, Leap(5)).is_err());
        assert_eq!(Ok(1), cal.day_of_year(date(1914, 1, 26)));
        assert_eq!(Ok(384), cal.day_of_year(date(1915, 2, 13)));
        assert_eq!(Ok(5), cal.year_info_field(1914, YearInfoField::LeapMonth));
        assert_eq!(Ok(&YEARS[0]), cal.year_info(1912));
        assert_eq!(
            ErrorKind::DateOutOfRange,
            cal.year_info(1915).unwrap_err().kind()
        );
        assert!(cal.epoch(1911).is_err());
    }

    #[test]
    fn sexagenary() {
        for (std, year) in [(60, -2697), (1, -2696), (17, 2000), (49, 1912)] {
            assert_eq!(std, sexagenary_for_year(year));
        }
        assert_eq!(Ok(1), celestial_stem(1));
        assert_eq!(Ok(10), celestial_stem(60));
        assert_eq!(Ok(9), celestial_stem(49));
        assert_eq!(Ok(1), terrestrial_branch(1));
        assert_eq!(Ok(12), terrestrial_branch(60));
        assert_eq!(Ok(1), terrestrial_branch(49));
        for n in [0, 61] {
            assert_eq!(
                ErrorKind::InvalidArgument,
                celestial_stem(n).unwrap_err().kind()
            );
            assert!(terrestrial_branch(n).is_err());
        }

        let cal = CalendarVariant::new(&SMALL).unwrap();
        // 1912 is 壬子, still so the day before New Year 1913.
        assert_eq!(Ok(49), cal.sexagenary_year(date(1913, 2, 5)));
        assert_eq!(Ok(50), cal.sexagenary_year(date(1913, 2, 6)));
    }

    mod integrity {
        use super::*;

        fn assert_corrupt(data: &'static CalendarData) {
            let err = CalendarVariant::new(data).unwrap_err();
            assert_eq!(ErrorKind::DataIntegrity, err.kind(), "{err}");
        }

        #[test]
        fn empty_table() {
            static DATA: CalendarData = CalendarData {
                name: "empty",
                min_lunar_year: 1912,
                years: &[],
                eras: ERAS,
                min_date: (1912, 2, 18),
                max_date: (1912, 2, 18),
            };
            assert_corrupt(&DATA);
        }

        #[test]
        fn gap_between_years() {
            static DATA: CalendarData = CalendarData {
                name: "gap",
                min_lunar_year: 1912,
                years: &[
                    YearInfo::new(0, 2, 18, 42192),
                    YearInfo::new(0, 2, 7, 53840),
                ],
                eras: ERAS,
                min_date: (1912, 2, 18),
                max_date: (1913, 2, 20),
            };
            assert_corrupt(&DATA);
        }

        #[test]
        fn bad_record() {
            static DATA: CalendarData = CalendarData {
                name: "bad record",
                min_lunar_year: 1912,
                years: &[YearInfo::new(14, 2, 18, 42192)],
                eras: ERAS,
                min_date: (1912, 2, 18),
                max_date: (1912, 3, 1),
            };
            assert_corrupt(&DATA);
        }

        #[test]
        fn nonexistent_epoch() {
            static DATA: CalendarData = CalendarData {
                name: "bad epoch",
                min_lunar_year: 1913,
                years: &[YearInfo::new(0, 2, 30, 42192)],
                eras: ERAS,
                min_date: (1913, 3, 2),
                max_date: (1913, 3, 3),
            };
            assert_corrupt(&DATA);
        }

        #[test]
        fn range_outside_table() {
            static BEFORE: CalendarData = CalendarData {
                name: "before",
                min_lunar_year: 1912,
                years: YEARS,
                eras: ERAS,
                min_date: (1912, 2, 17),
                max_date: (1913, 1, 1),
            };
            static AFTER: CalendarData = CalendarData {
                name: "after",
                min_lunar_year: 1912,
                years: YEARS,
                eras: ERAS,
                min_date: (1912, 2, 18),
                max_date: (1915, 2, 14),
            };
            static REVERSED: CalendarData = CalendarData {
                name: "reversed",
                min_lunar_year: 1912,
                years: YEARS,
                eras: ERAS,
                min_date: (1913, 2, 18),
                max_date: (1913, 2, 17),
            };
            assert_corrupt(&BEFORE);
            assert_corrupt(&AFTER);
            assert_corrupt(&REVERSED);
        }

        #[test]
        fn empty_eras() {
            static DATA: CalendarData = CalendarData {
                name: "no eras",
                min_lunar_year: 1912,
                years: YEARS,
                eras: &[],
                min_date: (1912, 2, 18),
                max_date: (1915, 2, 13),
            };
            assert_corrupt(&DATA);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn cal() -> &'static CalendarVariant {
        taiwan::calendar()
    }

    fn supported_date() -> impl Strategy<Value = Date> {
        (cal().min_date().jdn()..=cal().max_date().jdn()).prop_map(Date::from_jdn)
    }

    /// Any existing lunar date of the Taiwan table.
    fn lunar_date() -> impl Strategy<Value = LunarDate> {
        (taiwan::MIN_LUNAR_YEAR..=taiwan::MAX_LUNAR_YEAR, 1u32..=13, 1u32..=30).prop_filter_map(
            "no such lunar date",
            |(year, pos, day)| {
                let layout = cal().layout(year).ok()?;
                let month = layout.month_at(pos)?;
                (day <= layout.month_len(pos)?).then_some(LunarDate::new(year, month, day))
            },
        )
    }

    fn sort_key(lunar: &LunarDate) -> (i32, u32, u32) {
        let pos = cal()
            .layout(lunar.year)
            .ok()
            .and_then(|l| l.position_of(lunar.month))
            .unwrap_or(0);
        (lunar.year, pos, lunar.day)
    }

    proptest! {
        /// Converting to lunar and back yields the same date.
        #[test]
        fn solar_round_trip(date in supported_date()) {
            let lunar = cal().to_lunar(date).unwrap();
            prop_assert_eq!(Ok(date), cal().to_solar(lunar));
        }

        /// Converting to solar and back yields the same lunar date.
        #[test]
        fn lunar_round_trip(lunar in lunar_date()) {
            let date = cal().to_solar(lunar).unwrap();
            prop_assert_eq!(Ok(lunar), cal().to_lunar(date));
        }

        /// Later solar dates never map to earlier lunar dates.
        #[test]
        fn monotonic(a in supported_date(), b in supported_date()) {
            let (a, b) = if a <= b { (a, b) } else { (b, a) };
            let la = cal().to_lunar(a).unwrap();
            let lb = cal().to_lunar(b).unwrap();
            prop_assert!(sort_key(&la) <= sort_key(&lb), "{:?} > {:?}", la, lb);
            if a < b {
                prop_assert!(sort_key(&la) < sort_key(&lb));
            }
        }

        /// A date is in a leap month exactly when its month is the year's leap month.
        #[test]
        fn leap_consistency(date in supported_date()) {
            let lunar = cal().to_lunar(date).unwrap();
            let leap = cal().year_info(lunar.year).unwrap().leap_month;
            if lunar.is_leap_month() {
                prop_assert_eq!(u32::from(leap), lunar.month.num());
            }
            if leap == 0 {
                prop_assert!(!lunar.is_leap_month());
            }
        }

        /// Month lengths of a year add up to the gap between consecutive New Years.
        #[test]
        fn day_count_conservation(year in taiwan::MIN_LUNAR_YEAR..taiwan::MAX_LUNAR_YEAR) {
            let days = cal().days_in_year(year).unwrap();
            let gap = cal().epoch(year + 1).unwrap() - cal().epoch(year).unwrap();
            prop_assert_eq!(days as i32, gap);
        }
    }
}
