//! Era tables: mapping between era-relative and absolute (Gregorian) years.
//!
//! Era tables are tiny, so every lookup is a linear scan. Entries are
//! ordered oldest first and their year ranges do not overlap.

use crate::date::Date;
use crate::error::{Error, Result};

/// Era number that stands for the latest era of a calendar.
pub const CURRENT_ERA: u32 = 0;

/// One era of a calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct EraInfo {
    /// Era number, starting from 1.
    pub era: u32,
    /// Gregorian date on which the era begins.
    pub start_year: i32,
    pub start_month: u32,
    pub start_day: u32,
    /// Gregorian year = era year + `year_offset`.
    pub year_offset: i32,
    /// Smallest era year valid in this era.
    pub min_era_year: i32,
    /// Largest era year valid in this era.
    pub max_era_year: i32,
}

impl EraInfo {
    /// Gregorian date on which the era begins.
    pub fn start_date(&self) -> Result<Date> {
        Date::from_gregorian(self.start_year, self.start_month as i32, self.start_day as i32)
    }

    /// Gregorian years spanned by this era, inclusive.
    pub fn gregorian_years(&self) -> (i32, i32) {
        (
            self.min_era_year + self.year_offset,
            self.max_era_year + self.year_offset,
        )
    }

    fn contains_era_year(&self, era_year: i32) -> bool {
        (self.min_era_year..=self.max_era_year).contains(&era_year)
    }
}

/// Converts an era year to a Gregorian year.
///
/// `era` may be [`CURRENT_ERA`] to mean the latest era in `eras`.
///
/// # Example
///
/// ```
/// use kalendarilo_lunisolar::lunisolar::era::{self, CURRENT_ERA};
/// use kalendarilo_lunisolar::lunisolar::taiwan;
///
/// assert_eq!(Ok(2024), era::era_year_to_absolute(taiwan::ERAS, 1, 113));
/// assert_eq!(Ok(1912), era::era_year_to_absolute(taiwan::ERAS, CURRENT_ERA, 1));
/// ```
pub fn era_year_to_absolute(eras: &[EraInfo], era: u32, era_year: i32) -> Result<i32> {
    let info = if era == CURRENT_ERA {
        eras.last()
    } else {
        eras.iter().find(|e| e.era == era)
    }
    .ok_or(Error::UnknownEra(era))?;

    if !info.contains_era_year(era_year) {
        return Err(Error::EraOutOfRange {
            era: info.era,
            year: era_year,
            min: info.min_era_year,
            max: info.max_era_year,
        });
    }
    Ok(era_year + info.year_offset)
}

/// Converts a Gregorian year to `(era, era_year)`.
///
/// # Example
///
/// ```
/// use kalendarilo_lunisolar::lunisolar::era;
/// use kalendarilo_lunisolar::lunisolar::taiwan;
///
/// assert_eq!(Ok((1, 1)), era::absolute_to_era(taiwan::ERAS, 1912));
/// assert!(era::absolute_to_era(taiwan::ERAS, 1911).is_err());
/// ```
pub fn absolute_to_era(eras: &[EraInfo], year: i32) -> Result<(u32, i32)> {
    eras.iter()
        .rev()
        .filter(|e| e.start_year <= year)
        .map(|e| (e, year - e.year_offset))
        .find(|(e, era_year)| e.contains_era_year(*era_year))
        .map(|(e, era_year)| (e.era, era_year))
        .ok_or_else(|| not_covered(eras, year))
}

/// Returns the era in effect on `date`.
pub fn era_at(eras: &[EraInfo], date: Date) -> Result<u32> {
    info_at(eras, date).map(|e| e.era)
}

/// Returns the table entry of the era in effect on `date`.
pub fn info_at(eras: &[EraInfo], date: Date) -> Result<&EraInfo> {
    for e in eras.iter().rev() {
        if e.start_date()? <= date {
            return Ok(e);
        }
    }
    Err(not_covered(eras, date.gregorian().0))
}

/// Error for a Gregorian year no era covers, naming the era nearest to it.
fn not_covered(eras: &[EraInfo], year: i32) -> Error {
    let nearest = match eras.first() {
        Some(first) if year < first.gregorian_years().1 => Some(first),
        _ => eras.last(),
    };
    match nearest {
        Some(e) => {
            let (min, max) = e.gregorian_years();
            Error::EraOutOfRange {
                era: e.era,
                year,
                min,
                max,
            }
        }
        None => Error::UnknownEra(CURRENT_ERA),
    }
}

/// Checks that an era table is usable: non-empty, valid start dates in
/// increasing order and non-empty year ranges.
pub(crate) fn validate(eras: &[EraInfo]) -> Result<()> {
    if eras.is_empty() {
        return Err(Error::data_integrity("era table is empty"));
    }
    let mut prev: Option<Date> = None;
    for e in eras {
        if e.era == CURRENT_ERA {
            return Err(Error::data_integrity("era number 0 is reserved"));
        }
        if e.min_era_year > e.max_era_year {
            return Err(Error::data_integrity(format!(
                "era {} has an empty year range {}..={}",
                e.era, e.min_era_year, e.max_era_year
            )));
        }
        let start = e.start_date().map_err(|err| {
            Error::data_integrity(format!("era {} start date: {}", e.era, err))
        })?;
        if prev.is_some_and(|p| p >= start) {
            return Err(Error::data_integrity(format!(
                "era {} does not start after the previous era",
                e.era
            )));
        }
        prev = Some(start);
    }
    Ok(())
}
