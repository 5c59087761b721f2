//! Packed per-year records and their decoding.
//!
//! Each lunar year of a calendar table is a [`YearInfo`]: the leap month, the
//! Gregorian month/day of New Year, and one bit per month telling long (30
//! days) from short (29 days). Bit 15 of [`YearInfo::month_bits`] is the first
//! month, bit 14 the second, and so on down to bit 3 for a thirteenth month;
//! bits past the year's last month are unused.

use crate::error::{Error, Result};

use super::Month;

/// Highest number of months a lunar year may have.
pub const MAX_MONTHS: usize = 13;

/// One row of a calendar's year table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct YearInfo {
    /// `0` if the year has no leap month, otherwise the ordinary month the
    /// leap month follows.
    pub leap_month: u8,
    /// Gregorian month of the first day of the year.
    pub epoch_month: u8,
    /// Gregorian day of the first day of the year.
    pub epoch_day: u8,
    /// Month lengths, most significant bit first; set for 30 days.
    pub month_bits: u16,
}

/// Selects one field of a [`YearInfo`] for raw access.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearInfoField {
    LeapMonth,
    EpochMonth,
    EpochDay,
    MonthBits,
}

impl YearInfo {
    /// Creates a record; used to spell out calendar tables.
    pub const fn new(leap_month: u8, epoch_month: u8, epoch_day: u8, month_bits: u16) -> Self {
        Self {
            leap_month,
            epoch_month,
            epoch_day,
            month_bits,
        }
    }

    /// Reads a single field as an integer.
    pub fn field(&self, field: YearInfoField) -> u32 {
        use YearInfoField::*;
        match field {
            LeapMonth => self.leap_month.into(),
            EpochMonth => self.epoch_month.into(),
            EpochDay => self.epoch_day.into(),
            MonthBits => self.month_bits.into(),
        }
    }

    /// Unpacks the month lengths of the year.
    ///
    /// Fails with [`Error::DataIntegrity`] if a field is outside its declared
    /// range, which means the table itself is corrupt.
    ///
    /// # Example
    ///
    /// ```
    /// use kalendarilo_lunisolar::lunisolar::{Month, YearInfo};
    ///
    /// // Lunar year 1914 of the Taiwan table: leap month after the fifth.
    /// let layout = YearInfo::new(5, 1, 26, 54568).decode().unwrap();
    ///
    /// assert_eq!(13, layout.months_in_year());
    /// assert_eq!(Some(6), layout.position_of(Month::Leap(5)));
    /// assert_eq!(384, layout.total_days());
    /// ```
    pub fn decode(&self) -> Result<YearLayout> {
        if self.leap_month > 12 {
            return Err(Error::data_integrity(format!(
                "leap month {} not in 0..=12",
                self.leap_month
            )));
        }
        if !(1..=12).contains(&self.epoch_month) {
            return Err(Error::data_integrity(format!(
                "epoch month {} not in 1..=12",
                self.epoch_month
            )));
        }
        if !(1..=31).contains(&self.epoch_day) {
            return Err(Error::data_integrity(format!(
                "epoch day {} not in 1..=31",
                self.epoch_day
            )));
        }

        let count = if self.leap_month == 0 { 12 } else { 13 };
        let mut lengths = [0u8; MAX_MONTHS];
        for (i, len) in lengths.iter_mut().take(count).enumerate() {
            *len = if self.month_bits & (0x8000 >> i) != 0 {
                30
            } else {
                29
            };
        }
        let total_days = lengths.iter().map(|&l| u32::from(l)).sum();

        Ok(YearLayout {
            leap_month: self.leap_month,
            count: count as u8,
            lengths,
            total_days,
        })
    }
}

/// The decoded month structure of one lunar year.
///
/// Months are addressed either by [`Month`] or by their 1-based position in
/// the year, where a leap month takes the position right after the month it
/// follows and pushes later months back by one.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct YearLayout {
    leap_month: u8,
    count: u8,
    lengths: [u8; MAX_MONTHS],
    total_days: u32,
}

impl YearLayout {
    /// 12, or 13 in a year with a leap month.
    pub fn months_in_year(&self) -> u32 {
        self.count.into()
    }
    /// The ordinary month the leap month follows, if any.
    pub fn leap_month(&self) -> Option<u32> {
        (self.leap_month != 0).then_some(self.leap_month.into())
    }
    /// Position of the leap month, if any.
    pub fn leap_position(&self) -> Option<u32> {
        self.leap_month().map(|m| m + 1)
    }
    /// Month lengths in order of position.
    pub fn lengths(&self) -> &[u8] {
        &self.lengths[..self.count as usize]
    }
    /// Length of the month at `position`, or `None` past the year's end.
    pub fn month_len(&self, position: u32) -> Option<u32> {
        let idx = usize::try_from(position).ok()?.checked_sub(1)?;
        self.lengths().get(idx).map(|&l| l.into())
    }
    /// Number of days in the year.
    pub fn total_days(&self) -> u32 {
        self.total_days
    }
    /// Days in all months before `position`.
    pub fn days_before(&self, position: u32) -> u32 {
        let end = (position.saturating_sub(1) as usize).min(self.count as usize);
        self.lengths[..end].iter().map(|&l| u32::from(l)).sum()
    }

    /// Maps a month to its position, or `None` if the year has no such month.
    pub fn position_of(&self, month: Month) -> Option<u32> {
        let num = month.num();
        if !(1..=12).contains(&num) {
            return None;
        }
        match (month, self.leap_month()) {
            (Month::Leap(_), Some(leap)) if leap == num => Some(num + 1),
            (Month::Leap(_), _) => None,
            (Month::Common(_), Some(leap)) if num > leap => Some(num + 1),
            (Month::Common(_), _) => Some(num),
        }
    }

    /// Maps a position back to its month.
    pub fn month_at(&self, position: u32) -> Option<Month> {
        if !(1..=self.months_in_year()).contains(&position) {
            return None;
        }
        Some(match self.leap_month() {
            Some(leap) if position == leap + 1 => Month::Leap(leap),
            Some(leap) if position > leap + 1 => Month::Common(position - 1),
            _ => Month::Common(position),
        })
    }
}
