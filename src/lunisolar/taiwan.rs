//! Taiwan lunisolar calendar.
//!
//! The table covers lunar years 1912 through 2050, i.e. Gregorian 1912-02-18
//! through 2051-02-10. Years are numbered in a single era, the Republic of
//! China (Minguo) era, whose year 1 is 1912.
//!
//! # Example
//!
//! ```
//! use kalendarilo_lunisolar::Date;
//! use kalendarilo_lunisolar::lunisolar::{taiwan, LunarDate, Month::*};
//!
//! let cal = taiwan::calendar();
//! let date = Date::from_gregorian(2024, 2, 10).unwrap();
//!
//! assert_eq!(Ok(LunarDate::new(2024, Common(1), 1)), cal.to_lunar(date));
//! assert_eq!(Ok(113), cal.year(date)); // Minguo 113
//! ```

use std::sync::OnceLock;

use super::{CalendarData, CalendarVariant, EraInfo, YearInfo};

/// First lunar year of the table.
pub const MIN_LUNAR_YEAR: i32 = 1912;
/// Last lunar year of the table.
pub const MAX_LUNAR_YEAR: i32 = 2050;

/// The Minguo era: Gregorian year = era year + 1911.
pub const ERAS: &[EraInfo] = &[EraInfo {
    era: 1,
    start_year: 1912,
    start_month: 1,
    start_day: 1,
    year_offset: 1911,
    min_era_year: 1,
    max_era_year: 9999 - 1911,
}];

/// One record per lunar year. Comments list the month lengths and the year's total.
#[rustfmt::skip]
pub const YEAR_INFO: &[YearInfo] = &[
    YearInfo::new(0, 2, 18, 42192), // 1912: 30 29 30 29 29 30 29 29 30 30 29 30 = 354
    YearInfo::new(0, 2, 6, 53840), // 1913: 30 30 29 30 29 29 30 29 29 30 29 30 = 354
    YearInfo::new(5, 1, 26, 54568), // 1914: 30 30 29 30 29 30 29 30 29 29 30 29 30 = 384
    YearInfo::new(0, 2, 14, 46400), // 1915: 30 29 30 30 29 30 29 30 29 30 29 29 = 354
    YearInfo::new(0, 2, 3, 54944), // 1916: 30 30 29 30 29 30 30 29 30 29 30 29 = 355
    YearInfo::new(2, 1, 23, 38608), // 1917: 30 29 29 30 29 30 30 29 30 30 29 30 29 = 384
    YearInfo::new(0, 2, 11, 38320), // 1918: 30 29 29 30 29 30 29 30 30 29 30 30 = 355
    YearInfo::new(7, 2, 1, 18872), // 1919: 29 30 29 29 30 29 29 30 30 29 30 30 30 = 384
    YearInfo::new(0, 2, 20, 18800), // 1920: 29 30 29 29 30 29 29 30 29 30 30 30 = 354
    YearInfo::new(0, 2, 8, 42160), // 1921: 30 29 30 29 29 30 29 29 30 29 30 30 = 354
    YearInfo::new(5, 1, 28, 45656), // 1922: 30 29 30 30 29 29 30 29 29 30 29 30 30 = 384
    YearInfo::new(0, 2, 16, 27216), // 1923: 29 30 30 29 30 29 30 29 29 30 29 30 = 354
    YearInfo::new(0, 2, 5, 27968), // 1924: 29 30 30 29 30 30 29 30 29 30 29 29 = 354
    YearInfo::new(4, 1, 24, 44456), // 1925: 30 29 30 29 30 30 29 30 30 29 30 29 30 = 385
    YearInfo::new(0, 2, 13, 11104), // 1926: 29 29 30 29 30 29 30 30 29 30 30 29 = 354
    YearInfo::new(0, 2, 2, 38256), // 1927: 30 29 29 30 29 30 29 30 29 30 30 30 = 355
    YearInfo::new(2, 1, 23, 18808), // 1928: 29 30 29 29 30 29 29 30 29 30 30 30 30 = 384
    YearInfo::new(0, 2, 10, 18800), // 1929: 29 30 29 29 30 29 29 30 29 30 30 30 = 354
    YearInfo::new(6, 1, 30, 25776), // 1930: 29 30 30 29 29 30 29 29 30 29 30 30 29 = 383
    YearInfo::new(0, 2, 17, 54432), // 1931: 30 30 29 30 29 30 29 29 30 29 30 29 = 354
    YearInfo::new(0, 2, 6, 59984), // 1932: 30 30 30 29 30 29 30 29 29 30 29 30 = 355
    YearInfo::new(5, 1, 26, 27976), // 1933: 29 30 30 29 30 30 29 30 29 30 29 29 30 = 384
    YearInfo::new(0, 2, 14, 23248), // 1934: 29 30 29 30 30 29 30 29 30 30 29 30 = 355
    YearInfo::new(0, 2, 4, 11104), // 1935: 29 29 30 29 30 29 30 30 29 30 30 29 = 354
    YearInfo::new(3, 1, 24, 37744), // 1936: 30 29 29 30 29 29 30 30 29 30 30 30 29 = 384
    YearInfo::new(0, 2, 11, 37600), // 1937: 30 29 29 30 29 29 30 29 30 30 30 29 = 354
    YearInfo::new(7, 1, 31, 51560), // 1938: 30 30 29 29 30 29 29 30 29 30 30 29 30 = 384
    YearInfo::new(0, 2, 19, 51536), // 1939: 30 30 29 29 30 29 29 30 29 30 29 30 = 354
    YearInfo::new(0, 2, 8, 54432), // 1940: 30 30 29 30 29 30 29 29 30 29 30 29 = 354
    YearInfo::new(6, 1, 27, 55888), // 1941: 30 30 29 30 30 29 30 29 29 30 29 30 29 = 384
    YearInfo::new(0, 2, 15, 46416), // 1942: 30 29 30 30 29 30 29 30 29 30 29 30 = 355
    YearInfo::new(0, 2, 5, 22176), // 1943: 29 30 29 30 29 30 30 29 30 29 30 29 = 354
    YearInfo::new(4, 1, 25, 43736), // 1944: 30 29 30 29 30 29 30 29 30 30 29 30 30 = 385
    YearInfo::new(0, 2, 13, 9680), // 1945: 29 29 30 29 29 30 29 30 30 30 29 30 = 354
    YearInfo::new(0, 2, 2, 37584), // 1946: 30 29 29 30 29 29 30 29 30 30 29 30 = 354
    YearInfo::new(2, 1, 22, 51544), // 1947: 30 30 29 29 30 29 29 30 29 30 29 30 30 = 384
    YearInfo::new(0, 2, 10, 43344), // 1948: 30 29 30 29 30 29 29 30 29 30 29 30 = 354
    YearInfo::new(7, 1, 29, 46248), // 1949: 30 29 30 30 29 30 29 29 30 29 30 29 30 = 384
    YearInfo::new(0, 2, 17, 27808), // 1950: 29 30 30 29 30 30 29 29 30 29 30 29 = 354
    YearInfo::new(0, 2, 6, 46416), // 1951: 30 29 30 30 29 30 29 30 29 30 29 30 = 355
    YearInfo::new(5, 1, 27, 21928), // 1952: 29 30 29 30 29 30 29 30 30 29 30 29 30 = 384
    YearInfo::new(0, 2, 14, 19872), // 1953: 29 30 29 29 30 30 29 30 30 29 30 29 = 354
    YearInfo::new(0, 2, 3, 42416), // 1954: 30 29 30 29 29 30 29 30 30 29 30 30 = 355
    YearInfo::new(3, 1, 24, 21176), // 1955: 29 30 29 30 29 29 30 29 30 29 30 30 30 = 384
    YearInfo::new(0, 2, 12, 21168), // 1956: 29 30 29 30 29 29 30 29 30 29 30 30 = 354
    YearInfo::new(8, 1, 31, 43344), // 1957: 30 29 30 29 30 29 29 30 29 30 29 30 29 = 383
    YearInfo::new(0, 2, 18, 59728), // 1958: 30 30 30 29 30 29 29 30 29 30 29 30 = 355
    YearInfo::new(0, 2, 8, 27296), // 1959: 29 30 30 29 30 29 30 29 30 29 30 29 = 354
    YearInfo::new(6, 1, 28, 44368), // 1960: 30 29 30 29 30 30 29 30 29 30 29 30 29 = 384
    YearInfo::new(0, 2, 15, 43856), // 1961: 30 29 30 29 30 29 30 30 29 30 29 30 = 355
    YearInfo::new(0, 2, 5, 19296), // 1962: 29 30 29 29 30 29 30 30 29 30 30 29 = 354
    YearInfo::new(4, 1, 25, 42352), // 1963: 30 29 30 29 29 30 29 30 29 30 30 30 29 = 384
    YearInfo::new(0, 2, 13, 42352), // 1964: 30 29 30 29 29 30 29 30 29 30 30 30 = 355
    YearInfo::new(0, 2, 2, 21088), // 1965: 29 30 29 30 29 29 30 29 29 30 30 29 = 353
    YearInfo::new(3, 1, 21, 59696), // 1966: 30 30 30 29 30 29 29 30 29 29 30 30 29 = 384
    YearInfo::new(0, 2, 9, 55632), // 1967: 30 30 29 30 30 29 29 30 29 30 29 30 = 355
    YearInfo::new(7, 1, 30, 23208), // 1968: 29 30 29 30 30 29 30 29 30 29 30 29 30 = 384
    YearInfo::new(0, 2, 17, 22176), // 1969: 29 30 29 30 29 30 30 29 30 29 30 29 = 354
    YearInfo::new(0, 2, 6, 38608), // 1970: 30 29 29 30 29 30 30 29 30 30 29 30 = 355
    YearInfo::new(5, 1, 27, 19176), // 1971: 29 30 29 29 30 29 30 29 30 30 30 29 30 = 384
    YearInfo::new(0, 2, 15, 19152), // 1972: 29 30 29 29 30 29 30 29 30 30 29 30 = 354
    YearInfo::new(0, 2, 3, 42192), // 1973: 30 29 30 29 29 30 29 29 30 30 29 30 = 354
    YearInfo::new(4, 1, 23, 53864), // 1974: 30 30 29 30 29 29 30 29 29 30 30 29 30 = 384
    YearInfo::new(0, 2, 11, 53840), // 1975: 30 30 29 30 29 29 30 29 29 30 29 30 = 354
    YearInfo::new(8, 1, 31, 54568), // 1976: 30 30 29 30 29 30 29 30 29 29 30 29 30 = 384
    YearInfo::new(0, 2, 18, 46400), // 1977: 30 29 30 30 29 30 29 30 29 30 29 29 = 354
    YearInfo::new(0, 2, 7, 46752), // 1978: 30 29 30 30 29 30 30 29 30 29 30 29 = 355
    YearInfo::new(6, 1, 28, 38608), // 1979: 30 29 29 30 29 30 30 29 30 30 29 30 29 = 384
    YearInfo::new(0, 2, 16, 38320), // 1980: 30 29 29 30 29 30 29 30 30 29 30 30 = 355
    YearInfo::new(0, 2, 5, 18864), // 1981: 29 30 29 29 30 29 29 30 30 29 30 30 = 354
    YearInfo::new(4, 1, 25, 42168), // 1982: 30 29 30 29 29 30 29 29 30 29 30 30 30 = 384
    YearInfo::new(0, 2, 13, 42160), // 1983: 30 29 30 29 29 30 29 29 30 29 30 30 = 354
    YearInfo::new(10, 2, 2, 45656), // 1984: 30 29 30 30 29 29 30 29 29 30 29 30 30 = 384
    YearInfo::new(0, 2, 20, 27216), // 1985: 29 30 30 29 30 29 30 29 29 30 29 30 = 354
    YearInfo::new(0, 2, 9, 27968), // 1986: 29 30 30 29 30 30 29 30 29 30 29 29 = 354
    YearInfo::new(6, 1, 29, 44448), // 1987: 30 29 30 29 30 30 29 30 30 29 30 29 29 = 384
    YearInfo::new(0, 2, 17, 43872), // 1988: 30 29 30 29 30 29 30 30 29 30 30 29 = 355
    YearInfo::new(0, 2, 6, 38256), // 1989: 30 29 29 30 29 30 29 30 29 30 30 30 = 355
    YearInfo::new(5, 1, 27, 18808), // 1990: 29 30 29 29 30 29 29 30 29 30 30 30 30 = 384
    YearInfo::new(0, 2, 15, 18800), // 1991: 29 30 29 29 30 29 29 30 29 30 30 30 = 354
    YearInfo::new(0, 2, 4, 25776), // 1992: 29 30 30 29 29 30 29 29 30 29 30 30 = 354
    YearInfo::new(3, 1, 23, 27216), // 1993: 29 30 30 29 30 29 30 29 29 30 29 30 29 = 383
    YearInfo::new(0, 2, 10, 59984), // 1994: 30 30 30 29 30 29 30 29 29 30 29 30 = 355
    YearInfo::new(8, 1, 31, 27432), // 1995: 29 30 30 29 30 29 30 30 29 29 30 29 30 = 384
    YearInfo::new(0, 2, 19, 23232), // 1996: 29 30 29 30 30 29 30 29 30 30 29 29 = 354
    YearInfo::new(0, 2, 7, 43872), // 1997: 30 29 30 29 30 29 30 30 29 30 30 29 = 355
    YearInfo::new(5, 1, 28, 37736), // 1998: 30 29 29 30 29 29 30 30 29 30 30 29 30 = 384
    YearInfo::new(0, 2, 16, 37600), // 1999: 30 29 29 30 29 29 30 29 30 30 30 29 = 354
    YearInfo::new(0, 2, 5, 51552), // 2000: 30 30 29 29 30 29 29 30 29 30 30 29 = 354
    YearInfo::new(4, 1, 24, 54440), // 2001: 30 30 29 30 29 30 29 29 30 29 30 29 30 = 384
    YearInfo::new(0, 2, 12, 54432), // 2002: 30 30 29 30 29 30 29 29 30 29 30 29 = 354
    YearInfo::new(0, 2, 1, 55888), // 2003: 30 30 29 30 30 29 30 29 29 30 29 30 = 355
    YearInfo::new(2, 1, 22, 23208), // 2004: 29 30 29 30 30 29 30 29 30 29 30 29 30 = 384
    YearInfo::new(0, 2, 9, 22176), // 2005: 29 30 29 30 29 30 30 29 30 29 30 29 = 354
    YearInfo::new(7, 1, 29, 43736), // 2006: 30 29 30 29 30 29 30 29 30 30 29 30 30 = 385
    YearInfo::new(0, 2, 18, 9680), // 2007: 29 29 30 29 29 30 29 30 30 30 29 30 = 354
    YearInfo::new(0, 2, 7, 37584), // 2008: 30 29 29 30 29 29 30 29 30 30 29 30 = 354
    YearInfo::new(5, 1, 26, 51544), // 2009: 30 30 29 29 30 29 29 30 29 30 29 30 30 = 384
    YearInfo::new(0, 2, 14, 43344), // 2010: 30 29 30 29 30 29 29 30 29 30 29 30 = 354
    YearInfo::new(0, 2, 3, 46240), // 2011: 30 29 30 30 29 30 29 29 30 29 30 29 = 354
    YearInfo::new(4, 1, 23, 46416), // 2012: 30 29 30 30 29 30 29 30 29 30 29 30 29 = 384
    YearInfo::new(0, 2, 10, 44368), // 2013: 30 29 30 29 30 30 29 30 29 30 29 30 = 355
    YearInfo::new(9, 1, 31, 21928), // 2014: 29 30 29 30 29 30 29 30 30 29 30 29 30 = 384
    YearInfo::new(0, 2, 19, 19360), // 2015: 29 30 29 29 30 29 30 30 30 29 30 29 = 354
    YearInfo::new(0, 2, 8, 42416), // 2016: 30 29 30 29 29 30 29 30 30 29 30 30 = 355
    YearInfo::new(6, 1, 28, 21176), // 2017: 29 30 29 30 29 29 30 29 30 29 30 30 30 = 384
    YearInfo::new(0, 2, 16, 21168), // 2018: 29 30 29 30 29 29 30 29 30 29 30 30 = 354
    YearInfo::new(0, 2, 5, 43312), // 2019: 30 29 30 29 30 29 29 30 29 29 30 30 = 354
    YearInfo::new(4, 1, 25, 29864), // 2020: 29 30 30 30 29 30 29 29 30 29 30 29 30 = 384
    YearInfo::new(0, 2, 12, 27296), // 2021: 29 30 30 29 30 29 30 29 30 29 30 29 = 354
    YearInfo::new(0, 2, 1, 44368), // 2022: 30 29 30 29 30 30 29 30 29 30 29 30 = 355
    YearInfo::new(2, 1, 22, 19880), // 2023: 29 30 29 29 30 30 29 30 30 29 30 29 30 = 384
    YearInfo::new(0, 2, 10, 19296), // 2024: 29 30 29 29 30 29 30 30 29 30 30 29 = 354
    YearInfo::new(6, 1, 29, 42352), // 2025: 30 29 30 29 29 30 29 30 29 30 30 30 29 = 384
    YearInfo::new(0, 2, 17, 42208), // 2026: 30 29 30 29 29 30 29 29 30 30 30 29 = 354
    YearInfo::new(0, 2, 6, 53856), // 2027: 30 30 29 30 29 29 30 29 29 30 30 29 = 354
    YearInfo::new(5, 1, 26, 59696), // 2028: 30 30 30 29 30 29 29 30 29 29 30 30 29 = 384
    YearInfo::new(0, 2, 13, 54576), // 2029: 30 30 29 30 29 30 29 30 29 29 30 30 = 355
    YearInfo::new(0, 2, 3, 23200), // 2030: 29 30 29 30 30 29 30 29 30 29 30 29 = 354
    YearInfo::new(3, 1, 23, 27472), // 2031: 29 30 30 29 30 29 30 30 29 30 29 30 29 = 384
    YearInfo::new(0, 2, 11, 38608), // 2032: 30 29 29 30 29 30 30 29 30 30 29 30 = 355
    YearInfo::new(11, 1, 31, 19176), // 2033: 29 30 29 29 30 29 30 29 30 30 30 29 30 = 384
    YearInfo::new(0, 2, 19, 19152), // 2034: 29 30 29 29 30 29 30 29 30 30 29 30 = 354
    YearInfo::new(0, 2, 8, 42192), // 2035: 30 29 30 29 29 30 29 29 30 30 29 30 = 354
    YearInfo::new(6, 1, 28, 53848), // 2036: 30 30 29 30 29 29 30 29 29 30 29 30 30 = 384
    YearInfo::new(0, 2, 15, 53840), // 2037: 30 30 29 30 29 29 30 29 29 30 29 30 = 354
    YearInfo::new(0, 2, 4, 54560), // 2038: 30 30 29 30 29 30 29 30 29 29 30 29 = 354
    YearInfo::new(5, 1, 24, 55968), // 2039: 30 30 29 30 30 29 30 29 30 29 30 29 29 = 384
    YearInfo::new(0, 2, 12, 46496), // 2040: 30 29 30 30 29 30 29 30 30 29 30 29 = 355
    YearInfo::new(0, 2, 1, 22224), // 2041: 29 30 29 30 29 30 30 29 30 30 29 30 = 355
    YearInfo::new(2, 1, 22, 19160), // 2042: 29 30 29 29 30 29 30 29 30 30 29 30 30 = 384
    YearInfo::new(0, 2, 10, 18864), // 2043: 29 30 29 29 30 29 29 30 30 29 30 30 = 354
    YearInfo::new(7, 1, 30, 42168), // 2044: 30 29 30 29 29 30 29 29 30 29 30 30 30 = 384
    YearInfo::new(0, 2, 17, 42160), // 2045: 30 29 30 29 29 30 29 29 30 29 30 30 = 354
    YearInfo::new(0, 2, 6, 43600), // 2046: 30 29 30 29 30 29 30 29 29 30 29 30 = 354
    YearInfo::new(5, 1, 26, 46376), // 2047: 30 29 30 30 29 30 29 30 29 29 30 29 30 = 384
    YearInfo::new(0, 2, 14, 27936), // 2048: 29 30 30 29 30 30 29 30 29 29 30 29 = 354
    YearInfo::new(0, 2, 2, 44448), // 2049: 30 29 30 29 30 30 29 30 30 29 30 29 = 355
    YearInfo::new(3, 1, 23, 21936), // 2050: 29 30 29 30 29 30 29 30 30 29 30 30 29 = 384
];

/// Configuration of the Taiwan calendar.
pub static DATA: CalendarData = CalendarData {
    name: "Taiwan",
    min_lunar_year: MIN_LUNAR_YEAR,
    years: YEAR_INFO,
    eras: ERAS,
    min_date: (1912, 2, 18),
    max_date: (2051, 2, 10),
};

static CALENDAR: OnceLock<CalendarVariant> = OnceLock::new();

/// Returns the Taiwan calendar, building it on first use.
///
/// # Panics
///
/// Panics if the built-in table fails validation.
pub fn calendar() -> &'static CalendarVariant {
    CALENDAR.get_or_init(|| {
        CalendarVariant::new(&DATA).unwrap_or_else(|e| {
            tracing::error!(error = %e, "built-in Taiwan calendar table is corrupt");
            panic!("error building Taiwan calendar: {e}")
        })
    })
}
