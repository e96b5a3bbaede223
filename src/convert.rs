//! Conversion between the Ethiopian calendar and absolute days, plus the
//! dual-calendar display formats.
//!
//! Both directions share one anchor function and one leap predicate
//! ([`is_ethiopian_leap_year`]), so converting a Gregorian date to
//! Ethiopian and back always reproduces the original day. The calendar
//! model itself stays a simplified approximation: the New Year anchor is
//! September 11 (12 in a leap year) of `year + 7`, with no
//! Julian/Coptic-grade precision.

use crate::consts::{
    ETHIOPIAN_MONTH_DAYS, ETHIOPIAN_MONTHS, ETHIOPIAN_YEAR_OFFSET, GREGORIAN_MONTHS_SHORT,
    NEW_YEAR_GREGORIAN_DAY, NEW_YEAR_GREGORIAN_DAY_LEAP, NEW_YEAR_GREGORIAN_MONTH, NOT_AVAILABLE,
    PAGUME,
};
use crate::types::{AbsoluteDate, EthiopianDate, is_ethiopian_leap_year};

/// The Ethiopian New Year (Meskerem 1) of the given Ethiopian year, as an
/// absolute day. Falls on September 11 of Gregorian year
/// `ethiopian_year + 7`, or September 12 in a leap year.
pub fn ethiopian_new_year(ethiopian_year: i32) -> AbsoluteDate {
    let gregorian_year = ethiopian_year + ETHIOPIAN_YEAR_OFFSET;
    let day = if is_ethiopian_leap_year(ethiopian_year) {
        NEW_YEAR_GREGORIAN_DAY_LEAP
    } else {
        NEW_YEAR_GREGORIAN_DAY
    };
    AbsoluteDate::from_ymd(gregorian_year, NEW_YEAR_GREGORIAN_MONTH, day)
}

impl EthiopianDate {
    /// The absolute day this date names: the year's New Year anchor plus
    /// `(month - 1) * 30 + day - 1`.
    pub fn to_absolute(self) -> AbsoluteDate {
        let offset =
            i32::from(self.month() - 1) * i32::from(ETHIOPIAN_MONTH_DAYS) + i32::from(self.day()) - 1;
        ethiopian_new_year(self.year()).add_days(offset)
    }

    /// The Ethiopian calendar date of the given absolute day.
    ///
    /// Finds the most recent New Year at or before the day, then
    /// decomposes the day offset into 30-day months. An offset past
    /// month 13 clamps to Pagume.
    pub fn from_absolute(date: AbsoluteDate) -> Self {
        let gregorian_year = date.to_gregorian().year();
        let mut year = gregorian_year - ETHIOPIAN_YEAR_OFFSET;
        let mut anchor = ethiopian_new_year(year);
        if date < anchor {
            year -= 1;
            anchor = ethiopian_new_year(year);
        }
        let offset = anchor.days_until(date);
        let mut month = (offset / i32::from(ETHIOPIAN_MONTH_DAYS) + 1) as u8;
        let mut day = (offset % i32::from(ETHIOPIAN_MONTH_DAYS) + 1) as u8;
        if month > PAGUME {
            month = PAGUME;
            day = (offset - 360 + 1) as u8;
        }
        Self::from_parts(year, month, day)
    }
}

impl From<EthiopianDate> for AbsoluteDate {
    fn from(date: EthiopianDate) -> Self {
        date.to_absolute()
    }
}

impl From<AbsoluteDate> for EthiopianDate {
    fn from(date: AbsoluteDate) -> Self {
        Self::from_absolute(date)
    }
}

/// Formats an absolute day in en-US short style, e.g. `"Oct 7, 2024"`.
pub fn format_gregorian(date: AbsoluteDate) -> String {
    let g = date.to_gregorian();
    format!(
        "{} {}, {}",
        GREGORIAN_MONTHS_SHORT[usize::from(g.month() - 1)],
        g.day(),
        g.year()
    )
}

/// Formats an absolute day as an Ethiopian date with its month name,
/// e.g. `"27 Meskerem 2017"`.
pub fn format_ethiopian(date: AbsoluteDate) -> String {
    let e = EthiopianDate::from_absolute(date);
    format!(
        "{} {} {}",
        e.day(),
        ETHIOPIAN_MONTHS[usize::from(e.month() - 1)],
        e.year()
    )
}

/// Formats an absolute day as a combined `"Gregorian (EC: Ethiopian)"`
/// label, or `"N/A"` when the date is absent.
pub fn format_dual_date(date: Option<AbsoluteDate>) -> String {
    match date {
        Some(d) => format!("{} (EC: {})", format_gregorian(d), format_ethiopian(d)),
        None => NOT_AVAILABLE.to_owned(),
    }
}
