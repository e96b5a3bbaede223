//! Gestational arithmetic: reference-date resolution, gestational age,
//! the estimated due date, and milestone / antenatal-visit resolution.
//!
//! All arithmetic runs on [`AbsoluteDate`] day counts; calendars only
//! matter at the input boundary ([`DateInput`]) and when formatting.

use crate::consts::{AncVisitSpec, DAYS_PER_WEEK, GESTATION_DAYS, MilestoneSpec};
use crate::convert::format_dual_date;
use crate::prelude::*;
use crate::types::{AbsoluteDate, EthiopianDate, GregorianDate};
use serde::{Deserialize, Serialize};

/// Error type for gestational arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GestationError {
    /// The reference date lies after the as-of date. Callers must date
    /// from the past; this is reported instead of silently taking an
    /// absolute difference.
    #[error("reference date {reference} is after the as-of date {as_of}")]
    ReferenceInFuture {
        reference: AbsoluteDate,
        as_of: AbsoluteDate,
    },

    /// The day component of a gestational age must be 0-6.
    #[error("invalid gestational age days: {days} (must be 0..=6)")]
    InvalidDays { days: u8 },
}

/// A gestational age in completed weeks plus leftover days (0-6).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{weeks} weeks, {days} days")]
#[serde(try_from = "(u16, u8)", into = "(u16, u8)")]
pub struct GestationalAge {
    weeks: u16,
    days: u8,
}

impl GestationalAge {
    /// Creates a gestational age from week and day components.
    ///
    /// # Errors
    /// Returns `GestationError::InvalidDays` if `days > 6`.
    pub fn new(weeks: u16, days: u8) -> Result<Self, GestationError> {
        if days > 6 {
            return Err(GestationError::InvalidDays { days });
        }
        Ok(Self { weeks, days })
    }

    /// Decomposes an elapsed day count into weeks and days.
    pub const fn from_days(total_days: u32) -> Self {
        Self {
            weeks: (total_days / 7) as u16,
            days: (total_days % 7) as u8,
        }
    }

    /// The gestational age elapsed from `reference` to `as_of`.
    ///
    /// # Errors
    /// Returns `GestationError::ReferenceInFuture` if `reference` is
    /// after `as_of`; the direction is part of the contract, not
    /// smoothed over with an absolute value.
    pub fn between(
        reference: AbsoluteDate,
        as_of: AbsoluteDate,
    ) -> Result<Self, GestationError> {
        let elapsed = reference.days_until(as_of);
        if elapsed < 0 {
            return Err(GestationError::ReferenceInFuture { reference, as_of });
        }
        Ok(Self::from_days(elapsed as u32))
    }

    /// Completed weeks
    #[inline]
    pub const fn weeks(self) -> u16 {
        self.weeks
    }

    /// Leftover days (0-6)
    #[inline]
    pub const fn days(self) -> u8 {
        self.days
    }

    /// Total elapsed days: `weeks * 7 + days`.
    pub const fn total_days(self) -> i32 {
        self.weeks as i32 * 7 + self.days as i32
    }
}

impl TryFrom<(u16, u8)> for GestationalAge {
    type Error = GestationError;

    fn try_from(value: (u16, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl From<GestationalAge> for (u16, u8) {
    fn from(ga: GestationalAge) -> Self {
        (ga.weeks, ga.days)
    }
}

/// A date entered in one of the two supported calendars. One tagged
/// value per date input; conversion to absolute days happens here at the
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateInput {
    Gregorian(GregorianDate),
    Ethiopian(EthiopianDate),
}

impl DateInput {
    /// The absolute day this input names, whichever calendar it came in.
    pub fn resolve(self) -> AbsoluteDate {
        match self {
            Self::Gregorian(date) => date.to_absolute(),
            Self::Ethiopian(date) => date.to_absolute(),
        }
    }
}

/// How the pregnancy is dated. The two modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatingMethod {
    /// The entered last-normal-menstrual-period date is the reference.
    Lnmp(DateInput),
    /// The reference is back-computed from an ultrasound scan date and
    /// the gestational age reported at that scan.
    Ultrasound {
        scan_date: DateInput,
        reported_ga: GestationalAge,
    },
}

impl DatingMethod {
    /// The reference date all downstream arithmetic is anchored to.
    pub fn resolve_reference(self) -> AbsoluteDate {
        match self {
            Self::Lnmp(input) => input.resolve(),
            Self::Ultrasound {
                scan_date,
                reported_ga,
            } => scan_date.resolve().add_days(-reported_ga.total_days()),
        }
    }
}

/// The 280-day (40-week) estimated due date.
pub fn estimated_due_date(reference: AbsoluteDate) -> AbsoluteDate {
    reference.add_days(GESTATION_DAYS)
}

/// A milestone target: a single gestational week or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekTarget {
    Week(u16),
    Range(u16, u16),
}

impl WeekTarget {
    /// Label in the form `"24w 0d"` or `"10w 0d - 12w 0d"`.
    pub fn ga_label(self) -> String {
        match self {
            Self::Week(week) => format!("{week}w 0d"),
            Self::Range(start, end) => format!("{start}w 0d - {end}w 0d"),
        }
    }
}

/// A milestone target resolved against a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedTarget {
    /// A single resolved date
    Date(AbsoluteDate),
    /// An inclusive date span, displayed as `"start to end"`
    Span(AbsoluteDate, AbsoluteDate),
}

impl ResolvedTarget {
    /// Dual-calendar label; spans join both ends with `" to "`.
    pub fn date_label(self) -> String {
        match self {
            Self::Date(date) => format_dual_date(Some(date)),
            Self::Span(start, end) => format!(
                "{} to {}",
                format_dual_date(Some(start)),
                format_dual_date(Some(end))
            ),
        }
    }
}

/// A pregnancy milestone resolved to concrete dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub name: &'static str,
    pub target: WeekTarget,
    pub resolved: ResolvedTarget,
}

/// Resolves each milestone in `table` against the reference date, in
/// table order. A week target resolves to `reference + week * 7`
/// days; a range resolves both ends.
pub fn resolve_milestones(reference: AbsoluteDate, table: &[MilestoneSpec]) -> Vec<Milestone> {
    table
        .iter()
        .map(|spec| {
            let resolved = match spec.target {
                WeekTarget::Week(week) => {
                    ResolvedTarget::Date(reference.add_days(i32::from(week) * DAYS_PER_WEEK))
                }
                WeekTarget::Range(start, end) => ResolvedTarget::Span(
                    reference.add_days(i32::from(start) * DAYS_PER_WEEK),
                    reference.add_days(i32::from(end) * DAYS_PER_WEEK),
                ),
            };
            Milestone {
                name: spec.name,
                target: spec.target,
                resolved,
            }
        })
        .collect()
}

/// An antenatal-care contact resolved to a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AncVisit {
    pub visit: &'static str,
    pub target_week: u16,
    pub date: AbsoluteDate,
    pub checklist: &'static [&'static str],
}

/// Resolves each scheduled contact against the reference date, in
/// schedule order, carrying its checklist through unchanged.
pub fn resolve_anc_schedule(reference: AbsoluteDate, schedule: &[AncVisitSpec]) -> Vec<AncVisit> {
    schedule
        .iter()
        .map(|spec| AncVisit {
            visit: spec.visit,
            target_week: spec.weeks,
            date: reference.add_days(i32::from(spec.weeks) * DAYS_PER_WEEK),
            checklist: spec.checklist,
        })
        .collect()
}
