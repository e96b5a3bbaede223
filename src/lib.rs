//! Dual-calendar obstetric date arithmetic.
//!
//! Computes gestational ages, estimated due dates, pregnancy milestones,
//! and the WHO antenatal-care schedule from a reference date, and labels
//! every resulting date in both the Gregorian and Ethiopian calendars.
//!
//! All arithmetic runs on [`AbsoluteDate`], a day-granularity epoch day
//! count; the calendars only appear at the input boundary and in
//! formatting. Every operation is a pure function of its inputs: there
//! is no I/O, no shared state, and nothing outlives a single call.
//!
//! ```
//! use obcal::{DateInput, DatingMethod, GestationReport, GregorianDate};
//!
//! let lnmp = GregorianDate::new(2024, 1, 1).unwrap();
//! let today = GregorianDate::new(2024, 9, 1).unwrap().to_absolute();
//! let report = GestationReport::build(
//!     DatingMethod::Lnmp(DateInput::Gregorian(lnmp)),
//!     today,
//! ).unwrap();
//! assert_eq!(report.gestational_age, "34 weeks, 6 days");
//! ```

mod consts;
mod convert;
mod gestation;
mod prelude;
mod scores;
mod types;

pub use consts::*;
pub use convert::{ethiopian_new_year, format_dual_date, format_ethiopian, format_gregorian};
pub use gestation::{
    AncVisit, DateInput, DatingMethod, GestationError, GestationalAge, Milestone, ResolvedTarget,
    WeekTarget, estimated_due_date, resolve_anc_schedule, resolve_milestones,
};
pub use scores::{
    Afi, AfiClassification, BishopInterpretation, BishopScore, GrowthBand, band_against_chart,
    estimated_fetal_weight, nearest_row,
};
pub use types::{
    AbsoluteDate, DateError, EthiopianDate, GregorianDate, ethiopian_days_in_month,
    gregorian_days_in_month, is_ethiopian_leap_year, is_gregorian_leap_year,
};

use serde::Serialize;

/// A milestone line in a [`GestationReport`], with its labels
/// pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneEntry {
    pub name: String,
    pub ga_label: String,
    pub date_label: String,
}

/// An antenatal-care line in a [`GestationReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AncVisitEntry {
    pub visit: String,
    pub ga_label: String,
    pub date_label: String,
    pub checklist: Vec<String>,
}

/// The complete result of one calculation: current gestational age,
/// estimated due date, milestones, and the ANC schedule, with every date
/// labelled in both calendars. Built fresh per call; nothing persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GestationReport {
    pub gestational_age: String,
    pub estimated_due_date: String,
    pub milestones: Vec<MilestoneEntry>,
    pub anc_visits: Vec<AncVisitEntry>,
}

impl GestationReport {
    /// Builds the report for the given dating method as of `today`.
    ///
    /// # Errors
    /// Returns [`GestationError::ReferenceInFuture`] if the resolved
    /// reference date lies after `today`.
    pub fn build(method: DatingMethod, today: AbsoluteDate) -> Result<Self, GestationError> {
        let reference = method.resolve_reference();
        let ga = GestationalAge::between(reference, today)?;
        let edd = estimated_due_date(reference);

        let milestones = resolve_milestones(reference, &MILESTONES)
            .into_iter()
            .map(|milestone| MilestoneEntry {
                name: milestone.name.to_owned(),
                ga_label: milestone.target.ga_label(),
                date_label: milestone.resolved.date_label(),
            })
            .collect();

        let anc_visits = resolve_anc_schedule(reference, &WHO_ANC_SCHEDULE)
            .into_iter()
            .map(|visit| AncVisitEntry {
                visit: visit.visit.to_owned(),
                ga_label: format!("{} weeks", visit.target_week),
                date_label: format_dual_date(Some(visit.date)),
                checklist: visit.checklist.iter().map(|&item| item.to_owned()).collect(),
            })
            .collect();

        Ok(Self {
            gestational_age: ga.to_string(),
            estimated_due_date: format_dual_date(Some(edd)),
            milestones,
            anc_visits,
        })
    }
}
