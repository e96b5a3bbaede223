use crate::gestation::WeekTarget;

/// Days of gestation from the reference date (LNMP) to the estimated due
/// date: the fixed 40-week convention.
pub const GESTATION_DAYS: i32 = 280;

/// Days per week, used when resolving week targets to dates.
pub const DAYS_PER_WEEK: i32 = 7;

/// Maximum valid Gregorian month (December)
pub const MAX_GREGORIAN_MONTH: u8 = 12;

/// Maximum valid Ethiopian month (Pagume)
pub const MAX_ETHIOPIAN_MONTH: u8 = 13;

/// Month number of Pagume, the short 13th Ethiopian month
pub const PAGUME: u8 = 13;

/// Days in Pagume in a common Ethiopian year
pub const PAGUME_DAYS: u8 = 5;

/// Days in Pagume in an Ethiopian leap year
pub const PAGUME_DAYS_LEAP: u8 = 6;

/// Every Ethiopian month except Pagume has exactly 30 days
pub const ETHIOPIAN_MONTH_DAYS: u8 = 30;

/// Gregorian month the Ethiopian New Year falls in (September)
pub const NEW_YEAR_GREGORIAN_MONTH: u8 = 9;

/// Ethiopian New Year day in September for a common year
pub const NEW_YEAR_GREGORIAN_DAY: u8 = 11;

/// Ethiopian New Year day in September for a leap year
pub const NEW_YEAR_GREGORIAN_DAY_LEAP: u8 = 12;

/// Offset between an Ethiopian year and the Gregorian year its New Year
/// falls in: Meskerem 1 of Ethiopian year `y` is in Gregorian year `y + 7`.
pub const ETHIOPIAN_YEAR_OFFSET: i32 = 7;

/// Sentinel label for an absent date
pub const NOT_AVAILABLE: &str = "N/A";

/// Short Gregorian month names (index 0 is January)
pub const GREGORIAN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Ethiopian month names (index 0 is Meskerem, index 12 is Pagume)
pub const ETHIOPIAN_MONTHS: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miyazya", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

/// A named pregnancy milestone with its target gestational week or range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneSpec {
    pub name: &'static str,
    pub target: WeekTarget,
}

/// Pregnancy milestones in display order. The order of this table is
/// significant and is reproduced verbatim in resolver output.
pub static MILESTONES: [MilestoneSpec; 7] = [
    MilestoneSpec {
        name: "1st FHR (Doppler)",
        target: WeekTarget::Range(10, 12),
    },
    MilestoneSpec {
        name: "Routine Anatomic Scan",
        target: WeekTarget::Range(18, 22),
    },
    MilestoneSpec {
        name: "GA of Viability",
        target: WeekTarget::Week(24),
    },
    MilestoneSpec {
        name: "2hr OGTT",
        target: WeekTarget::Range(24, 28),
    },
    MilestoneSpec {
        name: "Anti-D Prophylaxis",
        target: WeekTarget::Week(28),
    },
    MilestoneSpec {
        name: "Antepartum Fetal Surveillance (High Risk)",
        target: WeekTarget::Week(32),
    },
    MilestoneSpec {
        name: "Post-term Pregnancy After",
        target: WeekTarget::Week(42),
    },
];

/// A scheduled antenatal-care contact with its checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncVisitSpec {
    pub visit: &'static str,
    pub weeks: u16,
    pub checklist: &'static [&'static str],
}

/// The WHO eight-contact antenatal-care schedule, in display order.
pub static WHO_ANC_SCHEDULE: [AncVisitSpec; 8] = [
    AncVisitSpec {
        visit: "First contact",
        weeks: 12,
        checklist: &[
            "Blood group & Rh",
            "Hemoglobin (Hb)",
            "HIV, Syphilis, Hep B serology",
            "Urine test for proteinuria",
            "Tetanus-diphtheria (Td) vaccine #1",
            "Folic acid & iron supplementation",
            "Counseling on nutrition, danger signs",
        ],
    },
    AncVisitSpec {
        visit: "Second contact",
        weeks: 20,
        checklist: &[
            "Routine anatomic ultrasound scan",
            "Symphysial-fundal height (SFH) measurement",
            "Review birth plan",
            "Follow-up on initial tests",
        ],
    },
    AncVisitSpec {
        visit: "Third contact",
        weeks: 26,
        checklist: &[
            "Repeat Hb test for anemia",
            "Oral Glucose Tolerance Test (OGTT) if indicated",
            "SFH measurement",
            "Counseling on fetal movements",
        ],
    },
    AncVisitSpec {
        visit: "Fourth contact",
        weeks: 30,
        checklist: &[
            "SFH measurement",
            "Review danger signs",
            "Birth and emergency plan preparedness",
        ],
    },
    AncVisitSpec {
        visit: "Fifth contact",
        weeks: 34,
        checklist: &[
            "SFH measurement",
            "Td vaccine #2 (if needed)",
            "Counseling on signs of labor and breastfeeding",
        ],
    },
    AncVisitSpec {
        visit: "Sixth contact",
        weeks: 36,
        checklist: &[
            "Assess fetal presentation and position",
            "SFH measurement",
            "Review birth plan",
            "Counseling on postpartum care",
        ],
    },
    AncVisitSpec {
        visit: "Seventh contact",
        weeks: 38,
        checklist: &[
            "SFH measurement",
            "Assess fetal well-being",
            "Finalize birth and emergency plan",
        ],
    },
    AncVisitSpec {
        visit: "Eighth contact",
        weeks: 40,
        checklist: &[
            "Assess fetal well-being",
            "Discuss management of prolonged pregnancy if post-term",
            "SFH measurement",
        ],
    },
];

/// AFI at or below this value is oligohydramnios (cm)
pub const AFI_OLIGOHYDRAMNIOS_MAX: f64 = 5.0;

/// AFI above the oligohydramnios bound and at or below this value is
/// normal; above it is polyhydramnios (cm)
pub const AFI_NORMAL_MAX: f64 = 24.0;

/// One row of a percentile reference chart, keyed by gestational week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileRow {
    pub ga_weeks: u16,
    pub p5: f64,
    pub p50: f64,
    pub p95: f64,
}

/// WHO fetal growth chart, estimated fetal weight in grams.
/// Values are illustrative.
pub static EFW_CHART: [PercentileRow; 11] = [
    PercentileRow { ga_weeks: 20, p5: 280.0, p50: 330.0, p95: 390.0 },
    PercentileRow { ga_weeks: 22, p5: 420.0, p50: 500.0, p95: 600.0 },
    PercentileRow { ga_weeks: 24, p5: 580.0, p50: 670.0, p95: 800.0 },
    PercentileRow { ga_weeks: 26, p5: 750.0, p50: 890.0, p95: 1050.0 },
    PercentileRow { ga_weeks: 28, p5: 950.0, p50: 1150.0, p95: 1380.0 },
    PercentileRow { ga_weeks: 30, p5: 1200.0, p50: 1450.0, p95: 1750.0 },
    PercentileRow { ga_weeks: 32, p5: 1500.0, p50: 1800.0, p95: 2200.0 },
    PercentileRow { ga_weeks: 34, p5: 1850.0, p50: 2250.0, p95: 2700.0 },
    PercentileRow { ga_weeks: 36, p5: 2200.0, p50: 2700.0, p95: 3250.0 },
    PercentileRow { ga_weeks: 38, p5: 2550.0, p50: 3100.0, p95: 3750.0 },
    PercentileRow { ga_weeks: 40, p5: 2800.0, p50: 3450.0, p95: 4200.0 },
];

/// Amniotic fluid index reference chart in cm, after Moore and Cayle, 1990.
/// Values are illustrative.
pub static AFI_CHART: [PercentileRow; 8] = [
    PercentileRow { ga_weeks: 16, p5: 7.3, p50: 12.1, p95: 18.3 },
    PercentileRow { ga_weeks: 20, p5: 8.5, p50: 13.5, p95: 20.0 },
    PercentileRow { ga_weeks: 24, p5: 9.5, p50: 14.2, p95: 21.2 },
    PercentileRow { ga_weeks: 28, p5: 10.0, p50: 14.5, p95: 22.5 },
    PercentileRow { ga_weeks: 32, p5: 9.0, p50: 14.4, p95: 24.0 },
    PercentileRow { ga_weeks: 36, p5: 7.8, p50: 13.5, p95: 25.5 },
    PercentileRow { ga_weeks: 40, p5: 6.8, p50: 12.5, p95: 24.5 },
    PercentileRow { ga_weeks: 42, p5: 5.0, p50: 11.0, p95: 20.0 },
];
