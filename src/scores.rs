//! Bedside scoring: the modified Bishop score, the amniotic fluid index,
//! and Hadlock estimated fetal weight, with percentile-chart banding.

use crate::consts::{AFI_NORMAL_MAX, AFI_OLIGOHYDRAMNIOS_MAX, PercentileRow};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Modified Bishop score components. Each field is the 0-based index of
/// the selected option for that cervical finding, which doubles as its
/// point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BishopScore {
    pub dilation: u8,
    pub effacement: u8,
    pub station: u8,
    pub consistency: u8,
    pub position: u8,
}

impl BishopScore {
    /// Sum of all five component scores.
    pub const fn total(self) -> u8 {
        self.dilation + self.effacement + self.station + self.consistency + self.position
    }

    /// Interpretation band for the total: favorable at 8 and above,
    /// partially favorable at 6-7, unfavorable below 6.
    pub const fn interpretation(self) -> BishopInterpretation {
        let total = self.total();
        if total >= 8 {
            BishopInterpretation::Favorable
        } else if total >= 6 {
            BishopInterpretation::PartiallyFavorable
        } else {
            BishopInterpretation::Unfavorable
        }
    }
}

/// Readiness-for-induction bands for a total Bishop score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum BishopInterpretation {
    #[display(
        fmt = "Labor is likely to start spontaneously. Induction is likely to be successful."
    )]
    Favorable,
    #[display(
        fmt = "Cervix is favorable, but may not be ready. Induction is likely to be successful."
    )]
    PartiallyFavorable,
    #[display(
        fmt = "Cervix is unfavorable. Induction is less likely to be successful. Cervical ripening may be needed."
    )]
    Unfavorable,
}

/// Amniotic fluid index: the four quadrant pocket depths in cm.
/// Negative inputs clamp to zero at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Afi {
    q1: f64,
    q2: f64,
    q3: f64,
    q4: f64,
}

impl Afi {
    /// Creates an AFI from the four quadrant measurements, clamping each
    /// to be non-negative.
    pub fn new(q1: f64, q2: f64, q3: f64, q4: f64) -> Self {
        Self {
            q1: q1.max(0.0),
            q2: q2.max(0.0),
            q3: q3.max(0.0),
            q4: q4.max(0.0),
        }
    }

    /// Sum of the four quadrant measurements in cm.
    pub fn total(self) -> f64 {
        self.q1 + self.q2 + self.q3 + self.q4
    }

    /// Band for the total: at or below 5 is oligohydramnios, above 24 is
    /// polyhydramnios, in between is normal.
    pub fn classification(self) -> AfiClassification {
        let total = self.total();
        if total <= AFI_OLIGOHYDRAMNIOS_MAX {
            AfiClassification::Oligohydramnios
        } else if total <= AFI_NORMAL_MAX {
            AfiClassification::Normal
        } else {
            AfiClassification::Polyhydramnios
        }
    }
}

/// Amniotic fluid volume bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum AfiClassification {
    #[display(fmt = "Oligohydramnios")]
    Oligohydramnios,
    #[display(fmt = "Normal")]
    Normal,
    #[display(fmt = "Polyhydramnios")]
    Polyhydramnios,
}

/// Hadlock 1985 estimated fetal weight in grams from biometry in cm.
///
/// Returns `None` when any measurement is missing (zero or negative);
/// the BPD is part of the measurement set even though the formula itself
/// does not use it.
pub fn estimated_fetal_weight(bpd: f64, hc: f64, ac: f64, fl: f64) -> Option<f64> {
    if bpd <= 0.0 || hc <= 0.0 || ac <= 0.0 || fl <= 0.0 {
        return None;
    }
    let exponent = 1.326 - 0.00326 * ac * fl + 0.0107 * hc + 0.0438 * ac + 0.158 * fl;
    Some(10f64.powf(exponent))
}

/// Where a measurement falls against a percentile reference chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum GrowthBand {
    #[display(fmt = "Below 5th percentile")]
    BelowP5,
    #[display(fmt = "Within 5th-95th percentile")]
    Typical,
    #[display(fmt = "Above 95th percentile")]
    AboveP95,
}

/// The chart row whose gestational week is nearest to `ga_weeks`, or
/// `None` for an empty chart. Ties resolve to the earlier row.
pub fn nearest_row(chart: &[PercentileRow], ga_weeks: u16) -> Option<&PercentileRow> {
    chart.iter().min_by_key(|row| row.ga_weeks.abs_diff(ga_weeks))
}

/// Bands `value` against the chart row nearest to `ga_weeks`.
pub fn band_against_chart(
    chart: &[PercentileRow],
    ga_weeks: u16,
    value: f64,
) -> Option<GrowthBand> {
    let row = nearest_row(chart, ga_weeks)?;
    let band = if value < row.p5 {
        GrowthBand::BelowP5
    } else if value > row.p95 {
        GrowthBand::AboveP95
    } else {
        GrowthBand::Typical
    };
    Some(band)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{AFI_CHART, EFW_CHART};

    #[test]
    fn bishop_total_is_component_sum() {
        let score = BishopScore {
            dilation: 2,
            effacement: 3,
            station: 1,
            consistency: 2,
            position: 1,
        };
        assert_eq!(score.total(), 9);
    }

    #[test]
    fn bishop_interpretation_bands() {
        let mut score = BishopScore {
            dilation: 0,
            effacement: 0,
            station: 0,
            consistency: 0,
            position: 0,
        };
        assert_eq!(score.interpretation(), BishopInterpretation::Unfavorable);

        score.dilation = 3;
        score.effacement = 2;
        score.station = 1;
        assert_eq!(score.total(), 6);
        assert_eq!(
            score.interpretation(),
            BishopInterpretation::PartiallyFavorable
        );

        score.consistency = 2;
        assert_eq!(score.total(), 8);
        assert_eq!(score.interpretation(), BishopInterpretation::Favorable);
    }

    #[test]
    fn afi_total_sums_quadrants() {
        let afi = Afi::new(4.0, 5.0, 4.0, 5.0);
        assert!((afi.total() - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn afi_clamps_negative_quadrants() {
        let afi = Afi::new(-2.0, 3.0, 0.0, 1.0);
        assert!((afi.total() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn afi_boundary_values() {
        // 5 is oligohydramnios, 6 and 24 are normal, 25 is polyhydramnios
        assert_eq!(
            Afi::new(5.0, 0.0, 0.0, 0.0).classification(),
            AfiClassification::Oligohydramnios
        );
        assert_eq!(
            Afi::new(6.0, 0.0, 0.0, 0.0).classification(),
            AfiClassification::Normal
        );
        assert_eq!(
            Afi::new(6.0, 6.0, 6.0, 6.0).classification(),
            AfiClassification::Normal
        );
        assert_eq!(
            Afi::new(7.0, 6.0, 6.0, 6.0).classification(),
            AfiClassification::Polyhydramnios
        );
    }

    #[test]
    fn efw_hadlock_reference_values() {
        // default inputs from the biometry form: BPD 8.7, HC 31, AC 28, FL 6.2
        let efw = estimated_fetal_weight(8.7, 31.0, 28.0, 6.2).unwrap();
        let expected = 10f64
            .powf(1.326 - 0.00326 * 28.0 * 6.2 + 0.0107 * 31.0 + 0.0438 * 28.0 + 0.158 * 6.2);
        assert!((efw - expected).abs() < 1e-9);
        // rises with abdominal circumference
        let larger = estimated_fetal_weight(8.7, 31.0, 30.0, 6.2).unwrap();
        assert!(larger > efw);
    }

    #[test]
    fn efw_requires_all_measurements() {
        assert_eq!(estimated_fetal_weight(0.0, 31.0, 28.0, 6.2), None);
        assert_eq!(estimated_fetal_weight(8.7, 31.0, -1.0, 6.2), None);
    }

    #[test]
    fn nearest_row_picks_closest_week() {
        let row = nearest_row(&EFW_CHART, 33).unwrap();
        assert_eq!(row.ga_weeks, 32);
        let row = nearest_row(&EFW_CHART, 19).unwrap();
        assert_eq!(row.ga_weeks, 20);
        assert!(nearest_row(&[], 20).is_none());
    }

    #[test]
    fn banding_against_charts() {
        // EFW row at 32 weeks: p5 1500, p95 2200
        assert_eq!(
            band_against_chart(&EFW_CHART, 32, 1400.0),
            Some(GrowthBand::BelowP5)
        );
        assert_eq!(
            band_against_chart(&EFW_CHART, 32, 1800.0),
            Some(GrowthBand::Typical)
        );
        assert_eq!(
            band_against_chart(&EFW_CHART, 32, 2300.0),
            Some(GrowthBand::AboveP95)
        );
        // AFI row at 28 weeks: p5 10.0, p95 22.5
        assert_eq!(
            band_against_chart(&AFI_CHART, 28, 14.5),
            Some(GrowthBand::Typical)
        );
    }
}
