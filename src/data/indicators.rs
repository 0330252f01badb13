//! KPI deltas and strategic indicators derived from a [`FilterOutcome`].
//!
//! These are display formulas layered on top of the engine's four outputs;
//! they carry no meaning beyond the arithmetic below.

use std::fmt;

use super::engine::FilterOutcome;

// ---------------------------------------------------------------------------
// KPI cards – "vs previous year" figures
// ---------------------------------------------------------------------------

/// Figures printed under each KPI card. Fractions are truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiDeltas {
    pub areas_delta: i64,
    pub investment_growth_pct: i64,
    pub reserves_growth_pct: i64,
    /// Progress shown on the card, whole percent.
    pub progress_display: i64,
    pub progress_delta_pp: i64,
}

impl KpiDeltas {
    pub fn from_outcome(outcome: &FilterOutcome<'_>) -> Self {
        Self {
            areas_delta: (outcome.count as i64 - 2).max(0),
            investment_growth_pct: (outcome.investment_total / 50.0).trunc() as i64,
            reserves_growth_pct: (outcome.reserves_total / 100.0).trunc() as i64,
            progress_display: outcome.progress_pct.trunc() as i64,
            progress_delta_pp: (outcome.progress_pct - 65.0).trunc() as i64,
        }
    }
}

// ---------------------------------------------------------------------------
// Strategic indicators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    ReserveRestitution,
    Production,
    EvaluationProgress,
    NationalContent,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 4] = [
        IndicatorKind::ReserveRestitution,
        IndicatorKind::Production,
        IndicatorKind::EvaluationProgress,
        IndicatorKind::NationalContent,
    ];

    pub fn target(self) -> f64 {
        match self {
            IndicatorKind::ReserveRestitution => 90.0,
            IndicatorKind::Production => 1800.0,
            IndicatorKind::EvaluationProgress => 85.0,
            IndicatorKind::NationalContent => 70.0,
        }
    }

    /// Percentage indicators report their variation in percentage points.
    pub fn is_percentage(self) -> bool {
        !matches!(self, IndicatorKind::Production)
    }

    /// Short label used on the radar chart axes.
    pub fn short_label(self) -> &'static str {
        match self {
            IndicatorKind::ReserveRestitution => "Restitution",
            IndicatorKind::Production => "Production",
            IndicatorKind::EvaluationProgress => "Evaluation",
            IndicatorKind::NationalContent => "National content",
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorKind::ReserveRestitution => write!(f, "Reserve Restitution Rate (%)"),
            IndicatorKind::Production => write!(f, "Total Production (thousand bbl/day)"),
            IndicatorKind::EvaluationProgress => write!(f, "Plan Evaluation Progress (%)"),
            IndicatorKind::NationalContent => write!(f, "National Content Compliance (%)"),
        }
    }
}

/// One row of the indicator table.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub kind: IndicatorKind,
    pub value: f64,
    pub target: f64,
}

impl Indicator {
    fn new(kind: IndicatorKind, value: f64) -> Self {
        Self {
            kind,
            value,
            target: kind.target(),
        }
    }

    pub fn meets_target(&self) -> bool {
        self.value >= self.target
    }

    /// Signed difference from the target, e.g. `+4.5pp` or `-250`.
    pub fn variation(&self) -> String {
        let diff = self.value - self.target;
        if self.kind.is_percentage() {
            format!("{diff:+.1}pp")
        } else {
            format!("{diff:+.0}")
        }
    }
}

/// The four strategic indicators in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategicIndicators {
    pub rows: Vec<Indicator>,
}

impl StrategicIndicators {
    pub fn from_outcome(outcome: &FilterOutcome<'_>) -> Self {
        let count = outcome.count as f64;
        let rows = IndicatorKind::ALL
            .into_iter()
            .map(|kind| {
                let value = match kind {
                    IndicatorKind::ReserveRestitution => {
                        (90.0 + count * 2.0 + outcome.reserves_total / 100.0).min(100.0)
                    }
                    IndicatorKind::Production => {
                        1500.0 + count * 50.0 + outcome.investment_total / 10.0
                    }
                    IndicatorKind::EvaluationProgress => outcome.progress_pct * 0.9,
                    IndicatorKind::NationalContent => 65.0 + count * 2.0,
                };
                Indicator::new(kind, value)
            })
            .collect();
        Self { rows }
    }

    /// Upper bound of the radar chart's radial axis.
    pub fn radar_range(&self) -> f64 {
        let max = self
            .rows
            .iter()
            .flat_map(|r| [r.value, r.target])
            .fold(0.0_f64, f64::max);
        max * 1.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::engine::compute_reference;
    use crate::data::filter::FilterSelection;

    fn get(ind: &StrategicIndicators, kind: IndicatorKind) -> Option<&Indicator> {
        ind.rows.iter().find(|r| r.kind == kind)
    }

    #[test]
    fn kpi_deltas_for_default_selection() {
        let out = compute_reference(&FilterSelection::default());
        let k = KpiDeltas::from_outcome(&out);
        assert_eq!(k.areas_delta, 0);
        assert_eq!(k.investment_growth_pct, 9);
        assert_eq!(k.reserves_growth_pct, 12);
        assert_eq!(k.progress_display, 84);
        assert_eq!(k.progress_delta_pp, 19);
    }

    #[test]
    fn kpi_deltas_with_everything_selected() {
        let out = compute_reference(&FilterSelection::all());
        let k = KpiDeltas::from_outcome(&out);
        assert_eq!(k.areas_delta, 1);
        assert_eq!(k.investment_growth_pct, 21);
        assert_eq!(k.reserves_growth_pct, 27);
        assert_eq!(k.progress_display, 100);
        assert_eq!(k.progress_delta_pp, 35);
    }

    #[test]
    fn indicators_for_default_selection() {
        let out = compute_reference(&FilterSelection::default());
        let ind = StrategicIndicators::from_outcome(&out);
        let value = |k| get(&ind, k).unwrap().value;

        // 90 + 2 + 12.5 capped
        assert_eq!(value(IndicatorKind::ReserveRestitution), 100.0);
        assert_eq!(value(IndicatorKind::Production), 1595.0);
        assert!((value(IndicatorKind::EvaluationProgress) - 76.05).abs() < 1e-9);
        assert_eq!(value(IndicatorKind::NationalContent), 67.0);

        let prod = get(&ind, IndicatorKind::Production).unwrap();
        assert!(!prod.meets_target());
        assert_eq!(prod.variation(), "-205");

        let nc = get(&ind, IndicatorKind::NationalContent).unwrap();
        assert_eq!(nc.variation(), "-3.0pp");

        let rr = get(&ind, IndicatorKind::ReserveRestitution).unwrap();
        assert!(rr.meets_target());
        assert_eq!(rr.variation(), "+10.0pp");
    }

    #[test]
    fn indicators_for_empty_outcome() {
        let out = compute_reference(&FilterSelection::none());
        let ind = StrategicIndicators::from_outcome(&out);
        assert_eq!(ind.rows.len(), 4);
        assert_eq!(get(&ind, IndicatorKind::ReserveRestitution).unwrap().value, 90.0);
        assert_eq!(get(&ind, IndicatorKind::Production).unwrap().value, 1500.0);
        assert_eq!(get(&ind, IndicatorKind::EvaluationProgress).unwrap().value, 63.0);
        // 1800 is the largest of all values and targets
        assert!((ind.radar_range() - 1980.0).abs() < 1e-9);
    }
}
