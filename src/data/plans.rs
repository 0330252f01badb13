use std::fmt;

use super::engine::FilterOutcome;

/// Operators tracked in the plan table, one row each.
pub const OPERATORS: [&str; 6] = ["Pemex", "BP", "Shell", "Total", "Chevron", "Eni"];

/// Area column placeholder for operators without a matched area.
pub const NO_AREA: &str = "N/A";

/// Review stage of an operator's exploration plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanStatus {
    UnderEvaluation,
    Approved,
    UnderReview,
    InExecution,
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanStatus::UnderEvaluation => write!(f, "Under Evaluation"),
            PlanStatus::Approved => write!(f, "Approved"),
            PlanStatus::UnderReview => write!(f, "Under Review"),
            PlanStatus::InExecution => write!(f, "In Execution"),
        }
    }
}

const PLAN_STATUSES: [PlanStatus; 6] = [
    PlanStatus::UnderEvaluation,
    PlanStatus::Approved,
    PlanStatus::UnderReview,
    PlanStatus::Approved,
    PlanStatus::InExecution,
    PlanStatus::Approved,
];

#[derive(Debug, Clone, PartialEq)]
pub struct PlanRow {
    pub operator: &'static str,
    /// Matched area name, or `None` when there are fewer areas than operators.
    pub area: Option<String>,
    pub progress_pct: f64,
    pub status: PlanStatus,
    pub investment_musd: f64,
}

impl PlanRow {
    pub fn area_label(&self) -> &str {
        self.area.as_deref().unwrap_or(NO_AREA)
    }

    pub fn has_data(&self) -> bool {
        self.area.is_some()
    }
}

/// One row per operator, pairing operators with matched areas in order.
pub fn plan_rows(outcome: &FilterOutcome<'_>) -> Vec<PlanRow> {
    OPERATORS
        .iter()
        .zip(PLAN_STATUSES)
        .enumerate()
        .map(|(i, (&operator, status))| {
            let step = i as f64;
            PlanRow {
                operator,
                area: outcome.matched.get(i).map(|a| a.name.clone()),
                progress_pct: (70.0 + step * 5.0 + outcome.investment_total / 100.0).min(100.0),
                status,
                investment_musd: (200.0 + step * 50.0 + outcome.reserves_total / 10.0).max(100.0),
            }
        })
        .collect()
}

/// Investment per operator for rows backed by a real area.
pub fn investment_distribution(rows: &[PlanRow]) -> Vec<(&'static str, f64)> {
    rows.iter()
        .filter(|r| r.has_data())
        .map(|r| (r.operator, r.investment_musd))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::engine::compute_reference;
    use crate::data::filter::FilterSelection;

    #[test]
    fn default_selection_pads_areas() {
        let out = compute_reference(&FilterSelection::default());
        let rows = plan_rows(&out);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].area_label(), "Bloque Norte");
        assert!(rows[1..].iter().all(|r| r.area_label() == NO_AREA && !r.has_data()));

        assert_eq!(rows[0].progress_pct, 74.5);
        assert_eq!(rows[5].progress_pct, 99.5);
        assert_eq!(rows[0].investment_musd, 325.0);
        assert_eq!(rows[5].investment_musd, 575.0);
        assert_eq!(rows[4].status, PlanStatus::InExecution);

        assert_eq!(investment_distribution(&rows), vec![("Pemex", 325.0)]);
    }

    #[test]
    fn progress_caps_at_100() {
        let out = compute_reference(&FilterSelection::all());
        let rows = plan_rows(&out);
        // 70 + 25 + 10.5
        assert_eq!(rows[5].progress_pct, 100.0);
        assert_eq!(
            rows.iter().map(|r| r.area_label()).collect::<Vec<_>>(),
            vec!["Bloque Norte", "Bloque Este", "Bloque Pacífico", "N/A", "N/A", "N/A"]
        );
        assert_eq!(investment_distribution(&rows).len(), 3);
    }

    #[test]
    fn empty_outcome_has_no_distribution() {
        let out = compute_reference(&FilterSelection::none());
        let rows = plan_rows(&out);
        assert!(rows.iter().all(|r| !r.has_data()));
        assert_eq!(rows[0].investment_musd, 200.0);
        assert!(investment_distribution(&rows).is_empty());
    }
}
