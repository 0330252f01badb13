use chrono::NaiveDate;

use crate::data::engine::{compute_reference, summarize_by_resource, FilterOutcome, ResourceSummary};
use crate::data::filter::{DateRange, FilterSelection};
use crate::data::forecast::{geological_risk, BasinRisk, DiscoveryForecast};
use crate::data::indicators::{KpiDeltas, StrategicIndicators};
use crate::data::plans::{plan_rows, PlanRow};

// ---------------------------------------------------------------------------
// Derived views – everything the panels draw, rebuilt per filter change
// ---------------------------------------------------------------------------

/// Figures derived from one [`FilterOutcome`] for the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViews {
    pub kpis: KpiDeltas,
    pub resource_summary: Vec<ResourceSummary>,
    pub indicators: StrategicIndicators,
    pub plans: Vec<PlanRow>,
    pub forecast: DiscoveryForecast,
    pub risk: Vec<BasinRisk>,
}

impl DashboardViews {
    pub fn from_outcome(outcome: &FilterOutcome<'_>) -> Self {
        Self {
            kpis: KpiDeltas::from_outcome(outcome),
            resource_summary: summarize_by_resource(&outcome.matched),
            indicators: StrategicIndicators::from_outcome(outcome),
            plans: plan_rows(outcome),
            forecast: DiscoveryForecast::from_outcome(outcome),
            risk: geological_risk(outcome),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Current sidebar selection.
    pub selection: FilterSelection,

    /// Result of the last recomputation.
    pub outcome: FilterOutcome<'static>,

    pub views: DashboardViews,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,

    /// Area name under the map cursor.
    pub hovered_area: Option<String>,
}

impl AppState {
    /// Start from the default selection with a date range ending `today`.
    pub fn new(start_date: NaiveDate, today: NaiveDate) -> Self {
        let selection = FilterSelection {
            date_range: Some(DateRange::new(start_date, today)),
            ..FilterSelection::default()
        };
        let outcome = compute_reference(&selection);
        let views = DashboardViews::from_outcome(&outcome);
        Self {
            selection,
            outcome,
            views,
            status_message: None,
            hovered_area: None,
        }
    }

    /// Recompute the outcome and every derived view after a selection change.
    pub fn refilter(&mut self) {
        if let Some(range) = self.selection.date_range {
            if !range.is_valid() {
                log::warn!(
                    "date range {} .. {} is inverted; it has no effect on the area filter",
                    range.start,
                    range.end
                );
            }
        }
        self.outcome = compute_reference(&self.selection);
        self.views = DashboardViews::from_outcome(&self.outcome);
        if let Some(name) = &self.hovered_area {
            if !self.outcome.matched.iter().any(|a| &a.name == name) {
                self.hovered_area = None;
            }
        }
    }

    /// Whether the sidebar date range needs a warning.
    pub fn date_range_inverted(&self) -> bool {
        self.selection
            .date_range
            .is_some_and(|range| !range.is_valid())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::AreaStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state() -> AppState {
        AppState::new(date(2020, 1, 1), date(2025, 5, 11))
    }

    #[test]
    fn starts_with_default_selection() {
        let s = state();
        assert_eq!(s.outcome.count, 1);
        assert_eq!(s.views.kpis.progress_display, 84);
        assert_eq!(s.views.plans.len(), 6);
        assert!(!s.date_range_inverted());
    }

    #[test]
    fn refilter_picks_up_selection_changes() {
        let mut s = state();
        s.selection.statuses.insert(AreaStatus::Suspended);
        s.refilter();
        assert_eq!(s.outcome.count, 2);
        assert_eq!(s.outcome.investment_total, 730.0);
        assert_eq!(s.views.resource_summary.len(), 1);
        assert_eq!(s.views.plans[1].area_label(), "Bloque Pacífico");
    }

    #[test]
    fn inverted_date_range_leaves_areas_untouched() {
        let mut s = state();
        s.selection.date_range = Some(DateRange::new(date(2025, 1, 1), date(2020, 1, 1)));
        s.refilter();
        assert!(s.date_range_inverted());
        assert_eq!(s.outcome.count, 1);
    }

    #[test]
    fn hover_is_cleared_when_area_is_filtered_out() {
        let mut s = state();
        s.hovered_area = Some("Bloque Norte".to_string());
        s.selection.statuses.clear();
        s.refilter();
        assert!(s.hovered_area.is_none());
        assert!(s.outcome.is_empty());
    }
}
