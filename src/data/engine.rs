use super::filter::{filtered_indices, FilterSelection};
use super::model::{reference_areas, AreaRecord, ResourceType};

/// Baseline of the progress heuristic before any area contributes.
pub const PROGRESS_BASE: f64 = 70.0;

// ---------------------------------------------------------------------------
// FilterOutcome – matched areas plus derived metrics
// ---------------------------------------------------------------------------

/// Result of narrowing an area set with a [`FilterSelection`].
///
/// Every field is a pure function of `matched`; the outcome is rebuilt on
/// each call to [`compute`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    /// Areas that passed every filter, in input order.
    pub matched: Vec<&'a AreaRecord>,
    pub count: usize,
    pub investment_total: f64,
    pub reserves_total: f64,
    /// `min(100, 70 + 10*count + investment_total/100)`, a display heuristic.
    pub progress_pct: f64,
}

impl FilterOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

/// Progress heuristic shown on the KPI cards.
pub fn progress_pct(count: usize, investment_total: f64) -> f64 {
    (PROGRESS_BASE + count as f64 * 10.0 + investment_total / 100.0).min(100.0)
}

/// Filter `areas` with `selection` and derive the aggregate metrics.
///
/// Total over every input: empty selections and selections naming values no
/// area carries simply produce an empty outcome.
pub fn compute<'a>(areas: &'a [AreaRecord], selection: &FilterSelection) -> FilterOutcome<'a> {
    let matched: Vec<&AreaRecord> = filtered_indices(areas, selection)
        .into_iter()
        .map(|i| &areas[i])
        .collect();

    let count = matched.len();
    let investment_total: f64 = matched.iter().map(|a| a.investment_musd).sum();
    let reserves_total: f64 = matched.iter().map(|a| a.reserves_mmboe).sum();
    let progress_pct = progress_pct(count, investment_total);

    log::debug!(
        "filter matched {count}/{} areas: investment={investment_total} reserves={reserves_total} progress={progress_pct}",
        areas.len()
    );

    FilterOutcome {
        matched,
        count,
        investment_total,
        reserves_total,
        progress_pct,
    }
}

/// [`compute`] against the static reference area set.
pub fn compute_reference(selection: &FilterSelection) -> FilterOutcome<'static> {
    compute(reference_areas(), selection)
}

// ---------------------------------------------------------------------------
// Per-resource summary (side table next to the map)
// ---------------------------------------------------------------------------

/// Investment and reserves grouped by resource type.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSummary {
    pub resource_type: ResourceType,
    pub investment_musd: f64,
    pub reserves_mmboe: f64,
}

/// Group matched areas by resource type. Only types present appear, ordered
/// as in [`ResourceType::ALL`].
pub fn summarize_by_resource(matched: &[&AreaRecord]) -> Vec<ResourceSummary> {
    ResourceType::ALL
        .into_iter()
        .filter_map(|rt| {
            let group: Vec<&&AreaRecord> =
                matched.iter().filter(|a| a.resource_type == rt).collect();
            if group.is_empty() {
                return None;
            }
            Some(ResourceSummary {
                resource_type: rt,
                investment_musd: group.iter().map(|a| a.investment_musd).sum(),
                reserves_mmboe: group.iter().map(|a| a.reserves_mmboe).sum(),
            })
        })
        .collect()
}
