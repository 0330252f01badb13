use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::model::{AreaRecord, AreaStatus, ContractType, ResourceType};

// ---------------------------------------------------------------------------
// Date range – collected from the sidebar, not applied to areas
// ---------------------------------------------------------------------------

/// Inclusive date window chosen in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A window whose start falls after its end selects no dates.
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }
}

// ---------------------------------------------------------------------------
// Filter selection: accepted values per dimension
// ---------------------------------------------------------------------------

/// Accepted values for each filterable dimension.
///
/// Unlike a "no constraint when empty" filter, every dimension is always
/// active: an empty set accepts nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub contract_types: BTreeSet<ContractType>,
    pub statuses: BTreeSet<AreaStatus>,
    pub resource_types: BTreeSet<ResourceType>,
    /// Carried for the UI; areas have no date attribute so it never narrows
    /// the result.
    pub date_range: Option<DateRange>,
}

impl Default for FilterSelection {
    /// Initial sidebar state: both contract types, active areas, conventional
    /// resources.
    fn default() -> Self {
        Self {
            contract_types: ContractType::ALL.into_iter().collect(),
            statuses: BTreeSet::from([AreaStatus::Active]),
            resource_types: BTreeSet::from([ResourceType::Conventional]),
            date_range: None,
        }
    }
}

impl FilterSelection {
    /// Accept every enumerated value in every dimension.
    pub fn all() -> Self {
        Self {
            contract_types: ContractType::ALL.into_iter().collect(),
            statuses: AreaStatus::ALL.into_iter().collect(),
            resource_types: ResourceType::ALL.into_iter().collect(),
            date_range: None,
        }
    }

    /// Accept nothing in any dimension.
    pub fn none() -> Self {
        Self {
            contract_types: BTreeSet::new(),
            statuses: BTreeSet::new(),
            resource_types: BTreeSet::new(),
            date_range: None,
        }
    }

    /// Conjunction of the three membership tests.
    pub fn matches(&self, area: &AreaRecord) -> bool {
        self.contract_types.contains(&area.contract_type)
            && self.statuses.contains(&area.status)
            && self.resource_types.contains(&area.resource_type)
    }
}

/// Return indices of areas that pass the selection, in input order.
pub fn filtered_indices(areas: &[AreaRecord], selection: &FilterSelection) -> Vec<usize> {
    areas
        .iter()
        .enumerate()
        .filter(|(_, area)| selection.matches(area))
        .map(|(i, _)| i)
        .collect()
}
