use std::fmt;

use super::engine::FilterOutcome;

pub const FORECAST_YEARS: [i32; 4] = [2024, 2025, 2026, 2027];

pub const BASINS: [&str; 5] = ["Burgos", "Sabinas", "Tampico", "Veracruz", "Sureste"];

const MAX_RISK: f64 = 0.9;

// ---------------------------------------------------------------------------
// Discovery forecast
// ---------------------------------------------------------------------------

/// Expected discoveries per year under three scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryForecast {
    pub years: Vec<i32>,
    pub conservative: Vec<i64>,
    pub base: Vec<i64>,
    pub optimistic: Vec<i64>,
}

impl DiscoveryForecast {
    pub fn from_outcome(outcome: &FilterOutcome<'_>) -> Self {
        let base = outcome.count as f64 * 2.0 + outcome.investment_total / 200.0;
        let steps = 0..FORECAST_YEARS.len();
        Self {
            years: FORECAST_YEARS.to_vec(),
            conservative: steps
                .clone()
                .map(|i| (base * 0.8 + i as f64).trunc() as i64)
                .collect(),
            base: steps
                .clone()
                .map(|i| (base + i as f64 * 1.5).trunc() as i64)
                .collect(),
            optimistic: steps
                .map(|i| (base * 1.2 + i as f64 * 2.0).trunc() as i64)
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Geological risk
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub fn classify(probability: f64) -> Self {
        if probability > 0.6 {
            RiskBand::High
        } else if probability > 0.3 {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskBand::Low => write!(f, "Low"),
            RiskBand::Medium => write!(f, "Medium"),
            RiskBand::High => write!(f, "High"),
        }
    }
}

/// Probability of failure for one basin.
#[derive(Debug, Clone, PartialEq)]
pub struct BasinRisk {
    pub basin: &'static str,
    pub probability: f64,
    pub band: RiskBand,
}

/// Risk per basin; more matched areas lower the baseline.
pub fn geological_risk(outcome: &FilterOutcome<'_>) -> Vec<BasinRisk> {
    let base_risk = 0.3 + 0.5 / (outcome.count as f64 + 1.0);
    BASINS
        .iter()
        .enumerate()
        .map(|(i, &basin)| {
            let probability = (base_risk + i as f64 * 0.1).min(MAX_RISK);
            BasinRisk {
                basin,
                probability,
                band: RiskBand::classify(probability),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::engine::compute_reference;
    use crate::data::filter::FilterSelection;

    #[test]
    fn forecast_for_default_selection() {
        // base = 2 + 2.25
        let out = compute_reference(&FilterSelection::default());
        let f = DiscoveryForecast::from_outcome(&out);
        assert_eq!(f.years, vec![2024, 2025, 2026, 2027]);
        assert_eq!(f.conservative, vec![3, 4, 5, 6]);
        assert_eq!(f.base, vec![4, 5, 7, 8]);
        assert_eq!(f.optimistic, vec![5, 7, 9, 11]);
    }

    #[test]
    fn forecast_for_empty_outcome_starts_at_zero() {
        let out = compute_reference(&FilterSelection::none());
        let f = DiscoveryForecast::from_outcome(&out);
        assert_eq!(f.conservative, vec![0, 1, 2, 3]);
        assert_eq!(f.base, vec![0, 1, 3, 4]);
        assert_eq!(f.optimistic, vec![0, 2, 4, 6]);
    }

    #[test]
    fn risk_with_no_areas_saturates() {
        let out = compute_reference(&FilterSelection::none());
        let risk = geological_risk(&out);
        assert_eq!(risk.len(), 5);
        assert!((risk[0].probability - 0.8).abs() < 1e-9);
        assert_eq!(risk[0].band, RiskBand::High);
        assert!(risk[1..].iter().all(|r| (r.probability - MAX_RISK).abs() < 1e-9));
    }

    #[test]
    fn risk_bands_for_default_selection() {
        // base_risk = 0.3 + 0.25
        let out = compute_reference(&FilterSelection::default());
        let risk = geological_risk(&out);
        assert!((risk[0].probability - 0.55).abs() < 1e-9);
        assert_eq!(risk[0].band, RiskBand::Medium);
        assert_eq!(risk[1].band, RiskBand::High);
        assert_eq!(risk[4].probability, MAX_RISK);
    }

    #[test]
    fn classify_boundaries_are_exclusive() {
        assert_eq!(RiskBand::classify(0.3), RiskBand::Low);
        assert_eq!(RiskBand::classify(0.31), RiskBand::Medium);
        assert_eq!(RiskBand::classify(0.6), RiskBand::Medium);
        assert_eq!(RiskBand::classify(0.61), RiskBand::High);
    }
}
