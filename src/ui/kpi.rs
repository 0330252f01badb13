use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::engine::FilterOutcome;
use crate::data::indicators::KpiDeltas;
use crate::state::AppState;
use crate::style;

/// Text content of one KPI card.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    pub delta: String,
}

pub fn kpi_cards_content(outcome: &FilterOutcome<'_>, kpis: &KpiDeltas) -> [KpiCard; 4] {
    [
        KpiCard {
            title: "Active Areas",
            value: outcome.count.to_string(),
            delta: format!("+{} vs PY", kpis.areas_delta),
        },
        KpiCard {
            title: "Total Investment",
            value: format!("${} MUSD", outcome.investment_total),
            delta: format!("+{}% vs PY", kpis.investment_growth_pct),
        },
        KpiCard {
            title: "Total Reserves",
            value: format!("{} MMBOE", outcome.reserves_total),
            delta: format!("+{}% vs PY", kpis.reserves_growth_pct),
        },
        KpiCard {
            title: "Overall Progress",
            value: format!("{}%", kpis.progress_display),
            delta: format!("+{}pp vs PY", kpis.progress_delta_pp),
        },
    ]
}

/// Four metric cards across the top of the dashboard.
pub fn kpi_cards(ui: &mut Ui, state: &AppState) {
    let cards = kpi_cards_content(&state.outcome, &state.views.kpis);
    ui.columns(cards.len(), |cols: &mut [Ui]| {
        for (ui, card) in cols.iter_mut().zip(cards.iter()) {
            egui::Frame::group(ui.style())
                .fill(Color32::WHITE)
                .show(ui, |ui: &mut Ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(RichText::new(card.title).strong().size(16.0));
                    let value = RichText::new(&card.value).size(24.0);
                    ui.label(value.color(style::BRAND_DARK));
                    ui.label(RichText::new(&card.delta).color(style::BRAND));
                });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::engine::compute_reference;
    use crate::data::filter::FilterSelection;

    #[test]
    fn cards_for_default_selection() {
        let out = compute_reference(&FilterSelection::default());
        let cards = kpi_cards_content(&out, &KpiDeltas::from_outcome(&out));
        assert_eq!(cards[0].value, "1");
        assert_eq!(cards[1].value, "$450 MUSD");
        assert_eq!(cards[1].delta, "+9% vs PY");
        assert_eq!(cards[2].value, "1250 MMBOE");
        assert_eq!(cards[3].value, "84%");
        assert_eq!(cards[3].delta, "+19pp vs PY");
    }
}
