use eframe::egui::{RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::data::forecast::DiscoveryForecast;
use crate::state::AppState;
use crate::style;

fn series(years: &[i32], values: &[i64]) -> Vec<[f64; 2]> {
    years
        .iter()
        .zip(values)
        .map(|(&y, &v)| [y as f64, v as f64])
        .collect()
}

/// Band between the conservative and optimistic scenarios.
fn scenario_band(forecast: &DiscoveryForecast) -> Vec<[f64; 2]> {
    let mut band = series(&forecast.years, &forecast.conservative);
    band.extend(series(&forecast.years, &forecast.optimistic).into_iter().rev());
    band
}

/// Discoveries per year under the three scenarios.
pub fn discovery_forecast(ui: &mut Ui, state: &AppState) {
    let forecast = &state.views.forecast;
    ui.label(RichText::new("Discovery forecast").strong());

    Plot::new("discovery_forecast")
        .height(280.0)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Discoveries")
        .include_y(0.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.polygon(
                Polygon::new(PlotPoints::new(scenario_band(forecast)))
                    .fill_color(style::BRAND_LIGHT.gamma_multiply(0.2))
                    .stroke(Stroke::NONE),
            );
            plot_ui.line(
                Line::new(PlotPoints::new(series(&forecast.years, &forecast.optimistic)))
                    .name("Optimistic")
                    .color(style::BRAND_LIGHT)
                    .width(2.0)
                    .style(LineStyle::dotted_dense()),
            );
            plot_ui.line(
                Line::new(PlotPoints::new(series(&forecast.years, &forecast.base)))
                    .name("Base")
                    .color(style::BRAND)
                    .width(3.0),
            );
            plot_ui.line(
                Line::new(PlotPoints::new(series(&forecast.years, &forecast.conservative)))
                    .name("Conservative")
                    .color(style::BRAND_DARK)
                    .width(2.0)
                    .style(LineStyle::dashed_loose()),
            );
        });
}

/// Probability of failure per basin, coloured by risk band.
pub fn geological_risk(ui: &mut Ui, state: &AppState) {
    let risk = &state.views.risk;
    ui.label(RichText::new("Geological risk index").strong());

    let bars: Vec<Bar> = risk
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Bar::new(i as f64, r.probability)
                .name(format!("{} ({})", r.basin, r.band))
                .fill(style::risk_color(r.band))
                .width(0.6)
        })
        .collect();

    Plot::new("geological_risk")
        .height(280.0)
        .y_axis_label("Probability of failure")
        .include_y(0.0)
        .include_y(1.0)
        .show_x(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
            for (i, r) in risk.iter().enumerate() {
                plot_ui.text(Text::new(
                    PlotPoint::new(i as f64, r.probability + 0.05),
                    RichText::new(format!("{}\n{:.0}%", r.basin, r.probability * 100.0))
                        .small(),
                ));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::engine::compute_reference;
    use crate::data::filter::FilterSelection;

    #[test]
    fn band_wraps_between_scenarios() {
        let out = compute_reference(&FilterSelection::default());
        let f = DiscoveryForecast::from_outcome(&out);
        let band = scenario_band(&f);
        assert_eq!(band.len(), 8);
        assert_eq!(band[0], [2024.0, 3.0]);
        assert_eq!(band[3], [2027.0, 6.0]);
        assert_eq!(band[4], [2027.0, 11.0]);
        assert_eq!(band[7], [2024.0, 5.0]);
    }
}
