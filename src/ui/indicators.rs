use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::data::indicators::StrategicIndicators;
use crate::state::AppState;
use crate::style;

// ---------------------------------------------------------------------------
// Indicator table
// ---------------------------------------------------------------------------

/// Value / target / variation per indicator, rows tinted by target status.
pub fn indicator_table(ui: &mut Ui, state: &AppState) {
    let indicators = &state.views.indicators;

    ui.push_id("indicator_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(false)
            .column(Column::remainder().at_least(220.0))
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(70.0))
            .header(20.0, |mut header| {
                for title in ["Indicator", "Value", "Target", "Variation"] {
                    header.col(|ui: &mut Ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for row_data in &indicators.rows {
                    let bg = if row_data.meets_target() {
                        style::ON_TARGET_BG
                    } else {
                        style::OFF_TARGET_BG
                    };
                    let cells = [
                        row_data.kind.to_string(),
                        format!("{:.1}", row_data.value),
                        format!("{:.0}", row_data.target),
                        row_data.variation(),
                    ];
                    body.row(20.0, |mut row| {
                        for text in cells {
                            row.col(|ui: &mut Ui| {
                                ui.label(
                                    RichText::new(text)
                                        .background_color(bg)
                                        .color(Color32::BLACK),
                                );
                            });
                        }
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Radar chart
// ---------------------------------------------------------------------------

/// Cartesian position of spoke `index` of `n` at `radius`; spoke 0 points up
/// and spokes advance clockwise.
pub fn radar_point(index: usize, n: usize, radius: f64) -> [f64; 2] {
    let angle = FRAC_PI_2 - TAU * index as f64 / n as f64;
    [radius * angle.cos(), radius * angle.sin()]
}

fn radar_polygon(values: &[f64]) -> PlotPoints {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| radar_point(i, values.len(), v))
        .collect()
}

/// Actual values against targets on a shared radial axis.
pub fn indicator_radar(ui: &mut Ui, indicators: &StrategicIndicators) {
    let n = indicators.rows.len();
    let range = indicators.radar_range();
    let values: Vec<f64> = indicators.rows.iter().map(|r| r.value).collect();
    let targets: Vec<f64> = indicators.rows.iter().map(|r| r.target).collect();

    ui.label(RichText::new("Indicators vs targets").strong());
    Plot::new("indicator_radar")
        .height(320.0)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .legend(Legend::default())
        .include_x(-range * 1.3)
        .include_x(range * 1.3)
        .include_y(-range * 1.15)
        .include_y(range * 1.15)
        .show(ui, |plot_ui| {
            let grid = Color32::from_gray(200);
            for ring in 1..=4 {
                let r = range * ring as f64 / 4.0;
                let points: PlotPoints = (0..=64).map(|k| radar_point(k, 64, r)).collect();
                plot_ui.line(Line::new(points).color(grid).width(1.0));
            }
            for (i, row) in indicators.rows.iter().enumerate() {
                let tip = radar_point(i, n, range);
                let spoke = PlotPoints::new(vec![[0.0, 0.0], tip]);
                plot_ui.line(Line::new(spoke).color(grid).width(1.0));
                let label = radar_point(i, n, range * 1.12);
                plot_ui.text(Text::new(
                    PlotPoint::new(label[0], label[1]),
                    RichText::new(row.kind.short_label()).small(),
                ));
            }

            plot_ui.polygon(
                Polygon::new(radar_polygon(&values))
                    .name("Actual")
                    .fill_color(style::BRAND_DARK.gamma_multiply(0.35))
                    .stroke(Stroke::new(2.0, style::BRAND_DARK)),
            );
            plot_ui.polygon(
                Polygon::new(radar_polygon(&targets))
                    .name("Target")
                    .fill_color(style::ALERT.gamma_multiply(0.25))
                    .stroke(Stroke::new(2.0, style::ALERT)),
            );
        });
}
