use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::config::MapConfig;
use crate::data::engine::ResourceSummary;
use crate::data::model::{AreaRecord, AreaStatus, GeoPoint};
use crate::state::AppState;
use crate::style;

const HIGHLIGHT: Color32 = Color32::from_rgb(0xff, 0xf3, 0xb0);

// ---------------------------------------------------------------------------
// Area map (lon/lat plot)
// ---------------------------------------------------------------------------

/// Tooltip shown when hovering an area.
pub fn tooltip_lines(area: &AreaRecord) -> [String; 5] {
    [
        format!("Area: {}", area.name),
        format!("Contract: {}", area.contract_type),
        format!("Resource: {}", area.resource_type),
        format!("Investment: ${} MUSD", area.investment_musd),
        format!("Reserves: {} MMBOE", area.reserves_mmboe),
    ]
}

/// First matched area whose boundary contains `point`.
pub fn area_at<'a>(areas: &[&'a AreaRecord], point: GeoPoint) -> Option<&'a AreaRecord> {
    areas.iter().copied().find(|a| a.boundary.contains(point))
}

/// Outline for an area; the one under the cursor (last frame) is drawn heavier.
pub fn area_stroke(area: &AreaRecord, hovered: Option<&str>) -> Stroke {
    let color = style::status_color(area.status);
    if hovered == Some(area.name.as_str()) {
        Stroke::new(4.0, style::BRAND_DARK)
    } else {
        Stroke::new(2.0, color)
    }
}

/// Render matched areas as filled polygons coloured by status.
pub fn area_map(ui: &mut Ui, state: &mut AppState, map: &MapConfig) {
    let half_lon = map.span_deg / 2.0;
    let half_lat = half_lon * 0.6;

    let mut plot = Plot::new("area_map")
        .height(420.0)
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .include_x(map.center_lon - half_lon)
        .include_x(map.center_lon + half_lon)
        .include_y(map.center_lat - half_lat)
        .include_y(map.center_lat + half_lat)
        .legend(Legend::default());
    // keep every matched area in view even when it falls outside the default span
    for b in state.outcome.matched.iter().filter_map(|a| a.boundary.bounds()) {
        plot = plot
            .include_x(b.min.lon)
            .include_x(b.max.lon)
            .include_y(b.min.lat)
            .include_y(b.max.lat);
    }

    let hovered = state.hovered_area.as_deref();
    let response = plot.show(ui, |plot_ui| {
        for area in &state.outcome.matched {
            let color = style::status_color(area.status);
            let points: PlotPoints = area
                .boundary
                .vertices()
                .iter()
                .map(|p| [p.lon, p.lat])
                .collect();
            plot_ui.polygon(
                Polygon::new(points)
                    .name(&area.name)
                    .fill_color(color.gamma_multiply(0.5))
                    .stroke(area_stroke(area, hovered)),
            );
            if let Some(c) = area.boundary.centroid() {
                plot_ui.text(
                    Text::new(PlotPoint::new(c.lon, c.lat), RichText::new(&area.name).small())
                        .color(style::BRAND_DARK),
                );
            }
        }

        plot_ui
            .pointer_coordinate()
            .and_then(|p| area_at(&state.outcome.matched, GeoPoint::new(p.x, p.y)))
    });

    state.hovered_area = response.inner.map(|a| a.name.clone());
    if let Some(area) = response.inner {
        response.response.on_hover_ui_at_pointer(|ui: &mut Ui| {
            for line in tooltip_lines(area) {
                ui.label(line);
            }
        });
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.colored_label(style::status_color(AreaStatus::Active), "■ Active");
        ui.colored_label(style::ALERT, "■ Other status");
    });
}

// ---------------------------------------------------------------------------
// Summary by resource type
// ---------------------------------------------------------------------------

fn max_of(summary: &[ResourceSummary], f: impl Fn(&ResourceSummary) -> f64) -> Option<f64> {
    summary.iter().map(f).reduce(f64::max)
}

fn cell(ui: &mut Ui, value: f64, max: Option<f64>) {
    let text = RichText::new(format!("{value}"));
    if max == Some(value) {
        ui.label(text.background_color(HIGHLIGHT).strong());
    } else {
        ui.label(text);
    }
}

/// Investment and reserves per resource type, maxima highlighted.
pub fn resource_summary(ui: &mut Ui, state: &AppState) {
    ui.strong("Summary by resource type");
    let summary = &state.views.resource_summary;
    if summary.is_empty() {
        ui.label(RichText::new("No areas match the current filters.").weak());
        return;
    }

    let max_inv = max_of(summary, |s| s.investment_musd);
    let max_res = max_of(summary, |s| s.reserves_mmboe);

    ui.push_id("resource_summary", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(110.0))
            .column(Column::auto())
            .column(Column::remainder())
            .header(20.0, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("Resource");
                });
                header.col(|ui: &mut Ui| {
                    ui.strong("Investment (MUSD)");
                });
                header.col(|ui: &mut Ui| {
                    ui.strong("Reserves (MMBOE)");
                });
            })
            .body(|mut body| {
                for s in summary {
                    body.row(18.0, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.label(s.resource_type.to_string());
                        });
                        row.col(|ui: &mut Ui| cell(ui, s.investment_musd, max_inv));
                        row.col(|ui: &mut Ui| cell(ui, s.reserves_mmboe, max_res));
                    });
                }
            });
    });
}
