use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::data::plans::{investment_distribution, PlanRow};
use crate::state::AppState;
use crate::style;

const DONUT_INNER: f64 = 0.4;
const DONUT_OUTER: f64 = 1.0;

// ---------------------------------------------------------------------------
// Plan tracking table
// ---------------------------------------------------------------------------

fn progress_cell(ui: &mut Ui, row: &PlanRow) {
    if !row.has_data() {
        ui.add(
            egui::ProgressBar::new(0.0)
                .desired_width(ui.available_width())
                .text(RichText::new("No data").color(Color32::DARK_GRAY)),
        );
        return;
    }
    let fraction = (row.progress_pct / 100.0) as f32;
    ui.add(
        egui::ProgressBar::new(fraction)
            .desired_width(ui.available_width())
            .fill(style::plan_status_color(row.status))
            .text(format!("{}% - {}", row.progress_pct, row.status)),
    );
}

/// Operator, area, investment and a progress bar per plan.
pub fn plans_table(ui: &mut Ui, state: &AppState) {
    egui::Grid::new("plans_table")
        .num_columns(4)
        .striped(true)
        .spacing([12.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            for title in ["Operator", "Area", "Investment (MUSD)", "Progress"] {
                ui.strong(title);
            }
            ui.end_row();

            for row in &state.views.plans {
                ui.label(row.operator);
                ui.label(row.area_label());
                ui.label(format!("{}", row.investment_musd));
                progress_cell(ui, row);
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Investment donut
// ---------------------------------------------------------------------------

/// Outline of an annulus sector between two angles (radians, counter-clockwise).
pub fn donut_sector(start: f64, end: f64, inner: f64, outer: f64) -> Vec<[f64; 2]> {
    let steps = (((end - start) / (TAU / 120.0)).ceil() as usize).max(2);
    let arc = |r: f64, k: usize| {
        let a = start + (end - start) * k as f64 / steps as f64;
        [r * a.cos(), r * a.sin()]
    };
    let mut points: Vec<[f64; 2]> = (0..=steps).map(|k| arc(outer, k)).collect();
    points.extend((0..=steps).rev().map(|k| arc(inner, k)));
    points
}

/// Share of investment per operator; warns instead when nothing matches.
pub fn investment_donut(ui: &mut Ui, state: &AppState) {
    let slices = investment_distribution(&state.views.plans);
    if slices.is_empty() {
        ui.colored_label(style::WARNING, "No investment data to show for the current filters");
        return;
    }

    ui.label(RichText::new("Investment by operator").strong());
    let total: f64 = slices.iter().map(|(_, v)| v).sum();
    let colors = style::sequential_greens(slices.len());

    Plot::new("investment_donut")
        .height(280.0)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .legend(Legend::default())
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            // clockwise from twelve o'clock
            let mut angle = FRAC_PI_2;
            for ((operator, value), color) in slices.iter().zip(colors) {
                let sweep = TAU * value / total;
                let sector = donut_sector(angle - sweep, angle, DONUT_INNER, DONUT_OUTER);
                let points: PlotPoints = sector.into_iter().collect();
                plot_ui.polygon(
                    Polygon::new(points)
                        .name(*operator)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                let mid = angle - sweep / 2.0;
                let r = (DONUT_INNER + DONUT_OUTER) / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(r * mid.cos(), r * mid.sin()),
                    RichText::new(format!("{:.1}%", value / total * 100.0))
                        .small()
                        .color(Color32::BLACK),
                ));
                angle -= sweep;
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_runs_along_outer_then_inner_arc() {
        let pts = donut_sector(0.0, FRAC_PI_2, 0.4, 1.0);
        let first = pts[0];
        let last = pts[pts.len() - 1];
        assert!((first[0] - 1.0).abs() < 1e-9 && first[1].abs() < 1e-9);
        assert!((last[0] - 0.4).abs() < 1e-9 && last[1].abs() < 1e-9);
        assert_eq!(pts.len() % 2, 0);
        for p in &pts[..pts.len() / 2] {
            assert!(((p[0] * p[0] + p[1] * p[1]).sqrt() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn tiny_sector_still_has_a_shape() {
        assert_eq!(donut_sector(0.0, 1e-6, 0.4, 1.0).len(), 6);
    }
}
