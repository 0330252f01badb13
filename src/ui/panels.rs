use std::collections::BTreeSet;
use std::fmt::Display;
use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::config::Config;
use crate::data::export::{export_areas, SUPPORTED_EXTENSIONS};
use crate::data::filter::FilterSelection;
use crate::data::model::{reference_areas, AreaStatus, ContractType, ResourceType};
use crate::state::AppState;
use crate::style;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, config: &Config) {
    if config.logo_path.exists() {
        let uri = format!("file://{}", config.logo_path.display());
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add(
                egui::Image::new(uri)
                    .max_width(ui.available_width() * 0.8)
                    .max_height(120.0)
                    .rounding(4.0),
            );
        });
        ui.add_space(4.0);
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.separator();
            ui.label(RichText::new("Developed by:").strong());
            ui.label(RichText::new(&config.developer).italics());
            ui.label(RichText::new("Date:").strong());
            ui.label(chrono::Local::now().format("%d/%m/%Y").to_string());
            ui.separator();

            if ui
                .button("📄 Download manual")
                .on_hover_text("Save the user manual as a PDF file")
                .clicked()
            {
                download_manual(state, &config.manual_path);
            }
            ui.separator();

            ui.heading("Filters");
            let mut changed = false;
            ui.horizontal(|ui: &mut Ui| {
                if ui
                    .button("Reset")
                    .on_hover_text("Restore the default filters")
                    .clicked()
                {
                    state.selection = FilterSelection {
                        date_range: state.selection.date_range,
                        ..FilterSelection::default()
                    };
                    changed = true;
                }
                if ui.button("Clear all").clicked() {
                    state.selection = FilterSelection {
                        date_range: state.selection.date_range,
                        ..FilterSelection::none()
                    };
                    changed = true;
                }
            });
            changed |= multi_select(
                ui,
                "Contract type",
                &ContractType::ALL,
                &mut state.selection.contract_types,
            );
            changed |= multi_select(
                ui,
                "Area status",
                &AreaStatus::ALL,
                &mut state.selection.statuses,
            );
            changed |= multi_select(
                ui,
                "Resource type",
                &ResourceType::ALL,
                &mut state.selection.resource_types,
            );

            ui.separator();
            ui.strong("Date range");
            if let Some(range) = state.selection.date_range.as_mut() {
                egui::Grid::new("date_range").num_columns(2).show(ui, |ui: &mut Ui| {
                    ui.label("Start");
                    changed |= ui
                        .add(DatePickerButton::new(&mut range.start).id_salt("date_start"))
                        .changed();
                    ui.end_row();
                    ui.label("End");
                    changed |= ui
                        .add(DatePickerButton::new(&mut range.end).id_salt("date_end"))
                        .changed();
                    ui.end_row();
                });
            }
            if state.date_range_inverted() {
                ui.colored_label(style::WARNING, "Start date is after end date.");
            }
            ui.label(
                RichText::new("Areas carry no dates; the range does not narrow the map.")
                    .small()
                    .weak(),
            );

            ui.separator();
            let export_button = egui::Button::new("Export filtered areas…");
            if ui.add_enabled(!state.outcome.is_empty(), export_button).clicked() {
                export_dialog(state);
            }

            if changed {
                state.refilter();
            }
        });
}

/// Checkbox group over a closed enumeration, with All / None shortcuts.
/// Returns whether the selection changed.
fn multi_select<T>(ui: &mut Ui, title: &str, all: &[T], selected: &mut BTreeSet<T>) -> bool
where
    T: Copy + Ord + Display,
{
    let mut changed = false;
    let header_text = format!("{title}  ({}/{})", selected.len(), all.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    selected.extend(all.iter().copied());
                    changed = true;
                }
                if ui.small_button("None").clicked() {
                    selected.clear();
                    changed = true;
                }
            });

            for &value in all {
                let mut checked = selected.contains(&value);
                if ui.checkbox(&mut checked, value.to_string()).changed() {
                    if checked {
                        selected.insert(value);
                    } else {
                        selected.remove(&value);
                    }
                    changed = true;
                }
            }
        });

    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, config: &Config) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export filtered areas…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
            if ui.button("Download manual…").clicked() {
                download_manual(state, &config.manual_path);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();
        let total = reference_areas().len();
        ui.label(format!("{} of {total} areas shown", state.outcome.count));

        if let Some(msg) = state.status_message.clone() {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
            if ui.small_button("✕").clicked() {
                state.clear_status();
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

const FOOTER_CREDIT: &str =
    "Platform developed by the Directorate of Exploration Plans and Evaluation Programs";

pub fn footer(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(FOOTER_CREDIT).color(style::BRAND_DARK));
        ui.label(
            RichText::new(format!(
                "Ministry of Energy | Version {} | Last updated: {}",
                env!("CARGO_PKG_VERSION"),
                chrono::Local::now().format("%d/%m/%Y")
            ))
            .small(),
        );
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered areas")
        .set_file_name("areas.csv")
        .add_filter("Supported files", &SUPPORTED_EXTENSIONS)
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .save_file();

    if let Some(path) = file {
        match export_areas(&path, &state.outcome.matched) {
            Ok(()) => state.clear_status(),
            Err(e) => {
                log::error!("Failed to export areas: {e:#}");
                state.set_status(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn download_manual(state: &mut AppState, manual: &Path) {
    let file_name = manual
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("manual.pdf");
    let file = rfd::FileDialog::new()
        .set_title("Save user manual")
        .set_file_name(file_name)
        .add_filter("PDF", &["pdf"])
        .save_file();

    if let Some(target) = file {
        match copy_manual(manual, &target) {
            Ok(bytes) => {
                log::info!("Saved manual ({bytes} bytes) to {}", target.display());
                state.clear_status();
            }
            Err(e) => {
                log::error!("Failed to save manual: {e:#}");
                state.set_status(format!("Error: {e:#}"));
            }
        }
    }
}

fn copy_manual(source: &Path, target: &Path) -> Result<u64> {
    if !source.is_file() {
        anyhow::bail!("manual not found at {}", source.display());
    }
    std::fs::copy(source, target)
        .with_context(|| format!("copying {} to {}", source.display(), target.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_manual_copies_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("manual.pdf");
        std::fs::write(&source, b"%PDF-1.4\n").unwrap();
        let target = dir.path().join("saved.pdf");
        assert_eq!(copy_manual(&source, &target).unwrap(), 9);
        assert_eq!(std::fs::read(&target).unwrap(), b"%PDF-1.4\n");
    }

    #[test]
    fn missing_manual_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.pdf");
        let err = copy_manual(&missing, &dir.path().join("out.pdf")).unwrap_err();
        assert!(err.to_string().contains("manual not found"));
    }
}
