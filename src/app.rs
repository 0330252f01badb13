use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::config::Config;
use crate::state::AppState;
use crate::style;
use crate::ui::{forecast, indicators, kpi, map, panels, plans};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
    config: Config,
}

impl DashboardApp {
    pub fn new(config: Config) -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            state: AppState::new(config.default_start_date, today),
            config,
        }
    }
}

fn section(ui: &mut Ui, title: &str) {
    ui.add_space(12.0);
    ui.heading(RichText::new(title).color(style::BRAND_DARK).strong());
    ui.separator();
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.config);
        });

        // ---- Bottom panel: footer ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            panels::footer(ui);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.config);
            });

        // ---- Central panel: dashboard sections ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.heading(
                        RichText::new("Exploration and Evaluation Intelligence Platform")
                            .size(28.0)
                            .color(style::BRAND_DARK)
                            .strong(),
                    );
                    ui.label(
                        RichText::new("Integrated strategic monitoring system - Ministry of Energy")
                            .color(style::BRAND),
                    );

                    section(ui, "Executive Dashboard");
                    kpi::kpi_cards(ui, &self.state);

                    section(ui, "Strategic Area Map");
                    ui.columns(2, |cols: &mut [Ui]| {
                        map::area_map(&mut cols[0], &mut self.state, &self.config.map);
                        map::resource_summary(&mut cols[1], &self.state);
                    });

                    section(ui, "Strategic Indicators");
                    ui.columns(2, |cols: &mut [Ui]| {
                        indicators::indicator_table(&mut cols[0], &self.state);
                        indicators::indicator_radar(&mut cols[1], &self.state.views.indicators);
                    });

                    section(ui, "Strategic Plan Tracking");
                    ui.columns(2, |cols: &mut [Ui]| {
                        plans::plans_table(&mut cols[0], &self.state);
                        plans::investment_donut(&mut cols[1], &self.state);
                    });

                    section(ui, "Predictive Analysis");
                    ui.columns(2, |cols: &mut [Ui]| {
                        forecast::discovery_forecast(&mut cols[0], &self.state);
                        forecast::geological_risk(&mut cols[1], &self.state);
                    });
                });
        });
    }
}
