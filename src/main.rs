mod app;
mod config;
mod data;
mod state;
mod style;
mod ui;

use anyhow::Context;
use app::DashboardApp;
use config::Config;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();

    let config = Config::from_env().context("loading dashboard configuration")?;
    log::info!(
        "Starting exploration dashboard (manual: {}, map centre: {}, {})",
        config.manual_path.display(),
        config.map.center_lat,
        config.map.center_lon
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Exploration and Evaluation Platform",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the logo from disk.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DashboardApp::new(config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("dashboard exited with an error: {e}"))
}
