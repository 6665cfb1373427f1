use eframe::egui;

mod app;
mod command;
mod config;
mod shortcut;
mod ui;
mod utils;
mod windows;

fn main() -> eframe::Result<()> {
    env_logger::init();
    eframe::run_native(
        "HellSpawner",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([1440.0, 900.0]),
            ..Default::default()
        },
        Box::new(|cc| Ok(Box::new(app::HellSpawnerApp::new(cc)))),
    )
}
